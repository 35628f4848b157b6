//! Test collaborators: mock commit and advance implementations.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use geoquiz_core::collaborator::{QuestionAdvancer, RevealCommitter};
use geoquiz_core::error::DomainError;

/// A committer that always succeeds and counts its calls.
#[derive(Debug, Default)]
pub struct RecordingCommitter {
    calls: AtomicUsize,
}

impl RecordingCommitter {
    /// Create a committer with no recorded calls.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `commit_reveal` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RevealCommitter for RecordingCommitter {
    async fn commit_reveal(&self) -> Result<(), DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// A committer that always fails. Useful for testing the `Failed` path.
#[derive(Debug)]
pub struct FailingCommitter;

#[async_trait]
impl RevealCommitter for FailingCommitter {
    async fn commit_reveal(&self) -> Result<(), DomainError> {
        Err(DomainError::CommitFailure("connection refused".into()))
    }
}

/// A committer that fails a fixed number of times, then succeeds. Used to
/// exercise retry after failure.
#[derive(Debug)]
pub struct FlakyCommitter {
    remaining_failures: Mutex<usize>,
    calls: AtomicUsize,
}

impl FlakyCommitter {
    /// Create a committer that fails the first `failures` calls.
    #[must_use]
    pub fn new(failures: usize) -> Self {
        Self {
            remaining_failures: Mutex::new(failures),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `commit_reveal` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RevealCommitter for FlakyCommitter {
    async fn commit_reveal(&self) -> Result<(), DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut remaining = self.remaining_failures.lock().unwrap();
        if *remaining > 0 {
            *remaining -= 1;
            return Err(DomainError::CommitFailure("service unavailable".into()));
        }
        Ok(())
    }
}

/// An advancer that counts its invocations.
#[derive(Debug, Default)]
pub struct RecordingAdvancer {
    calls: AtomicUsize,
}

impl RecordingAdvancer {
    /// Create an advancer with no recorded calls.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `advance` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl QuestionAdvancer for RecordingAdvancer {
    fn advance(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}
