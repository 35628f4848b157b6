//! Aggregate root for the reveal context.
//!
//! `RevealRound` owns the reveal phase of the active question. It is purely
//! synchronous: the choreographer locks it between suspension points and
//! carries a `RoundTicket` across them, so every step can check that the
//! question it started on is still the active one.

use std::fmt;

use geoquiz_core::camera::CameraCommand;
use geoquiz_core::clock::Clock;
use geoquiz_core::error::DomainError;
use geoquiz_core::game::{Answer, GameSnapshot};
use geoquiz_core::geo::Coordinate;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use super::events::{
    ErrorSurfaced, EventMetadata, MarkersPublished, PhaseChanged, QuestionReset, RevealEvent,
    RevealEventKind,
};
use super::markers::{Marker, derive_markers};
use super::ranking::rank_answers;

/// The single user-visible message for a failed reveal.
pub const REVEAL_FAILED_MESSAGE: &str = "Failed to reveal answers";

/// Reveal phase state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealPhase {
    /// Waiting for players to answer.
    #[default]
    Idle,
    /// Everyone has answered; the host may trigger the reveal.
    AwaitingTrigger,
    /// Commit and camera choreography in progress.
    Revealing,
    /// All markers shown and framed.
    Complete,
    /// The last reveal attempt failed; the host may retry.
    Failed,
}

impl RevealPhase {
    /// Returns the phase name as used in logs and errors.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::AwaitingTrigger => "awaiting_trigger",
            Self::Revealing => "revealing",
            Self::Complete => "complete",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for RevealPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Proof that a sequence started under a particular question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTicket {
    generation: u64,
    /// The question the sequence belongs to.
    pub question_index: u32,
    /// The map surface mounted for that question.
    pub mount_key: u64,
}

/// What a reveal needs once the commit has succeeded.
#[derive(Debug, Clone)]
pub struct RevealTargets {
    /// The truth coordinate.
    pub truth: Coordinate,
    /// Answers to the active question, highest score first.
    pub ranked: Vec<Answer>,
}

/// The aggregate root for one question's reveal.
#[derive(Debug, Default)]
pub struct RevealRound {
    phase: RevealPhase,
    /// Bumped on every question change.
    generation: u64,
    /// Bumped on every surface remount.
    mount_key: u64,
    snapshot: Option<GameSnapshot>,
    markers: Vec<Marker>,
    markers_published: bool,
    error: Option<String>,
    events: Vec<RevealEvent>,
}

impl RevealRound {
    /// Creates a round that has not yet observed any game state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// The latest observed snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Option<&GameSnapshot> {
        self.snapshot.as_ref()
    }

    /// Markers currently visible on the map.
    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Whether the reveal markers have been published for this question.
    #[must_use]
    pub fn markers_published(&self) -> bool {
        self.markers_published
    }

    /// The error currently shown to the host, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Key of the currently mounted map surface.
    #[must_use]
    pub fn mount_key(&self) -> u64 {
        self.mount_key
    }

    /// Whether every known player has answered, with at least one player.
    #[must_use]
    pub fn gate_open(&self) -> bool {
        self.snapshot
            .as_ref()
            .is_some_and(GameSnapshot::all_players_answered)
    }

    /// Removes and returns the events recorded so far.
    pub fn drain_events(&mut self) -> Vec<RevealEvent> {
        std::mem::take(&mut self.events)
    }

    /// Absorbs a new game-state snapshot.
    ///
    /// A new question index resets the round to `Idle`, clears markers and
    /// errors, and returns a ticket for the reset camera sequence on a
    /// freshly mounted surface. Otherwise the gate is re-evaluated and
    /// published markers are re-derived.
    pub fn observe(&mut self, snapshot: GameSnapshot, clock: &dyn Clock) -> Option<RoundTicket> {
        let question_changed = self
            .snapshot
            .as_ref()
            .is_none_or(|current| current.question_index != snapshot.question_index);
        self.snapshot = Some(snapshot);

        if question_changed {
            self.generation += 1;
            self.mount_key += 1;
            self.transition(RevealPhase::Idle, clock);
            self.markers.clear();
            self.markers_published = false;
            self.error = None;
            let ticket = self.ticket();
            info!(
                question_index = ticket.question_index,
                mount_key = ticket.mount_key,
                "question changed, resetting reveal round"
            );
            self.record(
                RevealEventKind::QuestionReset(QuestionReset {
                    question_index: ticket.question_index,
                    mount_key: ticket.mount_key,
                }),
                clock,
            );
            self.evaluate_gate(clock);
            return Some(ticket);
        }

        match self.phase() {
            RevealPhase::Idle | RevealPhase::AwaitingTrigger => self.evaluate_gate(clock),
            RevealPhase::Revealing | RevealPhase::Complete if self.markers_published => {
                self.markers = self.derive_current();
            }
            _ => {}
        }
        None
    }

    /// Starts a reveal from `AwaitingTrigger`, or retries from `Failed`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` if a reveal is already in
    /// flight or complete, and `DomainError::GateViolation` if not every
    /// player has answered.
    pub fn begin_reveal(&mut self, clock: &dyn Clock) -> Result<RoundTicket, DomainError> {
        let phase = self.phase();
        if matches!(phase, RevealPhase::Revealing | RevealPhase::Complete) {
            return Err(DomainError::InvalidTransition {
                phase: phase.as_str(),
                action: "trigger a reveal",
            });
        }

        if !self.gate_open() {
            let (answered, total) = self.snapshot.as_ref().map_or((0, 0), |s| {
                (s.answered_count(), s.players.len())
            });
            warn!(answered, total, "reveal triggered before every player answered");
            return Err(DomainError::GateViolation { answered, total });
        }

        self.error = None;
        self.transition(RevealPhase::Revealing, clock);
        Ok(self.ticket())
    }

    /// Ranks the active question's answers for a reveal in flight.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Superseded` if the question has changed.
    pub fn reveal_targets(&self, ticket: RoundTicket) -> Result<RevealTargets, DomainError> {
        self.ensure_current(ticket)?;
        let snapshot = self.current_snapshot()?;
        Ok(RevealTargets {
            truth: snapshot.question.location,
            ranked: rank_answers(&snapshot.answers, snapshot.question.id),
        })
    }

    /// Publishes the truth and answer markers as visible state.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Superseded` if the question has changed.
    pub fn publish_markers(
        &mut self,
        ticket: RoundTicket,
        clock: &dyn Clock,
    ) -> Result<(), DomainError> {
        self.ensure_current(ticket)?;
        self.current_snapshot()?;
        self.markers_published = true;
        self.markers = self.derive_current();
        let count = self.markers.len();
        info!(count, "reveal markers published");
        self.record(
            RevealEventKind::MarkersPublished(MarkersPublished { count }),
            clock,
        );
        Ok(())
    }

    /// Finishes a reveal in flight.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Superseded` if the question has changed.
    pub fn complete(&mut self, ticket: RoundTicket, clock: &dyn Clock) -> Result<(), DomainError> {
        self.ensure_current(ticket)?;
        self.transition(RevealPhase::Complete, clock);
        Ok(())
    }

    /// Marks a reveal in flight as failed and surfaces the generic error.
    /// Markers already published stay visible.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Superseded` if the question has changed.
    pub fn fail(&mut self, ticket: RoundTicket, clock: &dyn Clock) -> Result<(), DomainError> {
        self.ensure_current(ticket)?;
        self.transition(RevealPhase::Failed, clock);
        self.error = Some(REVEAL_FAILED_MESSAGE.to_owned());
        self.record(
            RevealEventKind::ErrorSurfaced(ErrorSurfaced {
                message: REVEAL_FAILED_MESSAGE.to_owned(),
            }),
            clock,
        );
        Ok(())
    }

    /// Records a camera command issued on behalf of this round.
    pub fn record_camera_command(&mut self, command: CameraCommand, clock: &dyn Clock) {
        self.record(RevealEventKind::CameraCommandIssued(command), clock);
    }

    /// Accepts the host's request for the next question.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` unless the reveal is complete.
    pub fn request_advance(&mut self, clock: &dyn Clock) -> Result<(), DomainError> {
        let phase = self.phase();
        if phase != RevealPhase::Complete {
            return Err(DomainError::InvalidTransition {
                phase: phase.as_str(),
                action: "advance the question",
            });
        }
        self.record(RevealEventKind::AdvanceRequested, clock);
        Ok(())
    }

    /// Fails with `DomainError::Superseded` unless `ticket` belongs to the
    /// active question.
    ///
    /// # Errors
    ///
    /// See above.
    pub fn ensure_current(&self, ticket: RoundTicket) -> Result<(), DomainError> {
        if ticket.generation == self.generation {
            Ok(())
        } else {
            Err(DomainError::Superseded {
                question_index: self.question_index(),
            })
        }
    }

    fn ticket(&self) -> RoundTicket {
        RoundTicket {
            generation: self.generation,
            question_index: self.question_index(),
            mount_key: self.mount_key,
        }
    }

    fn question_index(&self) -> u32 {
        self.snapshot.as_ref().map_or(0, |s| s.question_index)
    }

    fn current_snapshot(&self) -> Result<&GameSnapshot, DomainError> {
        // A ticket is only handed out after a snapshot has been observed.
        self.snapshot.as_ref().ok_or(DomainError::InsufficientData)
    }

    fn derive_current(&self) -> Vec<Marker> {
        let Some(snapshot) = self.snapshot.as_ref() else {
            return Vec::new();
        };
        let ranked = rank_answers(&snapshot.answers, snapshot.question.id);
        derive_markers(&snapshot.question, &snapshot.players, &ranked, self.phase())
    }

    fn evaluate_gate(&mut self, clock: &dyn Clock) {
        let next = if self.gate_open() {
            RevealPhase::AwaitingTrigger
        } else {
            RevealPhase::Idle
        };
        self.transition(next, clock);
    }

    fn transition(&mut self, to: RevealPhase, clock: &dyn Clock) {
        let from = self.phase();
        self.phase = to;
        if from == to {
            return;
        }
        info!(%from, %to, "reveal phase changed");
        self.record(
            RevealEventKind::PhaseChanged(PhaseChanged { from, to }),
            clock,
        );
    }

    fn record(&mut self, kind: RevealEventKind, clock: &dyn Clock) {
        self.events.push(RevealEvent {
            metadata: EventMetadata {
                event_id: Uuid::new_v4(),
                question_index: self.question_index(),
                occurred_at: clock.now(),
            },
            kind,
        });
    }
}
