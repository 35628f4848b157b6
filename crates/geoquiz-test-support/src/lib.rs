//! Shared test mocks and utilities for the GeoQuiz reveal engine.

mod camera;
mod clock;
mod collaborator;

pub use camera::{RecordingCameraSurface, RecordingSurfaceFactory};
pub use clock::{FixedClock, RecordingClock};
pub use collaborator::{FailingCommitter, FlakyCommitter, RecordingAdvancer, RecordingCommitter};
