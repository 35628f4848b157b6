//! GeoQuiz: Reveal choreography bounded context.
//!
//! Responsible for deciding when a reveal may start, ranking the active
//! question's answers, deriving map markers, and sequencing the animated
//! camera transitions of a reveal while staying consistent with question
//! changes.

pub mod application;
pub mod config;
pub mod domain;
