//! GeoQuiz Core: shared vocabulary for the reveal engine.
//!
//! This crate defines the value types, error taxonomy, and collaborator
//! traits that the reveal context and its hosts depend on. It performs no
//! I/O beyond the clock it abstracts.

pub mod camera;
pub mod clock;
pub mod collaborator;
pub mod error;
pub mod game;
pub mod geo;
