//! Domain layer: the reveal round state machine and its pure projections.

pub mod aggregates;
pub mod commands;
pub mod events;
pub mod markers;
pub mod ranking;
