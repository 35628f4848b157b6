//! Application layer: async orchestration against the camera surface and
//! external collaborators.

pub mod camera_controller;
pub mod choreographer;
pub mod query_handlers;
