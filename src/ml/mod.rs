//! Model artifact handling and inference
//!
//! The trained model is an opaque collaborator: the engine loads it, checks
//! its feature schema against the fixed row layout, and calls predict. No
//! training or export logic lives here.

pub mod model;
pub mod schema;
