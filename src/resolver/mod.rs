//! Request handling and specification resolution
//!
//! This module owns the one real piece of decision logic in the engine:
//! - request types and input bounds
//! - per-field resolution (manual value vs catalog mean vs fallback literal)
//! - the price segment heuristic
//! - the two derived ratios

pub mod derived;
pub mod request;
pub mod resolve;
pub mod segment;
