//! Unified scheduling entry point over the detected host execution model.
//! Callers schedule location-bound repeating tasks without knowing which
//! model the host provides.

pub mod bridge;
pub use bridge::*;
