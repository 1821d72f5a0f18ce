//! Common test utilities for themelift integration tests.
//!
//! This module provides:
//! - `TestEnv`: an isolated theme project plus deploy directory, with
//!   helpers to run the themelift binary against them
//! - Fixtures: reusable theme content constants and a fake sass compiler

pub mod fixtures;

pub use env::*;
pub use fixtures::*;
