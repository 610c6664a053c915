//! Simswap Core Library
//!
//! Core types and utilities for the SIM swap mock backend.
//! This crate provides the pure Rust components that are independent
//! of any serving surface (HTTP server, CLI).
//!
//! # Modules
//!
//! - [`payload`] - The `latestSimChange` wire payload
//! - [`generator`] - The mock response generator
//! - [`context`] - Gateway-style response context key/value store
//! - [`clock`] - Clock seam and ISO-8601 timestamp formatting
//! - [`random`] - Random draw seam for the branch decision
//! - [`error`] - Error types

pub mod clock;
pub mod context;
pub mod error;
pub mod generator;
pub mod payload;
pub mod random;

// Re-export commonly used types
pub use clock::{format_timestamp, Clock, FixedClock, SystemClock};
pub use context::{ResponseContext, CONTENT_TYPE_VAR, RESPONSE_CONTENT_VAR};
pub use error::{AppError, Result};
pub use generator::{
    generate_default, MockDateGenerator, MockResponse, CONTENT_TYPE_JSON, CURRENT_TIME_THRESHOLD,
    FIXED_SIM_CHANGE,
};
pub use payload::SimChangePayload;
pub use random::{FixedDraw, RandomSource, ThreadRandom};
