//! # Macrolens Library
//!
//! This library exposes the Macrolens command layer for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;
pub mod error;

pub use error::AppError;

// Re-export macrolens_core for convenience
pub use macrolens_core;
