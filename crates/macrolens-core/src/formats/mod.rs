//! # Formats Module
//!
//! Serialization formats for Macrolens catalogs.
//!
//! This module contains:
//! - Binary snapshot format (postcard + header)
//!
//! Note: File I/O and JSON parsing remain in the app layer (apps/macrolens).
//! This module only handles format conversion (pure transformations).

mod persistence;

pub use persistence::*;
