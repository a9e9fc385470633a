//! Utils module - Shared utilities and helpers
//!
//! The standalone helpers that make up most of the library. None of them
//! depend on each other.

/// Emptiness checks and sequence set operations
pub mod data;

/// Logging setup for the command-line front end
pub mod logging;

/// IEC size parsing and formatting
pub mod size;

/// UTF-8 encode / decode
pub mod text;

/// Domain-name and line-break validation
pub mod validation;
