//! # edgekit
//!
//! Small, independent helpers for HTTP edge services: domain-name validation,
//! IEC size parsing, client IP resolution from proxy headers, and a handful of
//! value and sequence utilities. A command-line front end (`edgekit`) wraps the
//! same functions.
//!
//! ```rust
//! use edgekit::prelude::*;
//!
//! assert!(is_fqdn("example.com", &FqdnOptions::default()));
//! assert_eq!(iec_to_num("1K"), 1024.0);
//! assert_eq!(array_merge(&[1, 2], &[2, 3]), vec![1, 2, 3]);
//! ```

pub use error::AppError;

/// Prelude module re-exporting the library surface.
pub mod prelude {
    pub use crate::Result;
    pub use crate::error::AppError;

    pub use crate::api::client_ip::{ClientIp, IpSource, get_client_ip, resolve_client_ip};
    pub use crate::utils::data::{
        Collection, array_difference, array_merge, is_empty, is_empty_collection,
    };
    pub use crate::utils::size::{IecUnit, iec_to_num, num_to_iec};
    pub use crate::utils::text::{text_decode, text_decode_strict, text_encode};
    pub use crate::utils::validation::{
        FqdnError, FqdnOptions, is_fqdn, is_with_line_break, validate_fqdn,
    };
}

/// Library layers
pub mod api; // Request header helpers
pub mod utils; // Validation, sizes, text and data helpers

/// Command-line front end (dependency flow: CLI → Storage → Utils)
pub mod cli;
pub mod display;
pub mod storage;

pub mod error;

pub type Result<T> = std::result::Result<T, AppError>;
