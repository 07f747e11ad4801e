//! # academy
//!
//! Framework-independent core of an academy back office: student, course,
//! attendance and billing records, identity validation, dashboard
//! aggregation, role-filtered navigation, typed forms and UI preferences.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! The validators never fail loudly: malformed input is simply invalid.
//!
//! ## Quick Start
//!
//! ```rust
//! use academy::core::*;
//!
//! assert!(is_valid_document_number("12345678Z"));
//! assert!(is_valid_iban("ES91 2100 0418 4502 0005 1332"));
//! assert_eq!(resolve_bank_identifier("ES9121000418450200051332"), Some("CAIXESBBXXX"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Records, validators, config, builders, receipt numbering |
//! | `stats` | Dashboard and schedule aggregations |
//! | `nav` | Role-filtered navigation menu |
//! | `forms` | Typed student form state with field checks |
//! | `prefs` | UI preferences with JSON persistence |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "stats")]
pub mod stats;

#[cfg(feature = "nav")]
pub mod nav;

#[cfg(feature = "forms")]
pub mod forms;

#[cfg(feature = "prefs")]
pub mod prefs;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
