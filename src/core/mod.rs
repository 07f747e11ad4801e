//! Core academy records, validation, configuration and numbering.
//!
//! Also home of the identity validators: the NIF-style document number
//! checksum and the IBAN mod-97 checksum with bank-code resolution.

mod builder;
mod config;
mod document;
mod error;
mod iban;
mod numbering;
mod types;
mod validation;

pub use builder::*;
pub use config::*;
pub use document::{LETTER_SEQUENCE, control_letter, is_valid_document_number};
pub use error::*;
pub use iban::{
    format_iban, iban_remainder, is_valid_bic, is_valid_iban, normalize_iban,
    resolve_bank_identifier,
};
pub use numbering::*;
pub use types::*;
pub use validation::*;
