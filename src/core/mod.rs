//! Core business logic module
//!
//! - `validator` - Duplicate detection and balance reconciliation

pub mod validator;

pub use validator::{validate_records, Validator};
