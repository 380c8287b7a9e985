//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `record`: The transaction record and its mutation
//! - `batch`: Records and rejections read from one file
//! - `error`: Error types for the statement validator

pub mod batch;
pub mod error;
pub mod record;

pub use batch::{Batch, Rejection, RejectionReason};
pub use error::{InputLocation, RecordError, StatementError};
pub use record::{MutationSign, Record, TransactionReference};
