//! Statement validation engine
//!
//! The validator walks a batch of records in input order and classifies each
//! one as passed or failed. A record fails when:
//! - its transaction reference was already seen earlier in the batch, or
//! - its end balance does not equal the start balance adjusted by its mutation.
//!
//! Balances are compared as exact decimals, so `1050.0` and `1050.00` are equal.
//! Validation never errors; malformed input is rejected before records exist.

use crate::types::{MutationSign, Record, TransactionReference};
use rust_decimal::Decimal;
use std::collections::HashSet;

/// Why a record failed
///
/// Only used for logging; the returned failures carry no reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Failure {
    DuplicateReference,
    BalanceMismatch,
}

/// Statement validation engine
///
/// Holds no state between calls; the set of seen references lives for one
/// [`Validator::validate`] call only.
#[derive(Debug, Default, Clone, Copy)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Validator
    }

    /// Return the records that fail validation, in input order
    ///
    /// The first record with a given reference is the original; every later
    /// record with that reference fails without a balance check.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use statement_validator::{Record, Validator};
    ///
    /// let records = vec![
    ///     Record::new(1, "NL01", "ok", Decimal::new(100, 0), "+5", Decimal::new(105, 0)).unwrap(),
    ///     Record::new(2, "NL01", "wrong", Decimal::new(100, 0), "-5", Decimal::new(90, 0)).unwrap(),
    /// ];
    ///
    /// let failed = Validator::new().validate(&records);
    /// assert_eq!(failed.len(), 1);
    /// assert_eq!(failed[0].transaction_reference(), 2);
    /// ```
    pub fn validate(&self, records: &[Record]) -> Vec<Record> {
        let mut seen: HashSet<TransactionReference> = HashSet::with_capacity(records.len());
        let mut failed = Vec::new();

        for record in records {
            if let Some(failure) = classify(record, &mut seen) {
                tracing::debug!(
                    reference = record.transaction_reference(),
                    ?failure,
                    "record failed validation"
                );
                failed.push(record.clone());
            }
        }

        tracing::info!(
            total = records.len(),
            failed = failed.len(),
            "validation complete"
        );
        failed
    }
}

/// Validate a batch of records with a fresh [`Validator`]
pub fn validate_records(records: &[Record]) -> Vec<Record> {
    Validator::new().validate(records)
}

fn classify(record: &Record, seen: &mut HashSet<TransactionReference>) -> Option<Failure> {
    if !seen.insert(record.transaction_reference()) {
        return Some(Failure::DuplicateReference);
    }

    match expected_end_balance(record) {
        Some(expected) if expected == record.end_balance() => None,
        // Overflow cannot match any representable end balance
        _ => Some(Failure::BalanceMismatch),
    }
}

/// Start balance adjusted by the mutation, or `None` on overflow
fn expected_end_balance(record: &Record) -> Option<Decimal> {
    let start = record.start_balance();
    let amount = record.mutation_amount();

    match record.mutation_sign() {
        MutationSign::Credit => start.checked_add(amount),
        MutationSign::Debit => start.checked_sub(amount),
    }
}
