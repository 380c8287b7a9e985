//! Transaction record types for the statement validator
//!
//! A [`Record`] is one parsed transaction from a customer statement. It is
//! immutable once built, and it can only be built through [`Record::new`],
//! which enforces the mutation format.

use super::error::RecordError;
use regex::Regex;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Transaction reference as it appears in the input
///
/// Expected to be unique within a batch; uniqueness is checked by the validator.
pub type TransactionReference = i64;

/// Accepted mutation strings: optional sign, digits, optional one or two decimals.
/// Examples: `+16.97`, `-12`, `100.5`.
static MUTATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?[0-9]+(\.[0-9]{1,2})?$").expect("Invalid mutation regex pattern")
});

/// Direction of a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationSign {
    /// `+`, increases the balance
    Credit,
    /// `-`, decreases the balance
    Debit,
}

/// One transaction from a customer statement
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    transaction_reference: TransactionReference,
    account_number: String,
    description: String,
    start_balance: Decimal,
    mutation_sign: MutationSign,
    mutation_amount: Decimal,
    end_balance: Decimal,
}

impl Record {
    /// Build a record, checking the mutation string
    ///
    /// The mutation combines sign and magnitude (`+16.97`, `-12`). A mutation
    /// without a sign is a credit of the whole amount; its first digit is never
    /// read as a sign. Balances are not cross-checked here; that is the
    /// validator's job.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::InvalidFormat`] if `mutation` does not match
    /// the accepted pattern, and [`RecordError::AmountOutOfRange`] if it
    /// matches but the amount does not fit in a [`Decimal`].
    pub fn new(
        transaction_reference: TransactionReference,
        account_number: impl Into<String>,
        description: impl Into<String>,
        start_balance: Decimal,
        mutation: &str,
        end_balance: Decimal,
    ) -> Result<Self, RecordError> {
        let (mutation_sign, mutation_amount) = parse_mutation(transaction_reference, mutation)?;

        Ok(Record {
            transaction_reference,
            account_number: account_number.into(),
            description: description.into(),
            start_balance,
            mutation_sign,
            mutation_amount,
            end_balance,
        })
    }

    pub fn transaction_reference(&self) -> TransactionReference {
        self.transaction_reference
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn start_balance(&self) -> Decimal {
        self.start_balance
    }

    pub fn mutation_sign(&self) -> MutationSign {
        self.mutation_sign
    }

    /// Magnitude of the mutation, never negative
    pub fn mutation_amount(&self) -> Decimal {
        self.mutation_amount
    }

    pub fn end_balance(&self) -> Decimal {
        self.end_balance
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transaction Reference: {}, Description: {}",
            self.transaction_reference, self.description
        )
    }
}

/// Split a mutation string into sign and amount
fn parse_mutation(
    reference: TransactionReference,
    mutation: &str,
) -> Result<(MutationSign, Decimal), RecordError> {
    if !MUTATION_RE.is_match(mutation) {
        return Err(RecordError::invalid_format(reference, mutation));
    }

    let (sign, amount) = match mutation.as_bytes().first() {
        Some(b'+') => (MutationSign::Credit, &mutation[1..]),
        Some(b'-') => (MutationSign::Debit, &mutation[1..]),
        _ => (MutationSign::Credit, mutation),
    };

    Decimal::from_str(amount)
        .map(|amount| (sign, amount))
        .map_err(|_| RecordError::amount_out_of_range(reference, mutation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[rstest]
    #[case::credit_two_decimals("+16.97", MutationSign::Credit, "16.97")]
    #[case::debit_integer("-12", MutationSign::Debit, "12")]
    #[case::debit_one_decimal("-100.5", MutationSign::Debit, "100.5")]
    #[case::unsigned_is_credit("100.5", MutationSign::Credit, "100.5")]
    #[case::leading_zeros("+007.10", MutationSign::Credit, "7.1")]
    fn test_new_decomposes_mutation(
        #[case] mutation: &str,
        #[case] sign: MutationSign,
        #[case] amount: &str,
    ) {
        let record = Record::new(
            1,
            "NL91ABNA0417164300",
            "Deposit",
            dec("10.00"),
            mutation,
            dec("10.00"),
        )
        .unwrap();

        assert_eq!(record.mutation_sign(), sign);
        assert_eq!(record.mutation_amount(), dec(amount));
    }

    #[rstest]
    #[case::leading_garbage("a+50")]
    #[case::three_decimals("+1.234")]
    #[case::trailing_dot("+50.")]
    #[case::no_digits("+")]
    #[case::empty("")]
    #[case::double_sign("+-5")]
    #[case::inner_space("+ 5")]
    #[case::exponent("1e5")]
    #[case::non_ascii_digits("+٣")]
    fn test_new_rejects_invalid_mutation(#[case] mutation: &str) {
        let result = Record::new(123, "NL91ABNA0417164300", "Deposit", dec("1000.0"), mutation, dec("1050.0"));

        assert_eq!(
            result.unwrap_err(),
            RecordError::InvalidFormat {
                reference: 123,
                mutation: mutation.to_string(),
            }
        );
    }

    #[test]
    fn test_new_keeps_fields() {
        let record = Record::new(
            178792,
            "NL69ABNA0433647324",
            "Flowers from Rik Dekker",
            dec("51.99"),
            "+16.97",
            dec("68.96"),
        )
        .unwrap();

        assert_eq!(record.transaction_reference(), 178792);
        assert_eq!(record.account_number(), "NL69ABNA0433647324");
        assert_eq!(record.description(), "Flowers from Rik Dekker");
        assert_eq!(record.start_balance(), dec("51.99"));
        assert_eq!(record.end_balance(), dec("68.96"));
    }

    #[test]
    fn test_display() {
        let record = Record::new(101, "NL91ABNA0417164300", "Deposit", dec("500.0"), "+50", dec("550.0")).unwrap();
        assert_eq!(record.to_string(), "Transaction Reference: 101, Description: Deposit");
    }

    #[test]
    fn test_unsigned_mutation_keeps_leading_digit() {
        let record = Record::new(1, "NL01", "Unsigned", dec("1.00"), "100.5", dec("101.50")).unwrap();

        assert_eq!(record.mutation_sign(), MutationSign::Credit);
        assert_eq!(record.mutation_amount(), dec("100.5"));
    }

    #[rstest]
    #[case::credit("+999999999999999999999999999999")]
    #[case::unsigned("999999999999999999999999999999.99")]
    fn test_new_rejects_amount_out_of_range(#[case] mutation: &str) {
        let result = Record::new(42, "NL01", "Huge", dec("0"), mutation, dec("0"));

        assert_eq!(
            result.unwrap_err(),
            RecordError::AmountOutOfRange {
                reference: 42,
                mutation: mutation.to_string(),
            }
        );
    }
}
