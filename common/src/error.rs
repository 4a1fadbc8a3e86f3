use thiserror::Error;

/// Failures of a single encoding request.
///
/// Every variant is recoverable: the caller reports it and may retry with
/// different counts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A negative TNT count reached the encoder.
    #[error("Value {value} cannot be negative")]
    InvalidInput { value: i64 },

    /// The greedy walk over the weights left something over.
    #[error("Cannot represent {value} with given weights. Remainder: {remainder}")]
    NonRepresentable { value: i64, remainder: i64 },

    /// A bitstring handed to the formatter has the wrong shape.
    #[error("Malformed {field}: expected {expected} binary digits, found {found:?}")]
    Malformed {
        field: &'static str,
        expected: usize,
        found: String,
    },
}

/// Failures while building a [`crate::weights::WeightSet`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WeightSetError {
    #[error("Expected {expected} weights, found {found}")]
    WrongLength { expected: usize, found: usize },

    #[error("Weight at position {index} must be positive")]
    ZeroWeight { index: usize },

    #[error("Invalid weight '{token}': {reason}")]
    Parse { token: String, reason: String },
}
