//! Error type for bignum storage and arithmetic.

use crate::storage::WORD_BITS;

/// Errors raised by [`BigNum`](crate::BigNum) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BigNumError {
    /// A word or digit buffer could not be grown.
    #[error("allocation failure: cannot reserve {requested} elements")]
    Allocation {
        /// Element count that was requested (words, or digits when rendering).
        requested: usize,
    },

    /// An argument was rejected before any storage was touched.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// `lshift` only handles shifts strictly inside one word.
    #[error("shift amount {0} out of range (must be below {WORD_BITS})")]
    ShiftOutOfRange(u32),

    /// Input was not a decimal integer literal.
    #[error("invalid decimal literal: {0:?}")]
    Parse(String),
}
