#![forbid(unsafe_code)]

//! Error types for encoding and decoding.

/// Errors returned by the codec and its building blocks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// Bad parity count, size mismatch, empty message or bad erasure list.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("division by zero in GF(256)")]
    DivisionByZero,

    #[error("zero has no multiplicative inverse in GF(256)")]
    NoInverse,

    /// Polynomial division by an empty divisor or one whose leading coefficient is zero.
    #[error("malformed polynomial divisor")]
    MalformedDivisor,

    /// The locator implies more faults than the parity symbols can resolve.
    #[error("too many errors: locator degree {degree} with {erasures} erasures exceeds {nsym} parity symbols")]
    TooManyErrors {
        /// Degree of the final locator (erasures plus discovered errors).
        degree: usize,
        erasures: usize,
        nsym: usize,
    },

    /// The locator does not have as many roots inside the codeword as its degree.
    #[error("uncorrectable codeword: locator expects {expected} faults, found {found}")]
    UncorrectableCodeword { expected: usize, found: usize },

    /// Correction was applied but the result is still not a codeword.
    #[error("correction failed: syndromes remain nonzero after correction")]
    CorrectionFailed,
}

impl CodecError {
    /// The fault pattern exceeds what this codec can repair. Callers may retry with more
    /// erasure information or fetch the data again.
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(
            self,
            Self::TooManyErrors { .. } | Self::UncorrectableCodeword { .. } | Self::CorrectionFailed
        )
    }

    /// Field or polynomial invariant violated; never expected with validated inputs.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::DivisionByZero | Self::NoInverse | Self::MalformedDivisor)
    }
}

/// Convenient alias for codec results.
pub type CodecResult<T> = Result<T, CodecError>;
