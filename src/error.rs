//! Error types for building run-length encoded sequences.

use thiserror::Error;

/// Result type alias for fallible run construction.
pub type RunResult<T> = Result<T, RunError>;

/// Errors raised when runs supplied from outside the encoder are invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RunError {
    /// A run was given a count of zero.
    #[error("run at position {index} has a count of zero")]
    ZeroCount {
        /// Position of the offending run in the supplied sequence
        index: usize,
    },

    /// A lone run was given a count of zero.
    #[error("run count must be at least 1")]
    EmptyRun,

    /// Adding a run would make the expanded length exceed `usize::MAX`.
    #[error("run at position {index} overflows the sequence length")]
    LengthOverflow {
        /// Position of the offending run in the supplied sequence
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_count_message() {
        let err = RunError::ZeroCount { index: 3 };
        assert_eq!(err.to_string(), "run at position 3 has a count of zero");
    }

    #[test]
    fn test_length_overflow_message() {
        let err = RunError::LengthOverflow { index: 1 };
        assert_eq!(err.to_string(), "run at position 1 overflows the sequence length");
    }
}
