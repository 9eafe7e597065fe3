//! Errors that can occur during automaton compilation.

/// Errors raised by `Compiler::compile`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// Lower bound above upper bound.
    #[error("invalid range: low {low:#x} is greater than high {high:#x}")]
    InvalidRange { low: u64, high: u64 },
}

impl From<bytespan_core::IntervalError> for CompileError {
    fn from(err: bytespan_core::IntervalError) -> Self {
        match err {
            bytespan_core::IntervalError::InvalidRange { low, high } => {
                CompileError::InvalidRange { low, high }
            }
        }
    }
}

pub type CompileResult<T> = Result<T, CompileError>;
