//! Errors raised while creating or pulling from a producer.
//!
//! Two moments can fail: construction, when parameters are rejected before any
//! state is captured, and production, when a specific value cannot be computed.
//! Reaching the end of a sequence is never an error; see [`Pull::Exhausted`].
//!
//! [`Pull::Exhausted`]: crate::Pull::Exhausted

use thiserror::Error;

/// Errors surfaced by constructors and by [`Producer::pull`](crate::Producer::pull).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProduceError {
    /// A constructor parameter was out of range.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// The value at `position` could not be computed.
    ///
    /// The producer that returned this is terminal afterwards.
    #[error("computation failed at position {position}: {reason}")]
    Computation { position: u64, reason: String },

    /// A producer shared behind a mutex was poisoned by a panicking holder.
    #[error("producer lock was poisoned")]
    Poisoned,
}

/// Coarse classification of a [`ProduceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    Computation,
    Poisoned,
}

impl ProduceError {
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        ProduceError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    pub fn computation(position: u64, reason: impl Into<String>) -> Self {
        ProduceError::Computation {
            position,
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ProduceError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            ProduceError::Computation { .. } => ErrorKind::Computation,
            ProduceError::Poisoned => ErrorKind::Poisoned,
        }
    }
}

/// Rejects negative values for parameters that count or bound something.
pub(crate) fn non_negative(name: &'static str, value: i64) -> Result<i64, ProduceError> {
    if value < 0 {
        return Err(ProduceError::invalid_argument(
            name,
            format!("must be >= 0, got {value}"),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ProduceError::invalid_argument("count", "must be >= 0, got -1");
        assert_eq!(err.to_string(), "invalid argument `count`: must be >= 0, got -1");

        let err = ProduceError::computation(93, "i64 overflow");
        assert_eq!(err.to_string(), "computation failed at position 93: i64 overflow");
    }

    #[test]
    fn test_kind() {
        assert_eq!(
            ProduceError::invalid_argument("step", "zero").kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(ProduceError::computation(0, "x").kind(), ErrorKind::Computation);
        assert_eq!(ProduceError::Poisoned.kind(), ErrorKind::Poisoned);
    }

    #[test]
    fn test_non_negative() {
        assert_eq!(non_negative("bound", 0), Ok(0));
        assert_eq!(non_negative("bound", 12), Ok(12));
        assert_eq!(
            non_negative("bound", -3).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }
}
