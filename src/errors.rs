//! Typed errors for the synthesis pipeline.
//!
//! Synthesis failures are structural mismatches, not transient conditions:
//! they are carried as values so callers branch explicitly, and they always
//! name the offending symbol so a failure can be diagnosed without access to
//! pipeline internals. The binary layer wraps these in `anyhow` with path
//! context; the library never panics on a malformed graph.

use thiserror::Error;

/// A symbol whose shape violates a mapping assumption of the synthesizer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SynthesisError {
    /// The symbol's declared kind does not match the metadata it carries,
    /// or a symbol kind reached a mapping that cannot represent it.
    #[error("cannot synthesize a declaration for `{symbol}`: {reason}")]
    UnexpectedShape { symbol: String, reason: String },
}

impl SynthesisError {
    pub fn unexpected_shape(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnexpectedShape {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }

    /// Display identity of the symbol that caused the failure.
    pub fn symbol(&self) -> &str {
        match self {
            Self::UnexpectedShape { symbol, .. } => symbol,
        }
    }
}

pub type SynthesisResult<T> = Result<T, SynthesisError>;
