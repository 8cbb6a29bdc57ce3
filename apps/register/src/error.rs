//! # Register Error Type
//!
//! Unified error type for the register application.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Slice POS                              │
//! │                                                                         │
//! │  InvalidSelection ──┐                                                   │
//! │                     ├──► handled inside the loop: print a line,        │
//! │  OutOfStock ────────┘    re-prompt, NO state change                     │
//! │                                                                         │
//! │  Io / ConfigRead / ConfigParse ──► bubble out of run(), process exits  │
//! │                                                                         │
//! │  There are no fatal errors in normal operation; the process only       │
//! │  terminates on explicit user exit or on broken I/O.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use slice_core::OrderError;
use thiserror::Error;

/// Errors raised by the register application.
#[derive(Debug, Error)]
pub enum RegisterError {
    /// Menu input did not match any recognized option.
    ///
    /// Reported to the user as "Invalid choice." followed by a re-prompt of
    /// the same menu.
    #[error("Invalid choice.")]
    InvalidSelection,

    /// A business rule failed while composing the order.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// Reading stdin or writing stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The shop config file could not be read.
    #[error("could not read config file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The shop config file is not valid JSON (or has the wrong shape).
    #[error("could not parse config file {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results with RegisterError.
pub type RegisterResult<T> = Result<T, RegisterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_selection_message() {
        assert_eq!(RegisterError::InvalidSelection.to_string(), "Invalid choice.");
    }

    #[test]
    fn test_order_error_passes_through() {
        let err: RegisterError = OrderError::out_of_stock("Cheese").into();
        assert_eq!(err.to_string(), "out of stock: Cheese");
    }
}
