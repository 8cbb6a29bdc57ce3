//! # Error Types
//!
//! Domain-specific error types for slice-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  slice-core errors (this file)                                         │
//! │  └── OrderError       - Business rule violations (stock)               │
//! │                                                                         │
//! │  register app errors (separate crate)                                  │
//! │  └── RegisterError    - Invalid menu input, I/O, configuration         │
//! │                                                                         │
//! │  Flow: OrderError → RegisterError → user-facing message                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the item name)
//! 3. Errors are enum variants, never String
//!
//! The "is" vs "are" phrasing of the customer-facing out-of-stock message
//! depends on the item's grammatical number, so it lives with the menu
//! printing in the register app, not in this `Display` impl.

use thiserror::Error;

// =============================================================================
// Order Error
// =============================================================================

/// Business logic errors raised while composing an order.
///
/// There are no fatal errors in normal operation: a failed reservation is
/// reported and the order loop simply continues.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// A reserve attempt failed: the item has zero remaining stock
    /// (or is not a known catalog item at all).
    #[error("out of stock: {item}")]
    OutOfStock { item: String },
}

impl OrderError {
    /// Creates an out-of-stock error for `item`.
    pub fn out_of_stock(item: impl Into<String>) -> Self {
        OrderError::OutOfStock { item: item.into() }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with OrderError.
pub type OrderResult<T> = Result<T, OrderError>;

// =============================================================================
// Unit Tests
// =============================================================================
