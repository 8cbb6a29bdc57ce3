//! # Payment Stub
//!
//! Pretend payment processing: two methods that differ only in the label
//! they print. No transfer happens and there is no failure path.
//!
//! ## Payment Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Payment Capture                                      │
//! │                                                                         │
//! │  Order.total() ──► Payment::capture(method, amount)                     │
//! │                          │                                              │
//! │                          ▼                                              │
//! │                    Payment record (id, method, amount, timestamp)       │
//! │                          │                                              │
//! │                          ▼                                              │
//! │                    confirmation() ──► "Paid $6.50 using Credit Card."   │
//! │                                                                         │
//! │  Neither the ledger nor the order is touched by payment.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer pays. The variants differ only in the printed label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    PayPal,
    CreditCard,
}

impl PaymentMethod {
    /// Label used in payment confirmations.
    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::CreditCard => "Credit Card",
        }
    }
}

// =============================================================================
// Payment Record
// =============================================================================

/// A captured payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Method used.
    pub method: PaymentMethod,

    /// Amount paid in cents.
    pub amount_cents: i64,

    /// When the payment was captured.
    pub created_at: DateTime<Utc>,
}

impl Payment {
    /// Captures a payment. Always succeeds: this is a reporting stub, not a
    /// processor.
    pub fn capture(method: PaymentMethod, amount: Money) -> Payment {
        Payment {
            id: Uuid::new_v4().to_string(),
            method,
            amount_cents: amount.cents(),
            created_at: Utc::now(),
        }
    }

    /// Returns the payment amount as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }

    /// The confirmation line shown to the customer.
    ///
    /// ## Example
    /// ```rust
    /// use slice_core::money::Money;
    /// use slice_core::payment::{Payment, PaymentMethod};
    ///
    /// let payment = Payment::capture(PaymentMethod::CreditCard, Money::from_cents(650));
    /// assert_eq!(payment.confirmation(), "Paid $6.50 using Credit Card.");
    /// ```
    pub fn confirmation(&self) -> String {
        format!("Paid {} using {}.", self.amount(), self.method.label())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(PaymentMethod::PayPal.label(), "PayPal");
        assert_eq!(PaymentMethod::CreditCard.label(), "Credit Card");
    }

    #[test]
    fn test_credit_card_confirmation() {
        let payment = Payment::capture(PaymentMethod::CreditCard, Money::from_cents(650));

        let confirmation = payment.confirmation();
        assert!(confirmation.contains("$6.50"));
        assert!(confirmation.contains("Credit Card"));
        assert_eq!(confirmation, "Paid $6.50 using Credit Card.");
    }

    #[test]
    fn test_paypal_confirmation() {
        let payment = Payment::capture(PaymentMethod::PayPal, Money::from_cents(500));
        assert_eq!(payment.confirmation(), "Paid $5.00 using PayPal.");
    }

    #[test]
    fn test_capture_records_amount() {
        let payment = Payment::capture(PaymentMethod::PayPal, Money::from_cents(770));
        assert_eq!(payment.amount().cents(), 770);
        assert_eq!(payment.method, PaymentMethod::PayPal);
    }
}
