//! # Order Composer
//!
//! Builds the in-progress priced, described pizza for one order.
//!
//! ## Composition Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Composition                                    │
//! │                                                                         │
//! │  Order::begin(ledger, Margherita)                                       │
//! │        │                                                                │
//! │        ├── ledger.reserve("Margherita") fails ──► Err(OutOfStock)      │
//! │        │                                          (no Order exists)    │
//! │        ▼                                                                │
//! │  Order { base: Margherita, toppings: [] }                               │
//! │        │                                                                │
//! │  add_topping(ledger, Cheese)   ──► reserve ──► push frozen line        │
//! │  add_topping(ledger, Olives)   ──► reserve ──► push frozen line        │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  description() = "Margherita + Cheese + Olives"                         │
//! │  total()       = $5.00 + $1.00 + $0.50 = $6.50                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! Each topping line freezes the topping's name and price at the moment it
//! is added, the same way a sale line freezes product data at sale time.
//! With a compile-time catalog the values cannot drift today, but the
//! receipt renders purely from the order's own lines.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{BaseKind, ToppingKind};
use crate::error::{OrderError, OrderResult};
use crate::ledger::InventoryLedger;
use crate::money::Money;

/// Separator between the base name and each topping in a description.
pub const DESCRIPTION_SEPARATOR: &str = " + ";

// =============================================================================
// Topping Line
// =============================================================================

/// One topping added to an order.
///
/// Name and price are frozen at add time (snapshot pattern).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToppingLine {
    /// Which topping this line is.
    pub kind: ToppingKind,

    /// Topping name at time of adding (frozen).
    pub name: String,

    /// Incremental price in cents at time of adding (frozen).
    pub price_cents: i64,
}

impl ToppingLine {
    fn from_kind(kind: ToppingKind) -> Self {
        ToppingLine {
            kind,
            name: kind.name().to_string(),
            price_cents: kind.price().cents(),
        }
    }

    /// Returns the line price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Order
// =============================================================================

/// The in-progress priced, described pizza being assembled for one order.
///
/// ## Invariants
/// - An `Order` only exists if its base was successfully reserved
/// - Every topping line was successfully reserved before being appended
/// - `total()` is monotonically non-decreasing as toppings are added and
///   never negative
/// - Toppings keep the exact order in which they were added
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Which base anchors this order.
    pub base: BaseKind,

    /// Base name at time of ordering (frozen).
    base_name: String,

    /// Base price in cents at time of ordering (frozen).
    base_price_cents: i64,

    /// Toppings in the exact order added.
    toppings: Vec<ToppingLine>,

    /// When the order was started.
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Starts an order by reserving one unit of the base.
    ///
    /// ## Behavior
    /// - Reservation succeeds: returns an order containing only the base
    /// - Reservation fails: returns `OrderError::OutOfStock` and no order
    ///   is constructed; the ledger is unchanged
    ///
    /// ## Example
    /// ```rust
    /// use slice_core::catalog::BaseKind;
    /// use slice_core::ledger::InventoryLedger;
    /// use slice_core::order::Order;
    ///
    /// let mut ledger = InventoryLedger::with_counts([("Margherita".to_string(), 10)]);
    /// let order = Order::begin(&mut ledger, BaseKind::Margherita).unwrap();
    ///
    /// assert_eq!(order.description(), "Margherita");
    /// assert_eq!(order.total().cents(), 500);
    /// assert_eq!(ledger.available("Margherita"), 9);
    /// ```
    pub fn begin(ledger: &mut InventoryLedger, base: BaseKind) -> OrderResult<Order> {
        if !ledger.reserve(base.name()) {
            return Err(OrderError::out_of_stock(base.name()));
        }

        Ok(Order {
            id: Uuid::new_v4().to_string(),
            base,
            base_name: base.name().to_string(),
            base_price_cents: base.price().cents(),
            toppings: Vec::new(),
            created_at: Utc::now(),
        })
    }

    /// Adds a topping by reserving one unit of it.
    ///
    /// ## Behavior
    /// - Reservation succeeds: a frozen line is appended, cost goes up by
    ///   the topping price
    /// - Reservation fails: returns `OrderError::OutOfStock`; neither the
    ///   order nor the ledger changes
    pub fn add_topping(
        &mut self,
        ledger: &mut InventoryLedger,
        kind: ToppingKind,
    ) -> OrderResult<()> {
        if !ledger.reserve(kind.name()) {
            return Err(OrderError::out_of_stock(kind.name()));
        }

        self.toppings.push(ToppingLine::from_kind(kind));
        Ok(())
    }

    /// The order description: base name, then each topping name in the
    /// exact order added, joined with `" + "`.
    pub fn description(&self) -> String {
        let mut description = self.base_name.clone();
        for line in &self.toppings {
            description.push_str(DESCRIPTION_SEPARATOR);
            description.push_str(&line.name);
        }
        description
    }

    /// The accumulated cost: base price plus every topping line, folded on
    /// demand from the frozen line prices.
    pub fn total(&self) -> Money {
        Money::from_cents(self.base_price_cents)
            + self.toppings.iter().map(ToppingLine::price).sum::<Money>()
    }

    /// The toppings added so far, in order.
    pub fn toppings(&self) -> &[ToppingLine] {
        &self.toppings
    }

    /// Number of toppings on the order.
    pub fn topping_count(&self) -> usize {
        self.toppings.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
