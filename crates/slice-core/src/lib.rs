//! # slice-core: Pure Business Logic for Slice POS
//!
//! This crate is the **heart** of Slice POS. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Slice POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/register (terminal I/O)                    │   │
//! │  │    Base menu ──► Topping menu ──► Payment menu ──► Receipt     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ slice-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │  catalog  │  │  ledger   │  │   order   │  │   │
//! │  │   │   Money   │  │ BaseKind  │  │ Inventory │  │   Order   │  │   │
//! │  │   │           │  │ Topping   │  │  Ledger   │  │ Topping   │  │   │
//! │  │   │           │  │   Kind    │  │           │  │   Line    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                       ┌───────────┐                            │   │
//! │  │                       │  payment  │                            │   │
//! │  │                       │  Payment  │                            │   │
//! │  │                       └───────────┘                            │   │
//! │  │                                                                 │   │
//! │  │   NO STDIN • NO STDOUT • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The fixed menu: bases and toppings with names and prices
//! - [`ledger`] - Inventory accounting (reserve one unit if available)
//! - [`order`] - Order composition (base plus topping lines)
//! - [`payment`] - Always-succeeding payment stub with two methods
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Prompting, reading and printing is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//! 5. **No Singletons**: The ledger is constructed by the caller and passed
//!    by reference; sharing is a wiring decision, not a type-level one
//!
//! ## Example Usage
//!
//! ```rust
//! use slice_core::catalog::{BaseKind, ToppingKind};
//! use slice_core::ledger::InventoryLedger;
//! use slice_core::order::Order;
//!
//! let mut ledger = InventoryLedger::with_counts([
//!     ("Margherita".to_string(), 10),
//!     ("Cheese".to_string(), 15),
//! ]);
//!
//! let mut order = Order::begin(&mut ledger, BaseKind::Margherita).unwrap();
//! order.add_topping(&mut ledger, ToppingKind::Cheese).unwrap();
//!
//! assert_eq!(order.description(), "Margherita + Cheese");
//! assert_eq!(order.total().to_string(), "$6.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod ledger;
pub mod money;
pub mod order;
pub mod payment;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use slice_core::Money` instead of
// `use slice_core::money::Money`

pub use catalog::{BaseKind, ToppingKind, BASES, TOPPINGS};
pub use error::{OrderError, OrderResult};
pub use ledger::InventoryLedger;
pub use money::Money;
pub use order::{Order, ToppingLine};
pub use payment::{Payment, PaymentMethod};
