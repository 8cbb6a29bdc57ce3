//! # Catalog Module
//!
//! The fixed menu of the pizza counter: two bases and three toppings.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog Types                                   │
//! │                                                                         │
//! │  ┌─────────────────┐         ┌─────────────────┐                       │
//! │  │    BaseKind     │         │   ToppingKind   │                       │
//! │  │  ─────────────  │         │  ─────────────  │                       │
//! │  │  Margherita     │         │  Cheese  +$1.00 │                       │
//! │  │         $5.00   │         │  Olives  +$0.50 │                       │
//! │  │  Pepperoni      │         │  Mushrooms      │                       │
//! │  │         $6.00   │         │          +$0.70 │                       │
//! │  └─────────────────┘         └─────────────────┘                       │
//! │                                                                         │
//! │  Names double as inventory ledger keys. Prices are fixed at            │
//! │  compile time and never mutated.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Catalog Order
//! `BASES` and `TOPPINGS` define the canonical ordering used by menu
//! rendering, default stock seeding and the inventory dump, so every
//! user-facing listing agrees.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Base Kinds
// =============================================================================

/// The foundational pizza type that anchors an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseKind {
    /// Tomato, mozzarella, basil. $5.00.
    Margherita,
    /// The classic. $6.00.
    Pepperoni,
}

/// All bases in canonical menu order.
pub const BASES: [BaseKind; 2] = [BaseKind::Margherita, BaseKind::Pepperoni];

impl BaseKind {
    /// Display name, also the inventory ledger key for this base.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            BaseKind::Margherita => "Margherita",
            BaseKind::Pepperoni => "Pepperoni",
        }
    }

    /// Base price.
    #[inline]
    pub const fn price(&self) -> Money {
        match self {
            BaseKind::Margherita => Money::from_cents(500),
            BaseKind::Pepperoni => Money::from_cents(600),
        }
    }

    /// Units on hand when the shop opens with default configuration.
    #[inline]
    pub const fn default_stock(&self) -> u32 {
        match self {
            BaseKind::Margherita => 10,
            BaseKind::Pepperoni => 10,
        }
    }

    /// Whether the name reads as a plural noun.
    ///
    /// Drives out-of-stock phrasing: "Margherita is out of stock" but
    /// "Olives are out of stock".
    #[inline]
    pub const fn name_is_plural(&self) -> bool {
        false
    }
}

// =============================================================================
// Topping Kinds
// =============================================================================

/// An add-on that increases cost and extends the order description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToppingKind {
    /// Extra cheese. +$1.00.
    Cheese,
    /// +$0.50.
    Olives,
    /// +$0.70.
    Mushrooms,
}

/// All toppings in canonical menu order.
pub const TOPPINGS: [ToppingKind; 3] = [
    ToppingKind::Cheese,
    ToppingKind::Olives,
    ToppingKind::Mushrooms,
];

impl ToppingKind {
    /// Display name, also the inventory ledger key for this topping.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            ToppingKind::Cheese => "Cheese",
            ToppingKind::Olives => "Olives",
            ToppingKind::Mushrooms => "Mushrooms",
        }
    }

    /// Incremental price added to the order.
    #[inline]
    pub const fn price(&self) -> Money {
        match self {
            ToppingKind::Cheese => Money::from_cents(100),
            ToppingKind::Olives => Money::from_cents(50),
            ToppingKind::Mushrooms => Money::from_cents(70),
        }
    }

    /// Units on hand when the shop opens with default configuration.
    #[inline]
    pub const fn default_stock(&self) -> u32 {
        match self {
            ToppingKind::Cheese => 15,
            ToppingKind::Olives => 10,
            ToppingKind::Mushrooms => 12,
        }
    }

    /// Whether the name reads as a plural noun.
    ///
    /// "Cheese is out of stock" but "Olives are out of stock" and
    /// "Mushrooms are out of stock".
    #[inline]
    pub const fn name_is_plural(&self) -> bool {
        matches!(self, ToppingKind::Olives | ToppingKind::Mushrooms)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_prices() {
        assert_eq!(BaseKind::Margherita.price().cents(), 500);
        assert_eq!(BaseKind::Pepperoni.price().cents(), 600);
    }

    #[test]
    fn test_topping_prices() {
        assert_eq!(ToppingKind::Cheese.price().cents(), 100);
        assert_eq!(ToppingKind::Olives.price().cents(), 50);
        assert_eq!(ToppingKind::Mushrooms.price().cents(), 70);
    }

    #[test]
    fn test_names_are_ledger_keys() {
        let names: Vec<&str> = BASES
            .iter()
            .map(|b| b.name())
            .chain(TOPPINGS.iter().map(|t| t.name()))
            .collect();
        assert_eq!(
            names,
            ["Margherita", "Pepperoni", "Cheese", "Olives", "Mushrooms"]
        );
    }

    #[test]
    fn test_plural_phrasing() {
        assert!(!BaseKind::Margherita.name_is_plural());
        assert!(!ToppingKind::Cheese.name_is_plural());
        assert!(ToppingKind::Olives.name_is_plural());
        assert!(ToppingKind::Mushrooms.name_is_plural());
    }

    #[test]
    fn test_default_stock_levels() {
        assert_eq!(BaseKind::Margherita.default_stock(), 10);
        assert_eq!(BaseKind::Pepperoni.default_stock(), 10);
        assert_eq!(ToppingKind::Cheese.default_stock(), 15);
        assert_eq!(ToppingKind::Olives.default_stock(), 10);
        assert_eq!(ToppingKind::Mushrooms.default_stock(), 12);
    }
}
