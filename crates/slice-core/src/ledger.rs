//! # Inventory Ledger
//!
//! Process-wide stock accounting for the pizza counter.
//!
//! ## Reserve Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Ledger Operations                                    │
//! │                                                                         │
//! │  Customer picks item ────► reserve("Cheese")                           │
//! │                                 │                                       │
//! │                    count > 0 ───┼─── count == 0 (or unknown item)      │
//! │                        │        │        │                              │
//! │                        ▼        │        ▼                              │
//! │                count -= 1       │    no mutation                        │
//! │                return true      │    return false                       │
//! │                                 │                                       │
//! │  Receipt printed ────────► snapshot() ──► read-only counts             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Single Ledger, No Singleton
//! There is exactly one ledger per process, but that is a wiring decision,
//! not a type-level one: the register constructs one `InventoryLedger` at
//! startup and passes it by `&mut` reference to the order composer. With a
//! single control thread, the borrow checker is the only synchronization
//! needed. A concurrent register would have to wrap the ledger in a mutex
//! so that check-and-decrement stays atomic.

use std::collections::{BTreeMap, HashMap};

// =============================================================================
// Inventory Ledger
// =============================================================================

/// Counter store keyed by item name.
///
/// ## Invariants
/// - Counts never go negative: `u32` plus a guarded decrement
/// - A failed `reserve` never mutates any count
/// - Unknown item names are treated as present with zero stock
#[derive(Debug, Clone, Default)]
pub struct InventoryLedger {
    counts: HashMap<String, u32>,
}

impl InventoryLedger {
    /// Creates an empty ledger. Every item is out of stock until seeded.
    pub fn new() -> Self {
        InventoryLedger {
            counts: HashMap::new(),
        }
    }

    /// Creates a ledger seeded from `(name, count)` pairs.
    ///
    /// ## Example
    /// ```rust
    /// use slice_core::ledger::InventoryLedger;
    ///
    /// let ledger = InventoryLedger::with_counts([("Margherita".to_string(), 10)]);
    /// assert_eq!(ledger.available("Margherita"), 10);
    /// ```
    pub fn with_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (String, u32)>,
    {
        InventoryLedger {
            counts: counts.into_iter().collect(),
        }
    }

    /// Reserves one unit of `item` if available.
    ///
    /// ## Behavior
    /// - Count > 0: decrement by one, return `true`
    /// - Count == 0 or item unknown: return `false`, nothing changes
    ///
    /// Unknown items are not an error; they are simply never available.
    pub fn reserve(&mut self, item: &str) -> bool {
        match self.counts.get_mut(item) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Returns the remaining count for `item` (0 for unknown items).
    pub fn available(&self, item: &str) -> u32 {
        self.counts.get(item).copied().unwrap_or(0)
    }

    /// Returns a read-only copy of all counts, sorted by item name.
    ///
    /// Sorted so that tests and any serialized dump are deterministic.
    pub fn snapshot(&self) -> BTreeMap<String, u32> {
        self.counts
            .iter()
            .map(|(name, count)| (name.clone(), *count))
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_ledger() -> InventoryLedger {
        InventoryLedger::with_counts([
            ("Margherita".to_string(), 10),
            ("Pepperoni".to_string(), 10),
            ("Cheese".to_string(), 15),
            ("Olives".to_string(), 10),
            ("Mushrooms".to_string(), 12),
        ])
    }

    #[test]
    fn test_reserve_decrements() {
        let mut ledger = fresh_ledger();

        assert!(ledger.reserve("Margherita"));
        assert_eq!(ledger.available("Margherita"), 9);
    }

    #[test]
    fn test_reserve_fails_at_zero_and_keeps_failing() {
        let mut ledger = InventoryLedger::with_counts([("Pepperoni".to_string(), 2)]);

        assert!(ledger.reserve("Pepperoni"));
        assert!(ledger.reserve("Pepperoni"));
        assert_eq!(ledger.available("Pepperoni"), 0);

        // Stock is exhausted; every further attempt fails
        assert!(!ledger.reserve("Pepperoni"));
        assert!(!ledger.reserve("Pepperoni"));
        assert_eq!(ledger.available("Pepperoni"), 0);
    }

    #[test]
    fn test_failed_reserve_is_idempotent() {
        let mut ledger = InventoryLedger::with_counts([("Pepperoni".to_string(), 0)]);
        let before = ledger.snapshot();

        assert!(!ledger.reserve("Pepperoni"));
        assert_eq!(ledger.snapshot(), before);
    }

    #[test]
    fn test_unknown_item_is_unavailable() {
        let mut ledger = fresh_ledger();
        let before = ledger.snapshot();

        assert!(!ledger.reserve("Pineapple"));
        assert_eq!(ledger.available("Pineapple"), 0);
        assert_eq!(ledger.snapshot(), before);
    }

    #[test]
    fn test_empty_ledger_has_nothing() {
        let mut ledger = InventoryLedger::new();
        assert!(!ledger.reserve("Margherita"));
        assert!(ledger.snapshot().is_empty());
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut ledger = fresh_ledger();
        let snapshot = ledger.snapshot();

        ledger.reserve("Cheese");

        // The snapshot taken earlier is unaffected by later mutation
        assert_eq!(snapshot["Cheese"], 15);
        assert_eq!(ledger.available("Cheese"), 14);
    }
}
