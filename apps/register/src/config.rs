//! # Shop Configuration
//!
//! Startup configuration for the register.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SLICE_*`)
//! 2. Config file (`--config shop.json`)
//! 3. Defaults (this file)
//!
//! The ledger is seeded from `starting_stock` exactly once at startup;
//! there is no replenishment while the register runs.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use slice_core::{InventoryLedger, BASES, TOPPINGS};

use crate::error::{RegisterError, RegisterResult};

/// Shop configuration.
///
/// ## Fields
/// All fields have defaults matching the stock the counter opens with, so a
/// config file only needs to name what it overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShopConfig {
    /// Shop name (displayed in the welcome line)
    pub shop_name: String,

    /// Units on hand per item name when the register starts.
    ///
    /// Names outside the catalog are seeded verbatim; the ledger is
    /// name-keyed and such items are simply never reachable from the menus.
    pub starting_stock: HashMap<String, u32>,
}

impl Default for ShopConfig {
    /// Returns default configuration suitable for a demo session.
    ///
    /// ## Default Values
    /// - Shop: "Slice Pizza Counter"
    /// - Stock: Margherita 10, Pepperoni 10, Cheese 15, Olives 10,
    ///   Mushrooms 12
    fn default() -> Self {
        let starting_stock = BASES
            .iter()
            .map(|b| (b.name().to_string(), b.default_stock()))
            .chain(
                TOPPINGS
                    .iter()
                    .map(|t| (t.name().to_string(), t.default_stock())),
            )
            .collect();

        ShopConfig {
            shop_name: "Slice Pizza Counter".to_string(),
            starting_stock,
        }
    }
}

impl ShopConfig {
    /// Resolves the effective configuration: defaults, then the config file
    /// if given, then environment overrides.
    pub fn resolve(path: Option<&Path>) -> RegisterResult<Self> {
        let mut config = match path {
            Some(path) => ShopConfig::load(path)?,
            None => ShopConfig::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Loads configuration from a JSON file.
    ///
    /// Fields missing from the file keep their defaults.
    pub fn load(path: &Path) -> RegisterResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| RegisterError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| RegisterError::ConfigParse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Applies environment variable overrides.
    ///
    /// ## Environment Variables
    /// - `SLICE_SHOP_NAME`: Override the shop name
    pub fn apply_env(&mut self) {
        if let Ok(shop_name) = std::env::var("SLICE_SHOP_NAME") {
            self.shop_name = shop_name;
        }
    }

    /// Seeds a fresh inventory ledger from the starting stock.
    pub fn seed_ledger(&self) -> InventoryLedger {
        InventoryLedger::with_counts(
            self.starting_stock
                .iter()
                .map(|(name, count)| (name.clone(), *count)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stock_matches_catalog() {
        let config = ShopConfig::default();

        assert_eq!(config.starting_stock["Margherita"], 10);
        assert_eq!(config.starting_stock["Pepperoni"], 10);
        assert_eq!(config.starting_stock["Cheese"], 15);
        assert_eq!(config.starting_stock["Olives"], 10);
        assert_eq!(config.starting_stock["Mushrooms"], 12);
        assert_eq!(config.starting_stock.len(), 5);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: ShopConfig =
            serde_json::from_str(r#"{ "shopName": "Test Slice" }"#).unwrap();

        assert_eq!(config.shop_name, "Test Slice");
        assert_eq!(config.starting_stock["Cheese"], 15);
    }

    #[test]
    fn test_stock_override() {
        let config: ShopConfig = serde_json::from_str(
            r#"{ "startingStock": { "Pepperoni": 0, "Margherita": 3 } }"#,
        )
        .unwrap();

        let ledger = config.seed_ledger();
        assert_eq!(ledger.available("Pepperoni"), 0);
        assert_eq!(ledger.available("Margherita"), 3);
        // Items absent from the override map are absent from the ledger
        assert_eq!(ledger.available("Cheese"), 0);
    }

    #[test]
    fn test_seed_ledger_reserves() {
        let config = ShopConfig::default();
        let mut ledger = config.seed_ledger();

        assert!(ledger.reserve("Mushrooms"));
        assert_eq!(ledger.available("Mushrooms"), 11);
    }
}
