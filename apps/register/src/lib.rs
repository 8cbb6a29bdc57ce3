//! # Slice Register Library
//!
//! Core library for the Slice POS terminal register.
//! This is the main entry point that configures and runs the order loop.
//!
//! ## Module Organization
//! ```text
//! slice_register_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── Shop configuration (name, starting stock)
//! ├── menu.rs         ◄─── Menu rendering + typed input parsing
//! ├── session.rs      ◄─── The order loop over stdin/stdout
//! └── error.rs        ◄─── Register error type
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter, writing to stderr             │
//! │     • Default: INFO (--verbose: DEBUG), RUST_LOG overrides both         │
//! │                                                                         │
//! │  2. Resolve Shop Configuration ───────────────────────────────────────► │
//! │     • Defaults → --config file (JSON) → SLICE_* environment             │
//! │                                                                         │
//! │  3. Seed the Inventory Ledger ────────────────────────────────────────► │
//! │     • One ledger per process, owned by the session                      │
//! │     • No reset, no replenishment while the register runs                │
//! │                                                                         │
//! │  4. Run the Session ──────────────────────────────────────────────────► │
//! │     • Locked stdin / stdout until exit or end of input                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod menu;
pub mod session;

use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::ShopConfig;
use error::RegisterResult;
use session::Session;

/// Runs the register: resolve configuration, seed the ledger, drive the
/// order loop until the user exits.
pub fn run(config_path: Option<&Path>, verbose: bool) -> RegisterResult<()> {
    init_tracing(verbose);

    info!("Starting Slice POS register");

    let config = ShopConfig::resolve(config_path)?;
    info!(shop = %config.shop_name, "configuration resolved");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let mut session = Session::new(config, stdin.lock(), stdout.lock());
    session.run()
}

/// Initializes logging to stderr, keeping stdout clean for prompts and
/// receipts.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
