//! # Register Session
//!
//! The order loop: one long-lived ledger, one customer at a time.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Loop States                                    │
//! │                                                                         │
//! │        ┌──────────────┐     ┌────────────────┐     ┌──────────┐        │
//! │  ────► │ SelectingBase│────►│ AddingToppings │────►│  Paying  │        │
//! │        │              │     │  (loop)        │     │          │        │
//! │        └──────┬───────┘     └────────────────┘     └────┬─────┘        │
//! │               │                                         │              │
//! │           "0" │             invalid input re-prompts    │ Done:        │
//! │               ▼             the SAME state, always      │ receipt +    │
//! │            Exit                                         │ inventory    │
//! │                                                         ▼              │
//! │        ◄────────────────────────────────────────── next customer       │
//! │                                                                         │
//! │  Out-of-stock on base or topping: print "Sorry, ..." and continue      │
//! │  without any state change. End of input closes the register cleanly.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Generic I/O?
//! The session reads any `BufRead` and writes any `Write`, so tests drive a
//! whole scripted session through a `Cursor` and assert on the transcript.
//! The binary passes locked stdin and stdout.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use slice_core::{InventoryLedger, Order, Payment, BASES, TOPPINGS};

use crate::config::ShopConfig;
use crate::error::RegisterResult;
use crate::menu::{self, BaseChoice, ToppingChoice};

// =============================================================================
// Session
// =============================================================================

/// One register session: a seeded ledger plus the I/O it talks through.
pub struct Session<R, W> {
    config: ShopConfig,
    ledger: InventoryLedger,
    input: R,
    output: W,
    orders_completed: u32,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with a ledger seeded from the config.
    pub fn new(config: ShopConfig, input: R, output: W) -> Self {
        let ledger = config.seed_ledger();
        Session {
            config,
            ledger,
            input,
            output,
            orders_completed: 0,
        }
    }

    /// Runs the order loop until the user exits or input ends.
    pub fn run(&mut self) -> RegisterResult<()> {
        writeln!(self.output, "Welcome to {}!", self.config.shop_name)?;

        loop {
            write!(self.output, "{}", menu::base_menu())?;
            let Some(line) = self.read_choice()? else {
                break;
            };

            let base = match menu::parse_base_choice(&line) {
                Ok(BaseChoice::Exit) => break,
                Ok(BaseChoice::Select(base)) => base,
                Err(_) => {
                    writeln!(self.output, "Invalid choice.")?;
                    continue;
                }
            };

            let mut order = match Order::begin(&mut self.ledger, base) {
                Ok(order) => order,
                Err(err) => {
                    warn!(%err, "base reservation failed");
                    writeln!(
                        self.output,
                        "{}",
                        menu::out_of_stock_line(base.name(), base.name_is_plural())
                    )?;
                    continue;
                }
            };
            debug!(order_id = %order.id, base = base.name(), "order started");

            if !self.add_toppings(&mut order)? {
                break;
            }
            if !self.checkout(order)? {
                break;
            }
        }

        info!(orders = self.orders_completed, "register closed");
        Ok(())
    }

    /// The AddingToppings state. Returns false when input ended.
    fn add_toppings(&mut self, order: &mut Order) -> RegisterResult<bool> {
        loop {
            write!(self.output, "{}", menu::topping_menu())?;
            let Some(line) = self.read_choice()? else {
                return Ok(false);
            };

            let kind = match menu::parse_topping_choice(&line) {
                Ok(ToppingChoice::Finish) => return Ok(true),
                Ok(ToppingChoice::Add(kind)) => kind,
                Err(_) => {
                    writeln!(self.output, "Invalid choice.")?;
                    continue;
                }
            };

            match order.add_topping(&mut self.ledger, kind) {
                Ok(()) => {
                    debug!(order_id = %order.id, topping = kind.name(), "topping added");
                }
                Err(err) => {
                    warn!(%err, "topping reservation failed");
                    writeln!(
                        self.output,
                        "{}",
                        menu::out_of_stock_line(kind.name(), kind.name_is_plural())
                    )?;
                }
            }
        }
    }

    /// The Paying state: order summary, payment capture, receipt, inventory.
    /// Returns false when input ended.
    fn checkout(&mut self, order: Order) -> RegisterResult<bool> {
        let receipt_number = format!("R-{:04}", self.orders_completed + 1);

        writeln!(self.output, "\nYour order:")?;
        writeln!(
            self.output,
            "Receipt {} at {}",
            receipt_number,
            order.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.output, "Description: {}", order.description())?;
        writeln!(self.output, "Total cost: {}", order.total())?;

        // Invalid payment input re-prompts; the composed order is kept.
        let method = loop {
            write!(self.output, "{}", menu::payment_menu())?;
            let Some(line) = self.read_choice()? else {
                return Ok(false);
            };

            match menu::parse_payment_choice(&line) {
                Ok(method) => break method,
                Err(_) => writeln!(self.output, "Invalid choice.")?,
            }
        };

        let payment = Payment::capture(method, order.total());
        info!(
            order_id = %order.id,
            payment_id = %payment.id,
            amount_cents = payment.amount_cents,
            method = method.label(),
            "payment captured"
        );
        writeln!(self.output, "{}", payment.confirmation())?;

        self.orders_completed += 1;
        self.print_inventory()?;
        Ok(true)
    }

    /// Dumps remaining counts in catalog order (bases, then toppings).
    fn print_inventory(&mut self) -> RegisterResult<()> {
        writeln!(self.output, "\nRemaining Inventory:")?;
        for base in &BASES {
            writeln!(
                self.output,
                "  {}: {}",
                base.name(),
                self.ledger.available(base.name())
            )?;
        }
        for topping in &TOPPINGS {
            writeln!(
                self.output,
                "  {}: {}",
                topping.name(),
                self.ledger.available(topping.name())
            )?;
        }
        Ok(())
    }

    /// Prompts and reads one line. Returns None once input is exhausted.
    fn read_choice(&mut self) -> RegisterResult<Option<String>> {
        write!(self.output, "{}", menu::PROMPT)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Cursor;

    /// Runs a scripted session and returns the transcript.
    fn run_script(config: ShopConfig, script: &str) -> String {
        let mut output = Vec::new();
        let mut session = Session::new(config, Cursor::new(script.to_string()), &mut output);
        session.run().unwrap();
        drop(session);
        String::from_utf8(output).unwrap()
    }

    fn config_with_stock(stock: &[(&str, u32)]) -> ShopConfig {
        let starting_stock: HashMap<String, u32> = stock
            .iter()
            .map(|(name, count)| (name.to_string(), *count))
            .collect();
        ShopConfig {
            starting_stock,
            ..ShopConfig::default()
        }
    }

    #[test]
    fn test_full_order_with_credit_card() {
        // Margherita + Cheese + Olives, finish, pay by card, exit
        let transcript = run_script(ShopConfig::default(), "1\n1\n2\n4\n2\n0\n");

        assert!(transcript.contains("Welcome to Slice Pizza Counter!"));
        assert!(transcript.contains("Description: Margherita + Cheese + Olives"));
        assert!(transcript.contains("Total cost: $6.50"));
        assert!(transcript.contains("Paid $6.50 using Credit Card."));
        assert!(transcript.contains("Receipt R-0001"));

        // One unit of each selected item left the shelf
        assert!(transcript.contains("  Margherita: 9"));
        assert!(transcript.contains("  Pepperoni: 10"));
        assert!(transcript.contains("  Cheese: 14"));
        assert!(transcript.contains("  Olives: 9"));
        assert!(transcript.contains("  Mushrooms: 12"));
    }

    #[test]
    fn test_plain_pepperoni_with_paypal() {
        let transcript = run_script(ShopConfig::default(), "2\n4\n1\n0\n");

        assert!(transcript.contains("Description: Pepperoni"));
        assert!(transcript.contains("Total cost: $6.00"));
        assert!(transcript.contains("Paid $6.00 using PayPal."));
    }

    #[test]
    fn test_invalid_base_choice_reprompts() {
        let transcript = run_script(ShopConfig::default(), "9\n0\n");

        assert!(transcript.contains("Invalid choice."));
        // No order was started
        assert!(!transcript.contains("Your order:"));
    }

    #[test]
    fn test_out_of_stock_base() {
        let config = config_with_stock(&[("Pepperoni", 0), ("Margherita", 5)]);
        let transcript = run_script(config, "2\n0\n");

        assert!(transcript.contains("Sorry, Pepperoni is out of stock."));
        assert!(!transcript.contains("Your order:"));
    }

    #[test]
    fn test_out_of_stock_topping_keeps_order() {
        let config = config_with_stock(&[("Margherita", 1), ("Olives", 0)]);
        // Base, try olives (sold out), finish, pay PayPal, exit
        let transcript = run_script(config, "1\n2\n4\n1\n0\n");

        assert!(transcript.contains("Sorry, Olives are out of stock."));
        assert!(transcript.contains("Description: Margherita\n"));
        assert!(transcript.contains("Total cost: $5.00"));
    }

    #[test]
    fn test_invalid_payment_choice_reprompts_and_keeps_order() {
        let transcript = run_script(ShopConfig::default(), "1\n4\n9\n1\n0\n");

        assert!(transcript.contains("Invalid choice."));
        assert!(transcript.contains("Paid $5.00 using PayPal."));
    }

    #[test]
    fn test_exhausting_stock_across_orders() {
        let config = config_with_stock(&[("Margherita", 1)]);
        // First order takes the last Margherita; second attempt is refused
        let transcript = run_script(config, "1\n4\n1\n1\n0\n");

        assert!(transcript.contains("Paid $5.00 using PayPal."));
        assert!(transcript.contains("  Margherita: 0"));
        assert!(transcript.contains("Sorry, Margherita is out of stock."));
    }

    #[test]
    fn test_receipt_numbers_are_sequential() {
        let transcript = run_script(ShopConfig::default(), "1\n4\n1\n2\n4\n2\n0\n");

        assert!(transcript.contains("Receipt R-0001"));
        assert!(transcript.contains("Receipt R-0002"));
    }

    #[test]
    fn test_sentinel_exits_immediately() {
        let transcript = run_script(ShopConfig::default(), "0\n");

        assert!(transcript.contains("Welcome to"));
        assert!(!transcript.contains("Your order:"));
    }

    #[test]
    fn test_end_of_input_closes_cleanly() {
        // No input at all: the session ends without an error
        let transcript = run_script(ShopConfig::default(), "");
        assert!(transcript.contains("Welcome to"));
    }

    #[test]
    fn test_end_of_input_mid_order_closes_cleanly() {
        // Base chosen, then the input stream ends at the topping menu
        let transcript = run_script(ShopConfig::default(), "1\n");
        assert!(transcript.contains("Available toppings:"));
    }
}
