//! # Menus
//!
//! Menu rendering and typed input parsing for the three prompts of the
//! order loop: base, toppings, payment.
//!
//! ## Menu Numbering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Base menu                Topping menu             Payment menu         │
//! │  ─────────                ────────────             ────────────         │
//! │  1. Margherita ($5.00)    1. Cheese ($1.00)        1. PayPal            │
//! │  2. Pepperoni ($6.00)     2. Olives ($0.50)        2. Credit Card       │
//! │  0 => Exit                3. Mushrooms ($0.70)                          │
//! │                           4. Finish order                               │
//! │                                                                         │
//! │  Numbering is generated from the catalog slices, so the parser and     │
//! │  the rendered text can never disagree.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Matching is exact on the trimmed token (no validation beyond simple
//! numeric matching); anything else is `InvalidSelection`.

use std::fmt::Write as _;

use slice_core::{BaseKind, PaymentMethod, ToppingKind, BASES, TOPPINGS};

use crate::error::{RegisterError, RegisterResult};

/// Prompt shown after every menu.
pub const PROMPT: &str = "Enter the number of your choice: ";

// =============================================================================
// Selections
// =============================================================================

/// Outcome of the base menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseChoice {
    /// Start an order with this base.
    Select(BaseKind),
    /// The "0" sentinel: exit the process.
    Exit,
}

/// Outcome of the topping menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToppingChoice {
    /// Add this topping to the order.
    Add(ToppingKind),
    /// Stop adding toppings and move on to payment.
    Finish,
}

// =============================================================================
// Rendering
// =============================================================================

/// Renders the base menu, one numbered option per catalog base.
pub fn base_menu() -> String {
    let mut menu = String::from("\nChoose your base pizza:\n");
    for (index, base) in BASES.iter().enumerate() {
        let _ = writeln!(menu, "{}. {} ({})", index + 1, base.name(), base.price());
    }
    menu.push_str("0 => Exit\n");
    menu
}

/// Renders the topping menu, with "finish order" as the last option.
pub fn topping_menu() -> String {
    let mut menu = String::from("\nAvailable toppings:\n");
    for (index, topping) in TOPPINGS.iter().enumerate() {
        let _ = writeln!(
            menu,
            "{}. {} ({})",
            index + 1,
            topping.name(),
            topping.price()
        );
    }
    let _ = writeln!(menu, "{}. Finish order", TOPPINGS.len() + 1);
    menu
}

/// Renders the payment menu.
pub fn payment_menu() -> String {
    let mut menu = String::from("\nChoose payment method:\n");
    for (index, method) in PAYMENT_METHODS.iter().enumerate() {
        let _ = writeln!(menu, "{}. {}", index + 1, method.label());
    }
    menu
}

/// Payment methods in menu order.
const PAYMENT_METHODS: [PaymentMethod; 2] = [PaymentMethod::PayPal, PaymentMethod::CreditCard];

/// Out-of-stock line, phrased for the item's grammatical number:
/// "Sorry, Margherita is out of stock." / "Sorry, Olives are out of stock."
pub fn out_of_stock_line(name: &str, plural: bool) -> String {
    let verb = if plural { "are" } else { "is" };
    format!("Sorry, {} {} out of stock.", name, verb)
}

// =============================================================================
// Parsing
// =============================================================================

/// Matches the trimmed token against the 1-based position in `options`.
fn match_position<T: Copy>(token: &str, options: &[T]) -> Option<T> {
    options
        .iter()
        .enumerate()
        .find(|(index, _)| token == (index + 1).to_string())
        .map(|(_, option)| *option)
}

/// Parses input at the base menu.
pub fn parse_base_choice(input: &str) -> RegisterResult<BaseChoice> {
    let token = input.trim();

    if token == "0" {
        return Ok(BaseChoice::Exit);
    }

    match_position(token, &BASES)
        .map(BaseChoice::Select)
        .ok_or(RegisterError::InvalidSelection)
}

/// Parses input at the topping menu.
pub fn parse_topping_choice(input: &str) -> RegisterResult<ToppingChoice> {
    let token = input.trim();

    if token == (TOPPINGS.len() + 1).to_string() {
        return Ok(ToppingChoice::Finish);
    }

    match_position(token, &TOPPINGS)
        .map(ToppingChoice::Add)
        .ok_or(RegisterError::InvalidSelection)
}

/// Parses input at the payment menu.
pub fn parse_payment_choice(input: &str) -> RegisterResult<PaymentMethod> {
    match_position(input.trim(), &PAYMENT_METHODS).ok_or(RegisterError::InvalidSelection)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_menu_lists_prices() {
        let menu = base_menu();
        assert!(menu.contains("1. Margherita ($5.00)"));
        assert!(menu.contains("2. Pepperoni ($6.00)"));
        assert!(menu.contains("0 => Exit"));
    }

    #[test]
    fn test_topping_menu_lists_prices() {
        let menu = topping_menu();
        assert!(menu.contains("1. Cheese ($1.00)"));
        assert!(menu.contains("2. Olives ($0.50)"));
        assert!(menu.contains("3. Mushrooms ($0.70)"));
        assert!(menu.contains("4. Finish order"));
    }

    #[test]
    fn test_payment_menu_labels() {
        let menu = payment_menu();
        assert!(menu.contains("1. PayPal"));
        assert!(menu.contains("2. Credit Card"));
    }

    #[test]
    fn test_parse_base_choice() {
        assert_eq!(
            parse_base_choice("1").unwrap(),
            BaseChoice::Select(BaseKind::Margherita)
        );
        assert_eq!(
            parse_base_choice(" 2 \n").unwrap(),
            BaseChoice::Select(BaseKind::Pepperoni)
        );
        assert_eq!(parse_base_choice("0").unwrap(), BaseChoice::Exit);
    }

    #[test]
    fn test_parse_base_choice_rejects_junk() {
        for junk in ["3", "x", "", "11", "-1", "1.0", "pizza"] {
            assert!(matches!(
                parse_base_choice(junk),
                Err(RegisterError::InvalidSelection)
            ));
        }
    }

    #[test]
    fn test_parse_topping_choice() {
        assert_eq!(
            parse_topping_choice("1").unwrap(),
            ToppingChoice::Add(ToppingKind::Cheese)
        );
        assert_eq!(
            parse_topping_choice("3").unwrap(),
            ToppingChoice::Add(ToppingKind::Mushrooms)
        );
        assert_eq!(parse_topping_choice("4").unwrap(), ToppingChoice::Finish);
        assert!(matches!(
            parse_topping_choice("5"),
            Err(RegisterError::InvalidSelection)
        ));
    }

    #[test]
    fn test_parse_payment_choice() {
        assert_eq!(parse_payment_choice("1").unwrap(), PaymentMethod::PayPal);
        assert_eq!(
            parse_payment_choice("2").unwrap(),
            PaymentMethod::CreditCard
        );
        assert!(matches!(
            parse_payment_choice("0"),
            Err(RegisterError::InvalidSelection)
        ));
    }

    #[test]
    fn test_out_of_stock_phrasing() {
        assert_eq!(
            out_of_stock_line("Margherita", false),
            "Sorry, Margherita is out of stock."
        );
        assert_eq!(
            out_of_stock_line("Olives", true),
            "Sorry, Olives are out of stock."
        );
    }
}
