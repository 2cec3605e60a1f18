use shared::money;

use crate::{cart::CartLedger, catalog::Catalog};

/// Opening bot line shown before any command has been submitted.
pub const GREETING: &str = "Hello! Type 'help' for a list of commands.";

/// Fixed fallback for anything outside the command table.
pub const FALLBACK_REPLY: &str =
    "Sorry, I don't understand that command. Type 'help' for a list of commands.";

pub const EMPTY_CART_REPLY: &str = "Your shopping cart is empty.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Products,
    Cart,
    Total,
}

/// Closed command set: keyword, variant, effect shown by `help`. New
/// commands extend this table; dispatch stays an exact-match lookup.
const COMMANDS: &[(&str, Command, &str)] = &[
    ("help", Command::Help, "list the available commands"),
    ("products", Command::Products, "show the available products"),
    ("cart", Command::Cart, "show the current shopping cart"),
    ("total", Command::Total, "show the total cost"),
];

impl Command {
    /// Exact (not fuzzy) match against the command table.
    pub fn parse(input: &str) -> Option<Command> {
        COMMANDS
            .iter()
            .find(|(keyword, _, _)| *keyword == input)
            .map(|(_, command, _)| *command)
    }
}

/// Maps one submitted message to exactly one reply, reading catalog and
/// ledger state at invocation time. Callers drop empty input before
/// dispatch; everything that reaches this function gets a reply.
pub fn respond(input: &str, catalog: &Catalog, ledger: &CartLedger) -> String {
    match Command::parse(input) {
        Some(Command::Help) => help_reply(),
        Some(Command::Products) => products_reply(catalog),
        Some(Command::Cart) => cart_reply(ledger),
        Some(Command::Total) => format!(
            "The total is: {}",
            money::format_labeled(ledger.total_cost())
        ),
        None => FALLBACK_REPLY.to_string(),
    }
}

fn help_reply() -> String {
    let listing = COMMANDS
        .iter()
        .filter(|(_, command, _)| *command != Command::Help)
        .map(|(keyword, _, effect)| format!("'{keyword}' - {effect}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("Available commands: {listing}")
}

fn products_reply(catalog: &Catalog) -> String {
    let listing = catalog
        .products()
        .iter()
        .map(|product| {
            format!(
                "{} - {}",
                product.name,
                money::format_labeled(product.unit_price)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("Available products:\n{listing}")
}

fn cart_reply(ledger: &CartLedger) -> String {
    if ledger.is_empty() {
        return EMPTY_CART_REPLY.to_string();
    }
    let listing = ledger
        .lines()
        .iter()
        .map(|line| {
            format!(
                "{} x{} - {}",
                line.product.name,
                line.quantity,
                money::format_labeled(line.subtotal())
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("Your shopping cart:\n{listing}")
}

#[cfg(test)]
#[path = "tests/responder_tests.rs"]
mod tests;
