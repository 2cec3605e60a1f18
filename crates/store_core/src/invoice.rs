use chrono::NaiveDate;
use rand::Rng;
use shared::{
    domain::{InvoiceId, PaymentMethod},
    money,
};

use crate::cart::CartLedger;

/// Sentinel rendered when no payment method has been selected.
pub const UNSPECIFIED_PAYMENT_METHOD: &str = "unspecified";

/// Wall-clock seam so rendering stays deterministic under test.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Source of invoice numbers. Implementations stay within `0..=999_999`.
pub trait InvoiceNumberSource {
    fn next_number(&self) -> InvoiceId;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Uniform draw over the six-digit invoice number space.
pub struct RandomInvoiceNumbers;

impl InvoiceNumberSource for RandomInvoiceNumbers {
    fn next_number(&self) -> InvoiceId {
        InvoiceId(rand::thread_rng().gen_range(0..=999_999))
    }
}

pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub struct FixedInvoiceNumbers(pub i64);

impl InvoiceNumberSource for FixedInvoiceNumbers {
    fn next_number(&self) -> InvoiceId {
        InvoiceId(self.0)
    }
}

/// Immutable text snapshot of an order at the moment of generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub number: InvoiceId,
    pub issued_on: NaiveDate,
    pub text: String,
}

/// Renders the cart and order context into the invoice template.
///
/// Pure in its inputs: the number and date come from the injected sources,
/// everything else is read from the ledger and order context. The ledger is
/// never mutated, and an empty cart still renders a valid empty-body
/// invoice.
pub fn render(
    ledger: &CartLedger,
    buyer_name: &str,
    payment_method: Option<&PaymentMethod>,
    clock: &dyn Clock,
    numbers: &dyn InvoiceNumberSource,
) -> Invoice {
    let number = numbers.next_number();
    let issued_on = clock.today();
    let method_name = payment_method
        .map(|method| method.display_name.as_str())
        .unwrap_or(UNSPECIFIED_PAYMENT_METHOD);

    let mut text = String::new();
    text.push_str(&format!("Invoice #{}\n", number.0));
    text.push_str(&format!("Date: {}\n", issued_on.format("%d/%m/%Y")));
    text.push_str(&format!("Buyer name: {buyer_name}\n"));
    text.push_str(&format!("Payment method: {method_name}\n\n"));
    text.push_str("Products:\n");
    for line in ledger.lines() {
        text.push_str(&format!(
            "{} x{} - {}\n",
            line.product.name,
            line.quantity,
            money::format_labeled(line.subtotal()),
        ));
    }
    text.push_str(&format!(
        "\nTotal: {}",
        money::format_labeled(ledger.total_cost())
    ));

    Invoice {
        number,
        issued_on,
        text,
    }
}

#[cfg(test)]
#[path = "tests/invoice_tests.rs"]
mod tests;
