use shared::domain::{PaymentMethod, ProductId};
use tracing::{debug, info};

use crate::{
    cart::CartLedger,
    catalog::Catalog,
    invoice::{self, Clock, Invoice, InvoiceNumberSource, RandomInvoiceNumbers, SystemClock},
    responder,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

#[derive(Debug, Clone)]
pub struct ChatEntry {
    pub speaker: Speaker,
    pub text: String,
}

/// Session-scoped owner of all mutable storefront state: the cart ledger,
/// the order context, the invoice archive, and the chat transcript.
///
/// Exactly one session owns this state. Every operation is synchronous and
/// processed in submission order; each one leaves the cart invariants
/// intact.
pub struct StoreSession {
    catalog: Catalog,
    payment_methods: Vec<PaymentMethod>,
    cart: CartLedger,
    buyer_name: String,
    selected_payment_method: Option<String>,
    invoices: Vec<Invoice>,
    chat_log: Vec<ChatEntry>,
    clock: Box<dyn Clock>,
    invoice_numbers: Box<dyn InvoiceNumberSource>,
}

impl StoreSession {
    pub fn new(catalog: Catalog, payment_methods: Vec<PaymentMethod>) -> Self {
        Self::with_sources(
            catalog,
            payment_methods,
            Box::new(SystemClock),
            Box::new(RandomInvoiceNumbers),
        )
    }

    pub fn with_sources(
        catalog: Catalog,
        payment_methods: Vec<PaymentMethod>,
        clock: Box<dyn Clock>,
        invoice_numbers: Box<dyn InvoiceNumberSource>,
    ) -> Self {
        Self {
            catalog,
            payment_methods,
            cart: CartLedger::new(),
            buyer_name: String::new(),
            selected_payment_method: None,
            invoices: Vec::new(),
            chat_log: Vec::new(),
            clock,
            invoice_numbers,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn payment_methods(&self) -> &[PaymentMethod] {
        &self.payment_methods
    }

    pub fn cart(&self) -> &CartLedger {
        &self.cart
    }

    pub fn buyer_name(&self) -> &str {
        &self.buyer_name
    }

    /// Invoices generated so far this session, in generation order.
    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    pub fn chat_log(&self) -> &[ChatEntry] {
        &self.chat_log
    }

    /// Adds one unit of the catalog product to the cart. Returns false when
    /// the id is not in the catalog.
    pub fn add_to_cart(&mut self, product_id: ProductId) -> bool {
        let Some(product) = self.catalog.get(product_id) else {
            debug!(
                product_id = product_id.0,
                "cart: add ignored for unknown product"
            );
            return false;
        };
        let product = product.clone();
        self.cart.add_item(&product);
        info!(
            product_id = product_id.0,
            item_count = self.cart.total_item_count(),
            "cart: item added"
        );
        true
    }

    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        self.cart.remove_item(product_id);
        info!(
            product_id = product_id.0,
            item_count = self.cart.total_item_count(),
            "cart: line removed"
        );
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
        info!("cart: cleared");
    }

    pub fn set_buyer_name(&mut self, name: impl Into<String>) {
        self.buyer_name = name.into();
    }

    /// Selects a payment method by id. Unknown ids deselect instead of
    /// erroring.
    pub fn select_payment_method(&mut self, method_id: &str) {
        self.selected_payment_method = self
            .payment_methods
            .iter()
            .find(|method| method.id == method_id)
            .map(|method| method.id.clone());
    }

    pub fn selected_payment_method(&self) -> Option<&PaymentMethod> {
        self.selected_payment_method
            .as_deref()
            .and_then(|id| self.payment_methods.iter().find(|method| method.id == id))
    }

    /// Renders an invoice from the current cart and order context and
    /// archives the snapshot. The cart itself is left untouched.
    pub fn checkout(&mut self) -> Invoice {
        let invoice = invoice::render(
            &self.cart,
            &self.buyer_name,
            self.selected_payment_method(),
            self.clock.as_ref(),
            self.invoice_numbers.as_ref(),
        );
        info!(
            invoice_number = invoice.number.0,
            item_count = self.cart.total_item_count(),
            "checkout: invoice generated"
        );
        self.invoices.push(invoice.clone());
        invoice
    }

    /// Feeds one submitted chat line through the command responder and
    /// records both sides in the transcript. Whitespace-only input is
    /// dropped before dispatch and returns None.
    pub fn submit_chat(&mut self, input: &str) -> Option<String> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        self.chat_log.push(ChatEntry {
            speaker: Speaker::User,
            text: input.to_string(),
        });
        let reply = responder::respond(input, &self.catalog, &self.cart);
        debug!(input, "chat: reply dispatched");
        self.chat_log.push(ChatEntry {
            speaker: Speaker::Bot,
            text: reply.clone(),
        });
        Some(reply)
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
