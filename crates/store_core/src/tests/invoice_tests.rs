use super::*;
use shared::domain::{Product, ProductId};

fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 24).expect("date")
}

fn vodafone() -> PaymentMethod {
    PaymentMethod {
        id: "vodafone".into(),
        display_name: "Vodafone Cash".into(),
    }
}

fn gold() -> Product {
    Product {
        id: ProductId(1),
        name: "Extra Gold".into(),
        unit_price: 199.99,
        description: "Get 1000 extra gold pieces".into(),
    }
}

#[test]
fn renders_golden_single_line_invoice() {
    let mut cart = CartLedger::new();
    cart.add_item(&gold());

    let invoice = render(
        &cart,
        "Ali",
        Some(&vodafone()),
        &FixedClock(fixed_date()),
        &FixedInvoiceNumbers(123_456),
    );

    let expected = "Invoice #123456\n\
                    Date: 24/12/2024\n\
                    Buyer name: Ali\n\
                    Payment method: Vodafone Cash\n\
                    \n\
                    Products:\n\
                    Extra Gold x1 - 199.99 EGP\n\
                    \n\
                    Total: 199.99 EGP";
    assert_eq!(invoice.text, expected);
    assert_eq!(invoice.number, InvoiceId(123_456));
    assert_eq!(invoice.issued_on, fixed_date());
}

#[test]
fn renders_quantity_and_subtotal_per_line() {
    let mut cart = CartLedger::new();
    let gold = gold();
    cart.add_item(&gold);
    cart.add_item(&gold);
    cart.add_item(&Product {
        id: ProductId(2),
        name: "Speed Boost".into(),
        unit_price: 299.99,
        description: String::new(),
    });

    let invoice = render(
        &cart,
        "Ali",
        Some(&vodafone()),
        &FixedClock(fixed_date()),
        &FixedInvoiceNumbers(7),
    );

    assert!(invoice.text.contains("Extra Gold x2 - 399.98 EGP\n"));
    assert!(invoice.text.contains("Speed Boost x1 - 299.99 EGP\n"));
    assert!(invoice.text.ends_with("Total: 699.97 EGP"));
}

#[test]
fn missing_payment_method_renders_sentinel() {
    let cart = CartLedger::new();
    let invoice = render(
        &cart,
        "",
        None,
        &FixedClock(fixed_date()),
        &FixedInvoiceNumbers(0),
    );

    assert!(invoice.text.contains("Payment method: unspecified\n"));
}

#[test]
fn empty_cart_still_renders_valid_invoice() {
    let cart = CartLedger::new();
    let invoice = render(
        &cart,
        "Ali",
        None,
        &FixedClock(fixed_date()),
        &FixedInvoiceNumbers(42),
    );

    let expected = "Invoice #42\n\
                    Date: 24/12/2024\n\
                    Buyer name: Ali\n\
                    Payment method: unspecified\n\
                    \n\
                    Products:\n\
                    \n\
                    Total: 0.00 EGP";
    assert_eq!(invoice.text, expected);
}

#[test]
fn rendering_does_not_mutate_the_ledger() {
    let mut cart = CartLedger::new();
    cart.add_item(&gold());
    let count_before = cart.total_item_count();

    let _ = render(
        &cart,
        "Ali",
        None,
        &FixedClock(fixed_date()),
        &FixedInvoiceNumbers(1),
    );

    assert_eq!(cart.total_item_count(), count_before);
}

#[test]
fn empty_buyer_name_is_rendered_as_given() {
    let cart = CartLedger::new();
    let invoice = render(
        &cart,
        "",
        None,
        &FixedClock(fixed_date()),
        &FixedInvoiceNumbers(9),
    );

    assert!(invoice.text.contains("Buyer name: \n"));
}

#[test]
fn system_number_source_stays_within_six_digits() {
    let numbers = RandomInvoiceNumbers;
    for _ in 0..256 {
        let number = numbers.next_number();
        assert!((0..=999_999).contains(&number.0));
    }
}
