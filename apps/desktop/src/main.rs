use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use dispatch::{DispatchSink, FileExportSink, PrintingOpener, ShareLinkSink};
use shared::{domain::ProductId, money};
use store_core::{
    catalog::{builtin_payment_methods, Catalog},
    responder, StoreSession,
};

mod config;

use config::load_settings;

#[derive(Parser, Debug)]
struct Args {
    /// Catalog TOML file; overrides the configured catalog path.
    #[arg(long)]
    catalog: Option<std::path::PathBuf>,
    /// Destination for the messaging share link.
    #[arg(long)]
    share_destination: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(path) = args.catalog {
        settings.catalog_path = Some(path);
    }
    if let Some(destination) = args.share_destination {
        settings.share_destination = destination;
    }

    let catalog = match &settings.catalog_path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };
    let mut session = StoreSession::new(catalog, builtin_payment_methods());
    let share_sink = ShareLinkSink::new(settings.share_destination.clone(), PrintingOpener);
    let export_sink = FileExportSink::new(settings.invoice_export_path.clone());

    println!("souk: type 'help' for the shop verbs, 'quit' to leave.");
    println!("Bot: {}", responder::GREETING);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
        match verb {
            "quit" | "exit" => break,
            "help" => print_shop_help(),
            "products" => print_products(&session),
            "add" => add_to_cart(&mut session, rest),
            "remove" => remove_from_cart(&mut session, rest),
            "cart" => print_cart(&session),
            "clear" => {
                session.clear_cart();
                println!("Cart cleared.");
            }
            "buyer" => {
                session.set_buyer_name(rest.trim());
                println!("Buyer name set to '{}'.", session.buyer_name());
            }
            "pay" => select_payment_method(&mut session, rest),
            "checkout" => {
                let invoice = session.checkout();
                println!("{}", invoice.text);
                if let Err(err) = share_sink.dispatch(&invoice.text) {
                    eprintln!("share failed: {err}");
                }
            }
            "download" => {
                let invoice = session.checkout();
                match export_sink.dispatch(&invoice.text) {
                    Ok(()) => println!("Invoice saved to {}.", export_sink.path().display()),
                    Err(err) => eprintln!("export failed: {err}"),
                }
            }
            "chat" => {
                if let Some(reply) = session.submit_chat(rest) {
                    println!("Bot: {reply}");
                }
            }
            _ => println!("Unknown command '{verb}'; type 'help' for the shop verbs."),
        }
    }

    Ok(())
}

fn print_shop_help() {
    println!("Shop verbs:");
    println!("  products            list the catalog");
    println!("  add <id>            add one unit of a product to the cart");
    println!("  remove <id>         remove a product's line from the cart");
    println!("  cart                show the cart with subtotals");
    println!("  clear               empty the cart");
    println!("  buyer <name>        set the buyer name for the invoice");
    println!("  pay [method]        list payment methods, or select one by id");
    println!("  checkout            generate the invoice and share it");
    println!("  download            generate the invoice and save it to disk");
    println!("  chat <message>      talk to the shop assistant");
    println!("  quit                leave");
}

fn print_products(session: &StoreSession) {
    for product in session.catalog().products() {
        println!(
            "{}. {} - {}",
            product.id.0,
            product.name,
            money::format_labeled(product.unit_price)
        );
        if !product.description.is_empty() {
            println!("   {}", product.description);
        }
    }
}

fn add_to_cart(session: &mut StoreSession, rest: &str) {
    match rest.trim().parse::<i64>() {
        Ok(id) => {
            if session.add_to_cart(ProductId(id)) {
                println!(
                    "Added. The cart now holds {} item(s).",
                    session.cart().total_item_count()
                );
            } else {
                println!("No product with id {id}.");
            }
        }
        Err(_) => println!("usage: add <product-id>"),
    }
}

fn remove_from_cart(session: &mut StoreSession, rest: &str) {
    match rest.trim().parse::<i64>() {
        Ok(id) => {
            session.remove_from_cart(ProductId(id));
            println!(
                "Removed. The cart now holds {} item(s).",
                session.cart().total_item_count()
            );
        }
        Err(_) => println!("usage: remove <product-id>"),
    }
}

fn print_cart(session: &StoreSession) {
    let cart = session.cart();
    if cart.is_empty() {
        println!("Your shopping cart is empty.");
        return;
    }
    for line in cart.lines() {
        println!(
            "{} x{} - {}",
            line.product.name,
            line.quantity,
            money::format_labeled(line.subtotal())
        );
    }
    println!(
        "Total: {} ({} item(s))",
        money::format_labeled(cart.total_cost()),
        cart.total_item_count()
    );
}

fn select_payment_method(session: &mut StoreSession, rest: &str) {
    let method_id = rest.trim();
    if method_id.is_empty() {
        println!("Payment methods:");
        for method in session.payment_methods() {
            println!("  {} - {}", method.id, method.display_name);
        }
        return;
    }
    session.select_payment_method(method_id);
    match session.selected_payment_method() {
        Some(method) => println!("Payment method: {}.", method.display_name),
        None => println!("Unknown payment method '{method_id}'; selection cleared."),
    }
}
