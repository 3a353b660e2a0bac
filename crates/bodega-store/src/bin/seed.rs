//! # Store Walkthrough
//!
//! Builds every store from the sample datasets and walks through a session:
//! session-load debt reclassification, stock alerts, a cash sale, and a
//! report window. Useful for eyeballing log output during development.
//!
//! ## Usage
//! ```bash
//! cargo run -p bodega-store --bin seed
//!
//! # Evaluate debts against a fixed date instead of the wall clock
//! cargo run -p bodega-store --bin seed -- --date 2023-04-15
//! ```

use std::env;

use chrono::NaiveDate;
use tracing_subscriber::EnvFilter;

use bodega_core::debt::DebtQuery;
use bodega_core::types::PaymentType;
use bodega_store::seed::{sample_debts, sample_products, sample_sales, sample_suppliers};
use bodega_store::{DebtStore, InventoryStore, SaleStore, SupplierStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse command line arguments
    let mut today = chrono::Local::now().date_naive();

    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--date" | "-d" => {
                if i + 1 < args.len() {
                    today = NaiveDate::parse_from_str(&args[i + 1], "%Y-%m-%d")?;
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Bodega Store Walkthrough");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --date <YYYY-MM-DD>  Evaluation date (default: today)");
                println!("  -h, --help               Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🏪 Bodega Store Walkthrough");
    println!("===========================");
    println!("Evaluation date: {}", today);
    println!();

    // Debts: session-load reclassification + dashboard totals
    let mut debts = DebtStore::with_seed(sample_debts());
    let reclassified = debts.load(today);
    let totals = debts.totals(today);
    println!("✓ Debts loaded: {} records", debts.list().len());
    println!("  Newly overdue:     {}", reclassified);
    println!(
        "  Outstanding:       {} ({} debts)",
        totals.outstanding(),
        totals.outstanding_count
    );
    println!(
        "  Overdue:           {} ({} debts)",
        totals.overdue(),
        totals.overdue_count
    );
    println!(
        "  Due soon:          {} ({} debts)",
        totals.due_soon(),
        totals.due_soon_count
    );

    let urgent = debts.query(&DebtQuery::default());
    if let Some(first) = urgent.first() {
        println!(
            "  Most urgent:       {} owes {}",
            first.customer_name,
            first.amount()
        );
    }
    println!();

    // Inventory: stock alerts
    let inventory = InventoryStore::with_seed(sample_products());
    let low = inventory.low_stock();
    println!("✓ Inventory loaded: {} products", inventory.list().len());
    println!("  Low on stock:      {}", low.len());
    println!();

    // Sales: record a cash sale through the cart
    let mut sales = SaleStore::with_seed(sample_sales());
    sales.add_to_cart(inventory.get(1), 5)?;
    sales.add_to_cart(inventory.get(2), 2)?;
    let sale = sales.complete_sale(today, PaymentType::Cash, None, None)?;
    println!("✓ Recorded sale #{} for {}", sale.id, sale.total_amount());

    let summary = sales.summary(today - chrono::Days::new(30), today);
    println!(
        "  Last 30 days:      {} across {} sales",
        summary.total(),
        summary.sale_count
    );
    println!();

    // Suppliers
    let suppliers = SupplierStore::with_seed(sample_suppliers());
    println!("✓ Suppliers loaded: {} records", suppliers.list().len());

    println!();
    println!("✓ Walkthrough complete!");

    Ok(())
}
