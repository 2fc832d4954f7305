//! Commission preview from the command line
//!
//! ```text
//! ledger-preview <customer-name> <quantity> <unit> <rate>
//! ```
//!
//! Looks the customer up on the backend and prints what the order form
//! would show for the given inputs.

use anyhow::{Context, bail};
use ledger_client::{ClientConfig, LedgerApi, ListQuery, init_logger_with_file};
use ledger_core::{OrderPreview, RandomLotSampler};
use shared::models::QuantityUnit;

const USAGE: &str = "usage: ledger-preview <customer-name> <quantity> <unit> <rate>";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let config = ClientConfig::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [customer_name, quantity, unit, rate] = args.as_slice() else {
        bail!(USAGE);
    };
    let unit: QuantityUnit = unit.parse()?;

    let client = config.build_client().context("building API client")?;
    let customers = client
        .list_customers(&ListQuery::all().search(customer_name))
        .await
        .context("fetching customers")?;

    let mut preview = OrderPreview::new(RandomLotSampler::new());
    match customers.items.iter().find(|c| c.matches_name(customer_name)) {
        Some(customer) => {
            tracing::info!(customer_id = %customer.id, "Customer resolved");
            preview.select_customer(customer);
        }
        None => tracing::warn!(
            customer = %customer_name,
            "Customer not found, using default commission"
        ),
    }
    // the explicit unit wins over the customer's LOT default
    preview.set_unit(unit);
    preview.set_quantity_input(quantity);
    preview.set_rate_input(rate);

    let snapshot = preview.snapshot();
    println!("Commission: Rs. {}", snapshot.amount_display);
    println!("Basis:      {}", snapshot.basis_label);
    if let Some(basis) = snapshot.lot_basis_display {
        println!("Lot meter basis: {basis}");
    }
    Ok(())
}
