//! Entity balances example.
//!
//! Reads credentials from the environment and prints the balances of every
//! currency account of one entity.
//!
//! Run with: cargo run --example entity_balances -- ent_xxx [USD]

use checkout_sdk::models::BalancesQuery;
use checkout_sdk::CheckoutClient;

#[tokio::main]
async fn main() -> checkout_sdk::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let entity_id = args
        .next()
        .expect("usage: entity_balances <entity id> [currency]");

    // CHECKOUT_SECRET_KEY or CHECKOUT_OAUTH_ACCESS_TOKEN, plus CHECKOUT_ENVIRONMENT
    let client = CheckoutClient::from_env()?;
    println!("Using {} environment", client.environment());

    let mut query = BalancesQuery::new().with_currency_account_id(true);
    if let Some(currency) = args.next() {
        query = query.currency(currency);
    }

    let response = client
        .balances()
        .retrieve_entity_balances(&entity_id, &query)
        .await?;

    println!(
        "\n{} currency account(s) (request {}):",
        response.data.len(),
        response.http_metadata.request_id.as_deref().unwrap_or("-")
    );
    for account in &response.data {
        println!(
            "  - {} [{}] {}",
            account.descriptor,
            account.holding_currency,
            account.currency_account_id.as_deref().unwrap_or("")
        );
        println!("    Available:  {}", account.balances.available);
        println!("    Pending:    {}", account.balances.pending);
        println!("    Payable:    {}", account.balances.payable);
        println!("    Collateral: {}", account.balances.collateral);
    }

    Ok(())
}
