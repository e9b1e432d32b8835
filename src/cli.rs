use crate::error::PurchaseError;
use crate::models::requests::PurchaseRequest;
use crate::models::responses::Receipt;
use crate::services::config::{
    ConfigError, Environment, GatewayConfig, DEFAULT_TIMEOUT_SECS, TIMEOUT_VAR,
};
use crate::services::moneris_service::PurchaseClient;
use clap::Parser;
use std::error::Error;
use std::io::{self, Write};
use std::time::Duration;

/// Charge a vaulted card through the Moneris gateway and print the receipt.
///
/// Credentials are read from MONERIS_STORE_ID and MONERIS_API_TOKEN.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Merchant order id, must be unique per store
    pub order_id: String,

    /// Data key of the vaulted card
    pub data_key: String,

    /// Amount to charge, e.g. 10.00
    pub amount: String,

    /// Customer id recorded with the transaction
    pub cust_id: String,

    /// Send to the Moneris testing host instead of production
    #[arg(long)]
    pub test_mode: bool,

    /// Request timeout in seconds
    #[arg(long, env = TIMEOUT_VAR, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

/// Validates the inputs, reads the credentials through `lookup` and performs
/// the purchase. Nothing touches the network until configuration is valid.
pub async fn execute<F>(cli: &Cli, lookup: F) -> Result<Receipt, PurchaseError>
where
    F: Fn(&str) -> Option<String>,
{
    let request = PurchaseRequest::new(&cli.order_id, &cli.data_key, &cli.amount, &cli.cust_id)?;
    let config = gateway_config(cli, lookup)?;

    let client = PurchaseClient::new(config)?;
    let receipt = client.send_res_purchase_cc(&request).await?;

    Ok(receipt)
}

/// Credentials from `lookup`, with the host and timeout chosen on the command line.
pub fn gateway_config<F>(cli: &Cli, lookup: F) -> Result<GatewayConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let config =
        GatewayConfig::from_lookup(lookup)?.with_timeout(Duration::from_secs(cli.timeout_secs))?;
    if cli.test_mode {
        return Ok(config.with_environment(Environment::Testing));
    }
    Ok(config)
}

/// Writes one `Label = value` line per receipt field.
pub fn render_receipt<W: Write>(receipt: &Receipt, out: &mut W) -> io::Result<()> {
    for (label, value) in receipt.fields() {
        writeln!(out, "{} = {}", label, value)?;
    }
    out.flush()
}

/// Writes `err` followed by its chain of causes.
pub fn report_error<W: Write>(err: &dyn Error, out: &mut W) -> io::Result<()> {
    writeln!(out, "Error: {}", err)?;
    let mut source = err.source();
    while let Some(cause) = source {
        writeln!(out, "  caused by: {}", cause)?;
        source = cause.source();
    }
    Ok(())
}
