use clap::Parser;
use dotenvy::dotenv;
use log::error;
use moneris_res_purchase::cli::{self, Cli};
use std::io;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file
    dotenv().ok();
    // Initialize logger, stdout is reserved for the receipt
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let outcome = match cli::execute(&cli, |name| std::env::var(name).ok()).await {
        Ok(receipt) => cli::render_receipt(&receipt, &mut io::stdout().lock()).map_err(Into::into),
        Err(e) => Err(e),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Residual purchase for order {} failed: {}", cli.order_id, e);
            let _ = cli::report_error(&e, &mut io::stderr().lock());
            ExitCode::FAILURE
        }
    }
}
