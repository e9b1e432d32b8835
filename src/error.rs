use crate::services::config::ConfigError;
use crate::services::moneris_service::MonerisServiceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PurchaseError {
    #[error("Configuration error")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Gateway(#[from] MonerisServiceError),

    #[error("Failed to write receipt")]
    Output(#[from] std::io::Error),
}
