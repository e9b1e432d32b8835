use serde::Serialize;

use crate::services::config::ConfigError;

/// Crypt type sent with every residual purchase (SSL-enabled merchant, stored credential).
pub const CRYPT_TYPE: &str = "7";

/// Credential-on-file values required by the gateway for merchant-initiated
/// charges against a vaulted card.
pub const COF_PAYMENT_INDICATOR: &str = "U";
pub const COF_PAYMENT_INFORMATION: &str = "2";
pub const COF_ISSUER_ID: &str = "139X3130ASCXAS9";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CofInfo {
    payment_indicator: &'static str,
    payment_information: &'static str,
    issuer_id: &'static str,
}

impl CofInfo {
    fn fixed() -> Self {
        CofInfo {
            payment_indicator: COF_PAYMENT_INDICATOR,
            payment_information: COF_PAYMENT_INFORMATION,
            issuer_id: COF_ISSUER_ID,
        }
    }

    pub fn payment_indicator(&self) -> &str {
        self.payment_indicator
    }

    pub fn payment_information(&self) -> &str {
        self.payment_information
    }

    pub fn issuer_id(&self) -> &str {
        self.issuer_id
    }
}

/// A `res_purchase_cc` transaction: charge the card vaulted under `data_key`.
///
/// Field order matters, it is the element order of the serialized XML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseRequest {
    data_key: String,
    order_id: String,
    cust_id: String,
    amount: String,
    crypt_type: &'static str,
    cof_info: CofInfo,
}

impl PurchaseRequest {
    /// Builds the request. Values are passed through untouched, only empty
    /// strings are rejected.
    pub fn new(
        order_id: &str,
        data_key: &str,
        amount: &str,
        cust_id: &str,
    ) -> Result<Self, ConfigError> {
        Ok(PurchaseRequest {
            data_key: required_arg("data_key", data_key)?,
            order_id: required_arg("order_id", order_id)?,
            cust_id: required_arg("cust_id", cust_id)?,
            amount: required_arg("amount", amount)?,
            crypt_type: CRYPT_TYPE,
            cof_info: CofInfo::fixed(),
        })
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn data_key(&self) -> &str {
        &self.data_key
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn cust_id(&self) -> &str {
        &self.cust_id
    }

    pub fn crypt_type(&self) -> &str {
        self.crypt_type
    }

    pub fn cof_info(&self) -> &CofInfo {
        &self.cof_info
    }
}

fn required_arg(name: &'static str, value: &str) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyArgument(name));
    }
    Ok(value.to_string())
}

/// Outer `<request>` document posted to the gateway servlet.
#[derive(Debug, Serialize)]
pub struct MpgRequest<'a> {
    pub store_id: &'a str,
    pub api_token: &'a str,
    pub res_purchase_cc: &'a PurchaseRequest,
    pub status_check: bool,
}
