use crate::models::requests::{MpgRequest, PurchaseRequest};
use crate::models::responses::{MpgResponse, Receipt};
use crate::services::config::GatewayConfig;
use log::{debug, info};
use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const RESPONSE_ROOT: &str = "response";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum MonerisServiceError {
    #[error("Failed to encode request")]
    EncodingError(#[from] quick_xml::SeError),

    #[error("HTTP request error")]
    HttpRequestError(#[from] reqwest::Error),

    #[error("Gateway responded with HTTP status {0}")]
    HttpStatusError(StatusCode),

    #[error("Malformed gateway response")]
    ParseError(#[from] quick_xml::DeError),

    #[error("Malformed gateway response")]
    XmlError(#[from] quick_xml::Error),

    #[error("Expected a <response> document, got <{0}>")]
    UnexpectedRoot(String),

    #[error("Gateway receipt carries neither ReceiptId nor ResponseCode")]
    EmptyReceipt,
}

/// Sends residual purchases to the Moneris gateway.
pub struct PurchaseClient {
    http: Client,
    config: GatewayConfig,
}

impl PurchaseClient {
    pub fn new(config: GatewayConfig) -> Result<Self, MonerisServiceError> {
        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT.min(config.timeout()))
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { http, config })
    }

    /// Renders the `<request>` document for `request`.
    pub fn encode_request(&self, request: &PurchaseRequest) -> Result<String, MonerisServiceError> {
        let credentials = self.config.credentials();
        let envelope = MpgRequest {
            store_id: credentials.store_id(),
            api_token: credentials.api_token(),
            res_purchase_cc: request,
            status_check: self.config.status_check(),
        };
        let body = quick_xml::se::to_string_with_root("request", &envelope)?;

        Ok(format!("{XML_DECLARATION}{body}"))
    }

    /// Performs the single round trip. A declined charge is still `Ok`.
    pub async fn send_res_purchase_cc(
        &self,
        request: &PurchaseRequest,
    ) -> Result<Receipt, MonerisServiceError> {
        let body = self.encode_request(request)?;
        let endpoint = self.config.endpoint();

        info!(
            "Sending res_purchase_cc for order {} (store {}, country {}) to {}",
            request.order_id(),
            self.config.credentials().store_id(),
            self.config.processing_country_code(),
            endpoint
        );

        let response = self
            .http
            .post(&endpoint)
            .header(CONTENT_TYPE, "application/xml")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MonerisServiceError::HttpStatusError(status));
        }

        let text = response.text().await?;
        debug!("Gateway returned {} bytes", text.len());

        let receipt = decode_receipt(&text)?;

        info!(
            "Received receipt for order {}: response code {}",
            request.order_id(),
            receipt.response_code.as_deref().unwrap_or("null")
        );

        Ok(receipt)
    }
}

/// Parses a `<response><receipt>..</receipt></response>` document.
///
/// A receipt without `ReceiptId` and `ResponseCode` is rejected.
pub fn decode_receipt(body: &str) -> Result<Receipt, MonerisServiceError> {
    let root = root_element(body)?;
    if root != RESPONSE_ROOT {
        return Err(MonerisServiceError::UnexpectedRoot(root));
    }

    let response: MpgResponse = quick_xml::de::from_str(body)?;
    let receipt = response.receipt;
    if receipt.receipt_id.is_none() && receipt.response_code.is_none() {
        return Err(MonerisServiceError::EmptyReceipt);
    }
    Ok(receipt)
}

fn root_element(body: &str) -> Result<String, MonerisServiceError> {
    let mut reader = Reader::from_str(body);
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => {
                return Ok(String::from_utf8_lossy(e.name().as_ref()).into_owned())
            }
            Event::Eof => return Err(MonerisServiceError::UnexpectedRoot(String::new())),
            _ => {}
        }
    }
}
