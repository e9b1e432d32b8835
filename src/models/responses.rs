use serde::Deserialize;

use super::common::ReceiptField;

/// Number of labelled lines a receipt renders to.
pub const RECEIPT_FIELD_COUNT: usize = 28;

/// Outer `<response>` document returned by the gateway servlet.
#[derive(Debug, Deserialize)]
pub struct MpgResponse {
    pub receipt: Receipt,
}

/// Receipt of a residual purchase.
///
/// Values are not interpreted. The XML reader trims whitespace around each
/// text value, inner whitespace is kept as sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Receipt {
    #[serde(rename = "DataKey")]
    pub data_key: Option<String>,
    #[serde(rename = "ReceiptId")]
    pub receipt_id: Option<String>,
    #[serde(rename = "ReferenceNum")]
    pub reference_num: Option<String>,
    #[serde(rename = "ResponseCode")]
    pub response_code: Option<String>,
    #[serde(rename = "AuthCode")]
    pub auth_code: Option<String>,
    #[serde(rename = "Message")]
    pub message: Option<String>,
    #[serde(rename = "TransDate")]
    pub trans_date: Option<String>,
    #[serde(rename = "TransTime")]
    pub trans_time: Option<String>,
    #[serde(rename = "TransType")]
    pub trans_type: Option<String>,
    #[serde(rename = "Complete")]
    pub complete: Option<String>,
    #[serde(rename = "TransAmount")]
    pub trans_amount: Option<String>,
    #[serde(rename = "CardType")]
    pub card_type: Option<String>,
    #[serde(rename = "TransID")]
    pub txn_number: Option<String>,
    #[serde(rename = "TimedOut")]
    pub timed_out: Option<String>,
    #[serde(rename = "ResSuccess")]
    pub res_success: Option<String>,
    #[serde(rename = "PaymentType")]
    pub payment_type: Option<String>,
    #[serde(rename = "IsVisaDebit")]
    pub is_visa_debit: Option<String>,
    #[serde(rename = "IssuerId")]
    pub issuer_id: Option<String>,
    #[serde(rename = "ResolveData")]
    pub resolve_data: ResolveData,
}

/// Vault profile echoed back with a residual transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolveData {
    pub cust_id: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub note: Option<String>,
    pub masked_pan: Option<String>,
    pub expdate: Option<String>,
    pub crypt_type: Option<String>,
    pub avs_street_number: Option<String>,
    pub avs_street_name: Option<String>,
    pub avs_zipcode: Option<String>,
}

impl Receipt {
    /// Labelled values in display order.
    pub fn fields(&self) -> [(&'static str, ReceiptField<'_>); RECEIPT_FIELD_COUNT] {
        let res = &self.resolve_data;
        [
            ("DataKey", (&self.data_key).into()),
            ("ReceiptId", (&self.receipt_id).into()),
            ("ReferenceNum", (&self.reference_num).into()),
            ("ResponseCode", (&self.response_code).into()),
            ("AuthCode", (&self.auth_code).into()),
            ("Message", (&self.message).into()),
            ("TransDate", (&self.trans_date).into()),
            ("TransTime", (&self.trans_time).into()),
            ("TransType", (&self.trans_type).into()),
            ("Complete", (&self.complete).into()),
            ("TransAmount", (&self.trans_amount).into()),
            ("CardType", (&self.card_type).into()),
            ("TxnNumber", (&self.txn_number).into()),
            ("TimedOut", (&self.timed_out).into()),
            ("ResSuccess", (&self.res_success).into()),
            ("PaymentType", (&self.payment_type).into()),
            ("IsVisaDebit", (&self.is_visa_debit).into()),
            ("Cust ID", (&res.cust_id).into()),
            ("Phone", (&res.phone).into()),
            ("Email", (&res.email).into()),
            ("Note", (&res.note).into()),
            ("Masked Pan", (&res.masked_pan).into()),
            ("Exp Date", (&res.expdate).into()),
            ("Crypt Type", (&res.crypt_type).into()),
            ("Avs Street Number", (&res.avs_street_number).into()),
            ("Avs Street Name", (&res.avs_street_name).into()),
            ("Avs Zipcode", (&res.avs_zipcode).into()),
            ("IssuerId", (&self.issuer_id).into()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_labels_in_display_order() {
        let labels: Vec<&str> = Receipt::default().fields().iter().map(|(l, _)| *l).collect();
        assert_eq!(
            labels,
            vec![
                "DataKey",
                "ReceiptId",
                "ReferenceNum",
                "ResponseCode",
                "AuthCode",
                "Message",
                "TransDate",
                "TransTime",
                "TransType",
                "Complete",
                "TransAmount",
                "CardType",
                "TxnNumber",
                "TimedOut",
                "ResSuccess",
                "PaymentType",
                "IsVisaDebit",
                "Cust ID",
                "Phone",
                "Email",
                "Note",
                "Masked Pan",
                "Exp Date",
                "Crypt Type",
                "Avs Street Number",
                "Avs Street Name",
                "Avs Zipcode",
                "IssuerId",
            ]
        );
    }

    #[test]
    fn test_txn_number_comes_from_trans_id() {
        let receipt = Receipt {
            txn_number: Some("660110910011139080".to_string()),
            ..Default::default()
        };
        let fields = receipt.fields();
        let (_, value) = fields.iter().find(|(l, _)| *l == "TxnNumber").unwrap();
        assert_eq!(value.to_string(), "660110910011139080");
    }
}
