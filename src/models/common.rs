use std::fmt;

/// Placeholder printed for a receipt field the gateway did not return.
pub const ABSENT_FIELD: &str = "null";

/// One receipt value as it is shown to the user.
///
/// Gateway values are opaque; absent ones render as [`ABSENT_FIELD`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiptField<'a>(pub Option<&'a str>);

impl<'a> From<&'a Option<String>> for ReceiptField<'a> {
    fn from(value: &'a Option<String>) -> Self {
        ReceiptField(value.as_deref())
    }
}

impl fmt::Display for ReceiptField<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.unwrap_or(ABSENT_FIELD))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_value_is_verbatim() {
        let value = Some(" 10.00 ".to_string());
        assert_eq!(ReceiptField::from(&value).to_string(), " 10.00 ");
    }

    #[test]
    fn test_absent_value_prints_null() {
        let value: Option<String> = None;
        assert_eq!(ReceiptField::from(&value).to_string(), "null");
    }
}
