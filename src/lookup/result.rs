use serde::{Deserialize, Serialize};

/// Outcome of a city lookup.
///
/// Unsupported input is reported through [`LookupResult::Error`], never
/// through a Rust error. On the wire the variant is carried in a `status`
/// field:
///
/// ```json
/// {"status":"success","report":"..."}
/// {"status":"error","error_message":"..."}
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LookupResult {
    /// The city was found; `report` is a human readable sentence.
    Success { report: String },
    /// The city is not supported; `error_message` names what was not found.
    Error { error_message: String },
}

impl LookupResult {
    pub fn success<T>(report: T) -> Self where T: Into<String> {
        LookupResult::Success { report: report.into() }
    }

    pub fn error<T>(error_message: T) -> Self where T: Into<String> {
        LookupResult::Error { error_message: error_message.into() }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LookupResult::Success { .. })
    }

    /// The sentence to show an end user, whichever variant this is.
    pub fn message(&self) -> &str {
        match self {
            LookupResult::Success { report } => report,
            LookupResult::Error { error_message } => error_message,
        }
    }

    /// JSON encoding handed back to the model as tool output.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_serializes_with_status_tag() {
        let value = serde_json::to_value(LookupResult::success("ok")).unwrap();
        assert_eq!(value, json!({"status": "success", "report": "ok"}));
    }

    #[test]
    fn error_serializes_with_status_tag() {
        let value = serde_json::to_value(LookupResult::error("nope")).unwrap();
        assert_eq!(value, json!({"status": "error", "error_message": "nope"}));
    }

    #[test]
    fn error_payload_without_report_is_not_success() {
        let parsed: LookupResult =
            serde_json::from_str(r#"{"status":"error","error_message":"x"}"#).unwrap();
        assert!(!parsed.is_success());
        assert_eq!(parsed.message(), "x");
    }

    #[test]
    fn unknown_status_is_rejected() {
        let parsed = serde_json::from_str::<LookupResult>(r#"{"status":"pending","report":"x"}"#);
        assert!(parsed.is_err());
    }
}
