// served as-is so the bytes on the wire never depend on serde_json formatting
pub const DENY_BODY: &str =
    r#"{"error": "Forbidden", "message": "This API endpoint is not accessible from WAN"}"#;

pub const DENY_CONTENT_TYPE: &str = "application/json";
pub const DENY_ALLOW_ORIGIN: &str = "*";
