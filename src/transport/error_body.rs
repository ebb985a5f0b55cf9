use serde_json::Value;

/// Code and message recovered from a non-2xx response body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpstreamErrorBody {
    pub code: Option<String>,
    pub message: Option<String>,
}

/// Decode an upstream error body.
///
/// Two JSON shapes are known:
/// - SENS: `{ "status": 403, "error": "Forbidden", "message": "..." }`
/// - Mail: `{ "errorCode": "77102", "message": "..." }`
///
/// `errorCode` wins over `error` when both are present. Any body that is not
/// JSON (e.g. a gateway HTML page), or is the JSON literal `null`, is kept
/// whole as the message.
pub fn decode_error_body(raw: &str) -> UpstreamErrorBody {
    match serde_json::from_str::<Value>(raw) {
        Ok(body) if !body.is_null() => UpstreamErrorBody {
            code: field_text(&body, "errorCode").or_else(|| field_text(&body, "error")),
            message: field_text(&body, "message"),
        },
        _ => UpstreamErrorBody {
            code: None,
            message: Some(raw.to_owned()),
        },
    }
}

fn field_text(body: &Value, key: &str) -> Option<String> {
    match body.get(key)? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sens_shape_uses_error_field_as_code() {
        let body = decode_error_body(
            r#"{"status":403,"error":"Forbidden","message":"Authentication failed"}"#,
        );
        assert_eq!(body.code.as_deref(), Some("Forbidden"));
        assert_eq!(body.message.as_deref(), Some("Authentication failed"));
    }

    #[test]
    fn mail_shape_uses_error_code_field() {
        let body = decode_error_body(r#"{"errorCode":"77102","message":"Invalid parameter"}"#);
        assert_eq!(body.code.as_deref(), Some("77102"));
        assert_eq!(body.message.as_deref(), Some("Invalid parameter"));
    }

    #[test]
    fn error_code_is_preferred_over_error() {
        let body = decode_error_body(r#"{"errorCode":"E1","error":"Bad Request"}"#);
        assert_eq!(body.code.as_deref(), Some("E1"));
        assert_eq!(body.message, None);
    }

    #[test]
    fn null_error_code_falls_back_to_error() {
        let body = decode_error_body(r#"{"errorCode":null,"error":"Bad Request"}"#);
        assert_eq!(body.code.as_deref(), Some("Bad Request"));
    }

    #[test]
    fn numeric_codes_are_rendered_as_text() {
        let body = decode_error_body(r#"{"errorCode":77102}"#);
        assert_eq!(body.code.as_deref(), Some("77102"));
    }

    #[test]
    fn non_json_body_becomes_the_message() {
        let html = "<html><body>502 Bad Gateway</body></html>";
        let body = decode_error_body(html);
        assert_eq!(body.code, None);
        assert_eq!(body.message.as_deref(), Some(html));
    }

    #[test]
    fn null_body_becomes_the_message() {
        let body = decode_error_body("null");
        assert_eq!(body.code, None);
        assert_eq!(body.message.as_deref(), Some("null"));
    }

    #[test]
    fn json_without_known_fields_yields_nothing() {
        assert_eq!(decode_error_body("[1,2,3]"), UpstreamErrorBody::default());
        assert_eq!(decode_error_body(r#"{"detail":"x"}"#), UpstreamErrorBody::default());
    }
}
