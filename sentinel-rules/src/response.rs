//! Normalized REST response envelope
//!
//! Every rule-resource operation returns a [`RestResponse`]; domain errors
//! are translated into status codes before crossing this boundary.

/// A normalized REST response: body, status code, and mime type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestResponse {
    /// Response body; empty for status-only responses.
    pub body: String,

    /// HTTP status code. Defaults to 200.
    pub status_code: u16,

    /// Mime type of the body.
    pub mime_type: &'static str,
}

impl RestResponse {
    /// A 200 response carrying a JSON body.
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            status_code: 200,
            mime_type: "application/json",
        }
    }

    /// A 200 response with an empty plain-text body.
    pub fn empty() -> Self {
        Self {
            body: String::new(),
            status_code: 200,
            mime_type: "text/plain",
        }
    }

    /// A status-only response with an empty plain-text body.
    pub fn status(status_code: u16) -> Self {
        Self {
            body: String::new(),
            status_code,
            mime_type: "text/plain",
        }
    }

    /// Check whether the status code indicates success.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

impl Default for RestResponse {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_response() {
        let response = RestResponse::json("[]");
        assert_eq!(response.status_code, 200);
        assert_eq!(response.mime_type, "application/json");
        assert_eq!(response.body, "[]");
        assert!(response.is_success());
    }

    #[test]
    fn test_status_response() {
        let response = RestResponse::status(404);
        assert_eq!(response.status_code, 404);
        assert_eq!(response.mime_type, "text/plain");
        assert!(response.body.is_empty());
        assert!(!response.is_success());
    }

    #[test]
    fn test_default_is_empty_ok() {
        let response = RestResponse::default();
        assert_eq!(response.status_code, 200);
        assert!(response.body.is_empty());
    }
}
