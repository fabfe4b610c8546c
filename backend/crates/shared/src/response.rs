//! Response Envelope
//!
//! Every API response body has the shape `{ message, data?, error? }`.
//! Handlers return [`Reply<T>`] on success and a component error on failure;
//! the mapping to transport status codes happens only here and in
//! `AppError`'s `IntoResponse`.

use serde::{Deserialize, Serialize};

/// JSON body shared by success and error responses
///
/// `data` is present only on success paths that return a payload; `error`
/// only on internal-error paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Success reply: status + message + optional payload
#[derive(Debug, Clone)]
pub struct Reply<T> {
    status: u16,
    envelope: Envelope<T>,
}

impl<T> Reply<T> {
    /// 200 with payload
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::with_status(200, message, Some(data))
    }

    /// 201 with payload
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self::with_status(201, message, Some(data))
    }

    fn with_status(status: u16, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status,
            envelope: Envelope {
                message: message.into(),
                data,
                error: None,
            },
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status
    }

    pub fn envelope(&self) -> &Envelope<T> {
        &self.envelope
    }
}

impl Reply<()> {
    /// 201 without payload
    pub fn created_empty(message: impl Into<String>) -> Self {
        Self::with_status(201, message, None)
    }
}

#[cfg(feature = "axum")]
impl<T: Serialize> axum::response::IntoResponse for Reply<T> {
    fn into_response(self) -> axum::response::Response {
        let status = http::StatusCode::from_u16(self.status).unwrap_or(http::StatusCode::OK);
        (status, axum::Json(self.envelope)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_omitted_when_absent() {
        let reply = Reply::created_empty("User has been successfully created.");
        let json = serde_json::to_value(reply.envelope()).unwrap();
        assert_eq!(reply.status_code(), 201);
        assert_eq!(
            json,
            serde_json::json!({ "message": "User has been successfully created." })
        );
    }

    #[test]
    fn test_data_present() {
        let reply = Reply::ok("Successfully logged in.", serde_json::json!({ "token": "t" }));
        let json = serde_json::to_value(reply.envelope()).unwrap();
        assert_eq!(reply.status_code(), 200);
        assert_eq!(json["data"]["token"], "t");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let env: Envelope<Vec<u32>> = serde_json::from_str(r#"{"message":"x"}"#).unwrap();
        assert!(env.data.is_none());
        assert!(env.error.is_none());
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Issued {
        token: String,
    }

    fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Envelope<T> {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_deserialize_generic_payload() {
        let env: Envelope<Issued> = decode(r#"{"message":"ok","data":{"token":"t"}}"#);
        assert_eq!(env.data, Some(Issued { token: "t".into() }));

        let empty: Envelope<Issued> = decode(r#"{"message":"Invalid credentials."}"#);
        assert!(empty.data.is_none());
    }
}
