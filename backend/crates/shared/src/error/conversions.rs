//! Error conversions - store and transport adapters for [`AppError`]

#[cfg(feature = "axum")]
use super::app_error::AppError;

// ============================================================================
// SQLx helpers (feature-gated)
// ============================================================================

/// PostgreSQL `unique_violation` SQLSTATE
/// https://www.postgresql.org/docs/current/errcodes-appendix.html
pub const PG_UNIQUE_VIOLATION: &str = "23505";

/// Whether the store rejected a write because of a unique index.
///
/// Repositories use this to turn the losing side of a concurrent duplicate
/// insert into a business conflict rather than an internal error.
#[cfg(feature = "sqlx")]
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err
            .code()
            .is_some_and(|code| code.as_ref() == PG_UNIQUE_VIOLATION),
        _ => false,
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use crate::response::Envelope;
        use axum::Json;
        use http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // error は 5xx のときだけ付与する (原因そのものは返さない)
        let body: Envelope<()> = Envelope {
            message: self.message().to_string(),
            data: None,
            error: self
                .is_server_error()
                .then(|| self.kind().code().to_string()),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(all(test, feature = "axum"))]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    async fn body_json(err: AppError) -> (u16, serde_json::Value) {
        let response = err.into_response();
        let status = response.status().as_u16();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_client_error_has_no_error_field() {
        let (status, json) = body_json(AppError::conflict("Customer already exists.")).await;
        assert_eq!(status, 409);
        assert_eq!(json["message"], "Customer already exists.");
        assert!(json.get("error").is_none());
        assert!(json.get("data").is_none());
    }

    #[tokio::test]
    async fn test_server_error_carries_kind_code_only() {
        let source = std::io::Error::other("password authentication failed for user postgres");
        let err = AppError::internal("A server error occurred").with_source(source);
        let (status, json) = body_json(err).await;
        assert_eq!(status, 500);
        assert_eq!(json["error"], "INTERNAL_SERVER_ERROR");
        assert!(!json.to_string().contains("postgres"));
    }
}
