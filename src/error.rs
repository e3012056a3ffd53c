use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Two-tier error taxonomy: domain faults carry their HTTP status and render
/// as `{"message": ...}`; everything else becomes a generic 500 body with the
/// error chain attached.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::Internal(e.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => domain(StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => domain(StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => domain(StatusCode::CONFLICT, msg),
            ApiError::Internal(err) => {
                let trace: Vec<String> = err.chain().map(|c| c.to_string()).collect();
                error!(error = ?err, "unhandled error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "internal_server_error",
                        "message": err.to_string(),
                        "trace": trace,
                    })),
                )
                    .into_response()
            }
        }
    }
}

fn domain(status: StatusCode, msg: String) -> Response {
    (status, Json(json!({ "message": msg }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(res: Response) -> serde_json::Value {
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn domain_fault_renders_message_at_status() {
        let res = ApiError::NotFound("Planet not found".into()).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body = body_json(res).await;
        assert_eq!(body["message"], "Planet not found");
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn internal_fault_renders_generic_500_with_trace() {
        let err = anyhow::anyhow!("disk on fire").context("fetch planet");
        let res = ApiError::Internal(err).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(res).await;
        assert_eq!(body["error"], "internal_server_error");
        assert_eq!(body["message"], "fetch planet");
        let trace = body["trace"].as_array().unwrap();
        assert!(trace.iter().any(|l| l.as_str() == Some("disk on fire")));
    }
}
