use crate::domain::error::GatewayError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

// Newtype over the domain error so the HTTP mapping lives in the adapter
// layer and the domain stays transport-free.
pub struct ApiError(pub GatewayError);

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self.0 {
            GatewayError::Validation(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                msg.clone(),
            ),
            GatewayError::Precondition(msg) => {
                (StatusCode::CONFLICT, "precondition_failed", msg.clone())
            }
            GatewayError::Unsupported(msg) => (
                StatusCode::METHOD_NOT_ALLOWED,
                "unsupported_operation",
                msg.clone(),
            ),
            GatewayError::NotImplemented(what) => (
                StatusCode::NOT_IMPLEMENTED,
                "not_implemented",
                format!("{what} is not implemented"),
            ),
            GatewayError::Remote(err) => {
                tracing::error!("provider error: {err}");
                (
                    StatusCode::BAD_GATEWAY,
                    "provider_error",
                    "checkout provider request failed".to_string(),
                )
            }
            GatewayError::Configuration(err) => {
                tracing::error!("configuration error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "internal error".to_string(),
                )
            }
            GatewayError::Serialization(err) => {
                tracing::error!("serialization error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "internal error".to_string(),
                )
            }
        };

        let body = serde_json::json!({
            "error_code": error_code,
            "message": message,
        });

        (status, Json(body)).into_response()
    }
}
