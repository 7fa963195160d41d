use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("configuration: {0}")]
    Configuration(String),

    #[error("validation: {0}")]
    Validation(String),

    #[error("precondition: {0}")]
    Precondition(String),

    #[error("unsupported operation: {0}")]
    Unsupported(String),

    #[error("remote: {0}")]
    Remote(String),

    #[error("not implemented: {0}")]
    NotImplemented(&'static str),

    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GatewayError {
    /// Validation failure for absent per-call input keys. The message
    /// enumerates exactly the missing key names, in required order.
    pub fn missing_fields(missing: &[&str]) -> Self {
        Self::Validation(format!(
            "required fields are missing: {}",
            missing.join(", ")
        ))
    }
}
