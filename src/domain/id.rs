use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::error::GatewayError;

/// Opaque handle locating one remote checkout order. Klarna hands this
/// back as the `Location` header of a create call; the confirmation
/// callback carries it under `klarna_order`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderUri(String);

impl OrderUri {
    pub fn new(uri: impl Into<String>) -> Result<Self, GatewayError> {
        let uri = uri.into();
        if uri.is_empty() {
            return Err(GatewayError::Validation(
                "OrderUri cannot be empty".to_string(),
            ));
        }
        Ok(Self(uri))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
