use {
    super::{error::GatewayError, id::OrderUri},
    serde::{Deserialize, Serialize},
    std::collections::BTreeMap,
};

/// Map key under which the remote order handle travels, both in the
/// provider callback and inside [`AuthorizedData`].
pub const KLARNA_ORDER_KEY: &str = "klarna_order";

/// Minimal state needed to re-locate a remote checkout order across calls.
/// Held by the gateway for one payment session; the host persists it after
/// `handle_response` and restores it to resume a capture later.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorizedData(BTreeMap<String, String>);

impl AuthorizedData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_order_uri(uri: &OrderUri) -> Self {
        let mut data = BTreeMap::new();
        data.insert(KLARNA_ORDER_KEY.to_string(), uri.as_str().to_string());
        Self(data)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The stored order handle, or a precondition failure when no session
    /// has been authorized yet.
    pub fn order_uri(&self) -> Result<OrderUri, GatewayError> {
        let uri = self.0.get(KLARNA_ORDER_KEY).ok_or_else(|| {
            GatewayError::Precondition(
                "no authorized session: handle_response or set_authorized_data must run before capture"
                    .to_string(),
            )
        })?;
        OrderUri::new(uri.clone())
    }
}

impl From<BTreeMap<String, String>> for AuthorizedData {
    fn from(data: BTreeMap<String, String>) -> Self {
        Self(data)
    }
}
