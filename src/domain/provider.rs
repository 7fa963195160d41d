use {
    super::{error::GatewayError, id::OrderUri},
    serde::Deserialize,
    std::{future::Future, pin::Pin},
};

/// Typed view of the provider-side checkout order. Canonical state lives
/// remotely; this is one fetch's snapshot, never cached across calls.
/// Optional fields are explicit so shape surprises fail at the client
/// boundary instead of deep in the gateway.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteOrder {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub merchant_reference: MerchantReference,
    #[serde(default)]
    pub cart: Cart,
    #[serde(default)]
    pub reservation: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub gui: Gui,

    /// Full provider payload, retained for audit snapshots.
    #[serde(skip)]
    raw: serde_json::Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MerchantReference {
    #[serde(default)]
    pub orderid2: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub total_price_including_tax: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Gui {
    #[serde(default)]
    pub snippet: Option<String>,
}

impl RemoteOrder {
    /// Deserialize the typed view and keep the raw payload alongside it.
    pub fn from_value(value: serde_json::Value) -> Result<Self, GatewayError> {
        let mut order: RemoteOrder = serde_json::from_value(value.clone())?;
        order.raw = value;
        Ok(order)
    }

    /// Serializable snapshot of the order as the provider returned it.
    pub fn marshal(&self) -> Result<String, GatewayError> {
        Ok(serde_json::to_string(&self.raw)?)
    }
}

/// Outbound port to the checkout provider: an opaque keyed-resource RPC
/// (create/fetch/update over an order handle). Assumed reliable but
/// fallible; implementations do not retry.
pub trait CheckoutApi: Send + Sync {
    fn create_order(
        &self,
        payload: &serde_json::Value,
    ) -> Pin<Box<dyn Future<Output = Result<OrderUri, GatewayError>> + Send + '_>>;

    fn fetch_order(
        &self,
        uri: &OrderUri,
    ) -> Pin<Box<dyn Future<Output = Result<RemoteOrder, GatewayError>> + Send + '_>>;

    fn update_order(
        &self,
        uri: &OrderUri,
        patch: &serde_json::Value,
    ) -> Pin<Box<dyn Future<Output = Result<RemoteOrder, GatewayError>> + Send + '_>>;
}
