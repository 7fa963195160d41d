use {
    crate::domain::{
        config::GatewayConfig,
        error::GatewayError,
        id::OrderUri,
        provider::{CheckoutApi, RemoteOrder},
    },
    base64::{Engine as _, engine::general_purpose::STANDARD as BASE64_STANDARD},
    reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, LOCATION},
    sha2::{Digest, Sha256},
    std::{future::Future, pin::Pin, time::Duration},
};

const KCO_MEDIA_TYPE: &str = "application/vnd.klarna.checkout.aggregated-order-v2+json";
const HTTP_TIMEOUT: Duration = Duration::from_secs(15);

/// Checkout order RPC client. One instance per merchant configuration;
/// the endpoint is fixed by the deployment mode at construction.
pub struct KlarnaConnector {
    http: reqwest::Client,
    shared_secret: String,
    endpoint: &'static str,
}

impl KlarnaConnector {
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| GatewayError::Remote(format!("http client: {e}")))?;

        Ok(Self {
            http,
            shared_secret: config.shared_secret().to_string(),
            endpoint: config.endpoint(),
        })
    }

    /// Shared-secret digest the provider expects on every request:
    /// base64 of sha256 over the request payload followed by the secret.
    fn authorization(&self, payload: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(payload);
        hasher.update(self.shared_secret.as_bytes());
        format!("Klarna {}", BASE64_STANDARD.encode(hasher.finalize()))
    }

    async fn create_inner(&self, payload: serde_json::Value) -> Result<OrderUri, GatewayError> {
        let body = serde_json::to_vec(&payload)?;

        let response = self
            .http
            .post(self.endpoint)
            .header(AUTHORIZATION, self.authorization(&body))
            .header(ACCEPT, KCO_MEDIA_TYPE)
            .header(CONTENT_TYPE, KCO_MEDIA_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| GatewayError::Remote(format!("create order: {e}")))?;
        let response = Self::check_status(response).await?;

        // The created resource is addressed only by the Location header.
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                GatewayError::Remote("create response carries no Location header".to_string())
            })?;

        tracing::debug!(order_uri = %location, "remote order created");
        OrderUri::new(location)
    }

    async fn fetch_inner(&self, uri: OrderUri) -> Result<RemoteOrder, GatewayError> {
        let response = self
            .http
            .get(uri.as_str())
            .header(AUTHORIZATION, self.authorization(b""))
            .header(ACCEPT, KCO_MEDIA_TYPE)
            .send()
            .await
            .map_err(|e| GatewayError::Remote(format!("fetch order: {e}")))?;
        let response = Self::check_status(response).await?;

        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GatewayError::Remote(format!("fetch order body: {e}")))?;
        RemoteOrder::from_value(value)
    }

    async fn update_inner(
        &self,
        uri: OrderUri,
        patch: serde_json::Value,
    ) -> Result<RemoteOrder, GatewayError> {
        let body = serde_json::to_vec(&patch)?;

        let response = self
            .http
            .post(uri.as_str())
            .header(AUTHORIZATION, self.authorization(&body))
            .header(ACCEPT, KCO_MEDIA_TYPE)
            .header(CONTENT_TYPE, KCO_MEDIA_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| GatewayError::Remote(format!("update order: {e}")))?;
        let response = Self::check_status(response).await?;

        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GatewayError::Remote(format!("update order body: {e}")))?;
        RemoteOrder::from_value(value)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail: String = body.chars().take(200).collect();
        Err(GatewayError::Remote(format!(
            "provider returned {status}: {detail}"
        )))
    }
}

impl CheckoutApi for KlarnaConnector {
    fn create_order(
        &self,
        payload: &serde_json::Value,
    ) -> Pin<Box<dyn Future<Output = Result<OrderUri, GatewayError>> + Send + '_>> {
        let payload = payload.clone();
        Box::pin(async move { self.create_inner(payload).await })
    }

    fn fetch_order(
        &self,
        uri: &OrderUri,
    ) -> Pin<Box<dyn Future<Output = Result<RemoteOrder, GatewayError>> + Send + '_>> {
        let uri = uri.clone();
        Box::pin(async move { self.fetch_inner(uri).await })
    }

    fn update_order(
        &self,
        uri: &OrderUri,
        patch: &serde_json::Value,
    ) -> Pin<Box<dyn Future<Output = Result<RemoteOrder, GatewayError>> + Send + '_>> {
        let uri = uri.clone();
        let patch = patch.clone();
        Box::pin(async move { self.update_inner(uri, patch).await })
    }
}
