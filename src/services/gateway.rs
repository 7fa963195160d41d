use {
    crate::domain::{
        config::GatewayConfig,
        error::GatewayError,
        gateway::PaymentGateway,
        id::OrderUri,
        money::Money,
        provider::{CheckoutApi, RemoteOrder},
        session::{AuthorizedData, KLARNA_ORDER_KEY},
        status::{self, NormalizedStatus, PaymentStatus},
        validate::require_keys,
    },
    std::{collections::BTreeMap, future::Future, pin::Pin, sync::Arc},
};

const INIT_REQUIRED_KEYS: &[&str] = &["purchase_country", "locale", "merchant_reference"];

/// Klarna Checkout variant of the payment gateway. Orchestrates the
/// remote order client across init → callback → capture, validating
/// inputs and normalizing every outcome through the status mapper.
pub struct KlarnaGateway {
    config: GatewayConfig,
    api: Arc<dyn CheckoutApi>,
    authorized_data: AuthorizedData,
}

impl KlarnaGateway {
    pub fn new(config: GatewayConfig, api: Arc<dyn CheckoutApi>) -> Self {
        Self {
            config,
            api,
            authorized_data: AuthorizedData::new(),
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    async fn init_payment_inner(
        &self,
        price: &Money,
        session: &BTreeMap<String, String>,
    ) -> Result<String, GatewayError> {
        require_keys(session, INIT_REQUIRED_KEYS)?;

        let payload = self.build_order_payload(price, session);
        let uri = self.api.create_order(&payload).await?;
        let order = self.api.fetch_order(&uri).await?;

        let snippet = order.gui.snippet.ok_or_else(|| {
            GatewayError::Remote("created order carries no checkout snippet".to_string())
        })?;

        tracing::info!(order_uri = %uri, "checkout order created");
        Ok(snippet)
    }

    /// The order payload is the session map passed through verbatim, with
    /// `merchant_reference` nested the way the provider reads it back,
    /// plus the currency and merchant id the host never supplies itself.
    fn build_order_payload(
        &self,
        price: &Money,
        session: &BTreeMap<String, String>,
    ) -> serde_json::Value {
        let mut payload = serde_json::Map::new();

        for (key, value) in session {
            if key == "merchant_reference" {
                payload.insert(key.clone(), serde_json::json!({ "orderid2": value }));
            } else {
                payload.insert(key.clone(), serde_json::Value::String(value.clone()));
            }
        }

        payload.insert(
            "purchase_currency".to_string(),
            serde_json::Value::String(price.currency().as_str().to_string()),
        );
        payload.insert(
            "merchant".to_string(),
            serde_json::json!({ "id": self.config.eid() }),
        );

        serde_json::Value::Object(payload)
    }

    async fn handle_response_inner(
        &mut self,
        response: &BTreeMap<String, String>,
    ) -> Result<PaymentStatus, GatewayError> {
        require_keys(response, &[KLARNA_ORDER_KEY])?;

        let uri = OrderUri::new(response[KLARNA_ORDER_KEY].clone())?;

        // Last write wins: one in-flight session per gateway instance.
        self.authorized_data = AuthorizedData::from_order_uri(&uri);

        let order = self.api.fetch_order(&uri).await?;
        let normalized = status::normalize(&order.status);

        tracing::info!(
            order_id = %order.id,
            raw_status = %order.status,
            status = %normalized,
            "provider response handled"
        );

        Self::status_from_order(
            &order,
            order.merchant_reference.orderid2.clone(),
            normalized,
            true,
        )
    }

    async fn execute_debit_inner(
        &mut self,
        price: Option<&Money>,
        reference: Option<&str>,
    ) -> Result<PaymentStatus, GatewayError> {
        if price.is_some() {
            return Err(GatewayError::Unsupported(
                "amount-qualified capture is not supported".to_string(),
            ));
        }

        let uri = self.authorized_data.order_uri()?;
        let mut order = self.api.fetch_order(&uri).await?;

        // Transition guard: only an authorized, still-uncaptured order is
        // moved. An order already past checkout_complete is reported
        // as-is, so repeated captures never re-issue the update.
        if order.status == status::CHECKOUT_COMPLETE {
            let patch = serde_json::json!({ "status": status::CREATED });
            order = self.api.update_order(&uri, &patch).await?;
            tracing::info!(order_id = %order.id, "capture issued");
        }

        let normalized = if order.status == status::CREATED {
            NormalizedStatus::Cleared
        } else {
            NormalizedStatus::Cancelled
        };

        Self::status_from_order(&order, reference.map(str::to_string), normalized, false)
    }

    fn status_from_order(
        order: &RemoteOrder,
        merchant_order_id: Option<String>,
        normalized: NormalizedStatus,
        with_session_refs: bool,
    ) -> Result<PaymentStatus, GatewayError> {
        let mut data = BTreeMap::new();

        if let Some(total) = order.cart.total_price_including_tax {
            data.insert("amount".to_string(), total.to_string());
        }
        data.insert("marshal".to_string(), order.marshal()?);

        if with_session_refs {
            if let Some(reservation) = &order.reservation {
                data.insert("reservation".to_string(), reservation.clone());
            }
            if let Some(reference) = &order.reference {
                data.insert("reference".to_string(), reference.clone());
            }
        }

        Ok(PaymentStatus::new(
            merchant_order_id,
            order.id.clone(),
            order.status.clone(),
            normalized,
            data,
        ))
    }
}

impl PaymentGateway for KlarnaGateway {
    fn name(&self) -> &'static str {
        "Klarna"
    }

    fn init_payment<'a>(
        &'a self,
        price: &'a Money,
        session: &'a BTreeMap<String, String>,
    ) -> Pin<Box<dyn Future<Output = Result<String, GatewayError>> + Send + 'a>> {
        Box::pin(self.init_payment_inner(price, session))
    }

    fn handle_response<'a>(
        &'a mut self,
        response: &'a BTreeMap<String, String>,
    ) -> Pin<Box<dyn Future<Output = Result<PaymentStatus, GatewayError>> + Send + 'a>> {
        Box::pin(self.handle_response_inner(response))
    }

    fn execute_debit<'a>(
        &'a mut self,
        price: Option<&'a Money>,
        reference: Option<&'a str>,
    ) -> Pin<Box<dyn Future<Output = Result<PaymentStatus, GatewayError>> + Send + 'a>> {
        Box::pin(self.execute_debit_inner(price, reference))
    }

    fn execute_credit<'a>(
        &'a mut self,
        _price: &'a Money,
        _reference: &'a str,
        _transaction_id: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<PaymentStatus, GatewayError>> + Send + 'a>> {
        Box::pin(async { Err(GatewayError::NotImplemented("credit")) })
    }

    fn authorized_data(&self) -> &AuthorizedData {
        &self.authorized_data
    }

    fn set_authorized_data(&mut self, data: AuthorizedData) {
        self.authorized_data = data;
    }
}
