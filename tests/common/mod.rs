#![allow(dead_code)]

use klarna_gateway::domain::config::{GatewayConfig, Mode};
use klarna_gateway::domain::error::GatewayError;
use klarna_gateway::domain::id::OrderUri;
use klarna_gateway::domain::money::{Currency, Money, MoneyAmount};
use klarna_gateway::domain::provider::{CheckoutApi, RemoteOrder};
use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const ORDER_URI: &str = "https://checkout.testdrive.klarna.com/checkout/orders/ord_1";
pub const SNIPPET: &str = "<div id=\"klarna-checkout\"></div>";

/// In-memory checkout provider holding one remote order. Records every
/// call so tests can assert exactly which remote operations ran.
pub struct FakeCheckout {
    order: Mutex<Option<serde_json::Value>>,
    pub last_create_payload: Mutex<Option<serde_json::Value>>,
    pub creates: AtomicUsize,
    pub fetches: AtomicUsize,
    pub updates: AtomicUsize,
    fail: Mutex<Option<String>>,
}

impl FakeCheckout {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            order: Mutex::new(None),
            last_create_payload: Mutex::new(None),
            creates: AtomicUsize::new(0),
            fetches: AtomicUsize::new(0),
            updates: AtomicUsize::new(0),
            fail: Mutex::new(None),
        })
    }

    /// Seed a remote order as if a shopper had already been through checkout.
    pub fn with_order(order: serde_json::Value) -> Arc<Self> {
        let fake = Self::new();
        *fake.order.lock().unwrap() = Some(order);
        fake
    }

    pub fn set_order_status(&self, status: &str) {
        let mut order = self.order.lock().unwrap();
        if let Some(order) = order.as_mut() {
            order["status"] = serde_json::json!(status);
        }
    }

    /// Make every subsequent call fail like a provider outage.
    pub fn fail_with(&self, message: &str) {
        *self.fail.lock().unwrap() = Some(message.to_string());
    }

    fn check_fail(&self) -> Result<(), GatewayError> {
        match self.fail.lock().unwrap().clone() {
            Some(message) => Err(GatewayError::Remote(message)),
            None => Ok(()),
        }
    }

    fn current_order(&self) -> Result<serde_json::Value, GatewayError> {
        self.order
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| GatewayError::Remote("no such order".to_string()))
    }
}

impl CheckoutApi for FakeCheckout {
    fn create_order(
        &self,
        payload: &serde_json::Value,
    ) -> Pin<Box<dyn Future<Output = Result<OrderUri, GatewayError>> + Send + '_>> {
        let payload = payload.clone();
        Box::pin(async move {
            self.check_fail()?;
            self.creates.fetch_add(1, Ordering::SeqCst);
            *self.last_create_payload.lock().unwrap() = Some(payload.clone());

            let mut order = payload;
            order["id"] = serde_json::json!("ord_1");
            order["status"] = serde_json::json!("checkout_incomplete");
            order["cart"] = serde_json::json!({ "total_price_including_tax": 10000 });
            order["gui"] = serde_json::json!({ "snippet": SNIPPET });
            *self.order.lock().unwrap() = Some(order);

            OrderUri::new(ORDER_URI)
        })
    }

    fn fetch_order(
        &self,
        _uri: &OrderUri,
    ) -> Pin<Box<dyn Future<Output = Result<RemoteOrder, GatewayError>> + Send + '_>> {
        Box::pin(async move {
            self.check_fail()?;
            self.fetches.fetch_add(1, Ordering::SeqCst);
            RemoteOrder::from_value(self.current_order()?)
        })
    }

    fn update_order(
        &self,
        _uri: &OrderUri,
        patch: &serde_json::Value,
    ) -> Pin<Box<dyn Future<Output = Result<RemoteOrder, GatewayError>> + Send + '_>> {
        let patch = patch.clone();
        Box::pin(async move {
            self.check_fail()?;
            self.updates.fetch_add(1, Ordering::SeqCst);

            let mut order = self.current_order()?;
            if let Some(entries) = patch.as_object() {
                for (key, value) in entries {
                    order[key] = value.clone();
                }
            }
            *self.order.lock().unwrap() = Some(order.clone());

            RemoteOrder::from_value(order)
        })
    }
}

// ── Fixture builders ───────────────────────────────────────────────────────

pub fn make_config() -> GatewayConfig {
    GatewayConfig::new("E1", "S1", Mode::Sandbox).unwrap()
}

pub fn eur(minor_units: i64) -> Money {
    Money::new(MoneyAmount::new(minor_units).unwrap(), Currency::Eur)
}

pub fn make_session() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("purchase_country".to_string(), "DE".to_string()),
        ("locale".to_string(), "de-DE".to_string()),
        ("merchant_reference".to_string(), "M-1".to_string()),
    ])
}

pub fn confirm_response() -> BTreeMap<String, String> {
    BTreeMap::from([("klarna_order".to_string(), ORDER_URI.to_string())])
}

/// Canonical remote order snapshot in the given lifecycle status.
pub fn order_value(status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "ord_1",
        "status": status,
        "merchant_reference": { "orderid2": "M-1" },
        "cart": { "total_price_including_tax": 10000 },
        "reservation": "rsv_99",
        "reference": "ref_42",
        "gui": { "snippet": SNIPPET },
    })
}
