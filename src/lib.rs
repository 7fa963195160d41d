pub mod adapters;
pub mod domain;
pub mod services;

use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: domain::config::GatewayConfig,
    pub api: Arc<dyn domain::provider::CheckoutApi>,
}
