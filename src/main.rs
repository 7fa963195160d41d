use {
    axum::{
        Router,
        extract::DefaultBodyLimit,
        routing::{get, post},
    },
    klarna_gateway::{
        AppState,
        adapters::{http, klarna_client::KlarnaConnector},
        domain::config::{GatewayConfig, Mode},
    },
    std::{env, sync::Arc, time::Duration},
    tokio::signal,
    tower_http::timeout::TimeoutLayer,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();
    let eid = env::var("KLARNA_EID").expect("KLARNA_EID must be set");
    let shared_secret = env::var("KLARNA_SHARED_SECRET").expect("KLARNA_SHARED_SECRET must be set");
    let mode = env::var("KLARNA_MODE").unwrap_or_else(|_| "sandbox".to_string());

    let mode = Mode::try_from(mode.as_str()).expect("KLARNA_MODE must be 'sandbox' or 'live'");
    let config = GatewayConfig::new(eid, shared_secret, mode).expect("invalid gateway settings");
    let connector = KlarnaConnector::new(&config).expect("failed to build checkout client");

    let state = AppState {
        config,
        api: Arc::new(connector),
    };

    let app = Router::new()
        .route("/", get(|| async { "ok" }))
        .route("/checkout/init", post(http::init_handler))
        .route("/checkout/confirm", post(http::confirm_handler))
        .route("/checkout/capture", post(http::capture_handler))
        .route("/checkout/refund", post(http::refund_handler))
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    tracing::info!("listening on 0.0.0.0:3000");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to listen for SIGTERM")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => tracing::info!("received ctrl+c, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
