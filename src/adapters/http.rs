use {
    crate::{
        AppState,
        adapters::api_errors::ApiError,
        domain::{
            gateway::PaymentGateway,
            money::{Currency, Money, MoneyAmount},
            session::AuthorizedData,
            status::PaymentStatus,
        },
        services::gateway::KlarnaGateway,
    },
    axum::{Json, extract::State},
    serde::{Deserialize, Serialize},
    std::collections::BTreeMap,
};

// One gateway per request: the adapter's session state never outlives the
// call, and the host round-trips AuthorizedData through these bodies.

#[derive(Debug, Deserialize)]
pub struct InitRequest {
    pub amount: i64,
    pub currency: String,
    #[serde(flatten)]
    pub session: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct InitResponse {
    pub snippet: String,
}

#[tracing::instrument(name = "checkout_init", skip_all)]
pub async fn init_handler(
    State(state): State<AppState>,
    Json(request): Json<InitRequest>,
) -> Result<Json<InitResponse>, ApiError> {
    let amount = MoneyAmount::new(request.amount)?;
    let currency = Currency::try_from(request.currency.as_str())?;
    let price = Money::new(amount, currency);

    let gateway = KlarnaGateway::new(state.config.clone(), state.api.clone());
    let snippet = gateway.init_payment(&price, &request.session).await?;

    Ok(Json(InitResponse { snippet }))
}

#[derive(Debug, Serialize)]
pub struct ConfirmResponse {
    pub status: PaymentStatus,
    pub authorized_data: AuthorizedData,
}

#[tracing::instrument(name = "checkout_confirm", skip_all)]
pub async fn confirm_handler(
    State(state): State<AppState>,
    Json(response): Json<BTreeMap<String, String>>,
) -> Result<Json<ConfirmResponse>, ApiError> {
    let mut gateway = KlarnaGateway::new(state.config.clone(), state.api.clone());
    let status = gateway.handle_response(&response).await?;

    Ok(Json(ConfirmResponse {
        status,
        authorized_data: gateway.authorized_data().clone(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct CaptureRequest {
    pub authorized_data: BTreeMap<String, String>,
    #[serde(default)]
    pub reference: Option<String>,
}

#[tracing::instrument(name = "checkout_capture", skip_all)]
pub async fn capture_handler(
    State(state): State<AppState>,
    Json(request): Json<CaptureRequest>,
) -> Result<Json<PaymentStatus>, ApiError> {
    let mut gateway = KlarnaGateway::new(state.config.clone(), state.api.clone());
    gateway.set_authorized_data(AuthorizedData::from(request.authorized_data));

    let status = gateway
        .execute_debit(None, request.reference.as_deref())
        .await?;

    Ok(Json(status))
}

#[derive(Debug, Deserialize)]
pub struct RefundRequest {
    pub amount: i64,
    pub currency: String,
    pub reference: String,
    pub transaction_id: String,
}

#[tracing::instrument(name = "checkout_refund", skip_all)]
pub async fn refund_handler(
    State(state): State<AppState>,
    Json(request): Json<RefundRequest>,
) -> Result<Json<PaymentStatus>, ApiError> {
    let amount = MoneyAmount::new(request.amount)?;
    let currency = Currency::try_from(request.currency.as_str())?;
    let price = Money::new(amount, currency);

    let mut gateway = KlarnaGateway::new(state.config.clone(), state.api.clone());
    let status = gateway
        .execute_credit(&price, &request.reference, &request.transaction_id)
        .await?;

    Ok(Json(status))
}
