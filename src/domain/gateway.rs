use {
    super::{
        error::GatewayError, money::Money, session::AuthorizedData, status::PaymentStatus,
    },
    std::{collections::BTreeMap, future::Future, pin::Pin},
};

/// Capability interface every checkout provider variant implements. One
/// constructed gateway serves one payment session; the host keeps at most
/// one operation in flight per instance.
pub trait PaymentGateway: Send {
    fn name(&self) -> &'static str;

    /// Create the remote order and return the provider's rendering snippet.
    fn init_payment<'a>(
        &'a self,
        price: &'a Money,
        session: &'a BTreeMap<String, String>,
    ) -> Pin<Box<dyn Future<Output = Result<String, GatewayError>> + Send + 'a>>;

    /// Callback/confirmation path: re-fetch the order named by the
    /// provider response and report its normalized status.
    fn handle_response<'a>(
        &'a mut self,
        response: &'a BTreeMap<String, String>,
    ) -> Pin<Box<dyn Future<Output = Result<PaymentStatus, GatewayError>> + Send + 'a>>;

    /// Capture a previously authorized order.
    fn execute_debit<'a>(
        &'a mut self,
        price: Option<&'a Money>,
        reference: Option<&'a str>,
    ) -> Pin<Box<dyn Future<Output = Result<PaymentStatus, GatewayError>> + Send + 'a>>;

    /// Refund against a captured payment.
    fn execute_credit<'a>(
        &'a mut self,
        price: &'a Money,
        reference: &'a str,
        transaction_id: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<PaymentStatus, GatewayError>> + Send + 'a>>;

    fn authorized_data(&self) -> &AuthorizedData;

    fn set_authorized_data(&mut self, data: AuthorizedData);
}
