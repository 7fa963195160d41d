use {
    super::error::GatewayError,
    serde::{Deserialize, Serialize},
    std::{collections::BTreeMap, fmt},
};

/// Provider status that marks an authorized, not yet captured order.
pub const CHECKOUT_COMPLETE: &str = "checkout_complete";
/// Provider status that marks a captured order.
pub const CREATED: &str = "created";

/// The gateway's closed status vocabulary, independent of provider wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizedStatus {
    Authorized,
    Cleared,
    Cancelled,
}

impl NormalizedStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authorized => "authorized",
            Self::Cleared => "cleared",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for NormalizedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for NormalizedStatus {
    type Error = GatewayError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "authorized" => Ok(Self::Authorized),
            "cleared" => Ok(Self::Cleared),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(GatewayError::Validation(format!(
                "unknown normalized status: {other}"
            ))),
        }
    }
}

/// Single source of truth for status classification. Total over all
/// strings: the two known markers map to their codes, everything else is
/// Cancelled.
pub fn normalize(raw_provider_status: &str) -> NormalizedStatus {
    match raw_provider_status {
        CHECKOUT_COMPLETE => NormalizedStatus::Authorized,
        CREATED => NormalizedStatus::Cleared,
        _ => NormalizedStatus::Cancelled,
    }
}

/// Result of one successful gateway operation. Built fresh each call from
/// the order state fetched during that call; `status` always comes out of
/// [`normalize`] or the capture guard, never ad hoc.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentStatus {
    merchant_order_id: Option<String>,
    provider_order_id: String,
    raw_status: String,
    status: NormalizedStatus,
    additional_data: BTreeMap<String, String>,
}

impl PaymentStatus {
    pub fn new(
        merchant_order_id: Option<String>,
        provider_order_id: String,
        raw_status: String,
        status: NormalizedStatus,
        additional_data: BTreeMap<String, String>,
    ) -> Self {
        Self {
            merchant_order_id,
            provider_order_id,
            raw_status,
            status,
            additional_data,
        }
    }

    pub fn merchant_order_id(&self) -> Option<&str> {
        self.merchant_order_id.as_deref()
    }

    pub fn provider_order_id(&self) -> &str {
        &self.provider_order_id
    }

    pub fn raw_status(&self) -> &str {
        &self.raw_status
    }

    pub fn status(&self) -> NormalizedStatus {
        self.status
    }

    pub fn additional_data(&self) -> &BTreeMap<String, String> {
        &self.additional_data
    }
}
