use {
    super::error::GatewayError,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Deployment mode. Alone decides which provider endpoint is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Sandbox,
    Live,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sandbox => "sandbox",
            Self::Live => "live",
        }
    }

    /// Base URL of the checkout order resource for this mode.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Sandbox => "https://checkout.testdrive.klarna.com/checkout/orders",
            Self::Live => "https://checkout.klarna.com/checkout/orders",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Mode {
    type Error = GatewayError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "sandbox" => Ok(Self::Sandbox),
            "live" => Ok(Self::Live),
            other => Err(GatewayError::Configuration(format!(
                "mode must be 'sandbox' or 'live', got: {other}"
            ))),
        }
    }
}

/// Merchant settings for one gateway instance. Immutable after
/// construction; every field is checked eagerly so a misconfigured
/// gateway never reaches a lifecycle call.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    eid: String,
    shared_secret: String,
    mode: Mode,
}

impl GatewayConfig {
    pub fn new(
        eid: impl Into<String>,
        shared_secret: impl Into<String>,
        mode: Mode,
    ) -> Result<Self, GatewayError> {
        let eid = eid.into();
        let shared_secret = shared_secret.into();

        if eid.is_empty() {
            return Err(GatewayError::Configuration(
                "eid cannot be empty".to_string(),
            ));
        }
        if shared_secret.is_empty() {
            return Err(GatewayError::Configuration(
                "shared_secret cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            eid,
            shared_secret,
            mode,
        })
    }

    pub fn eid(&self) -> &str {
        &self.eid
    }

    pub fn shared_secret(&self) -> &str {
        &self.shared_secret
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn endpoint(&self) -> &'static str {
        self.mode.endpoint()
    }
}
