use klarna_gateway::domain::config::{GatewayConfig, Mode};
use klarna_gateway::domain::error::GatewayError;
use klarna_gateway::domain::validate::require_keys;
use std::collections::BTreeMap;

// ── 1. config_rejects_empty_eid ────────────────────────────────────────────

#[test]
fn config_rejects_empty_eid() {
    let err = GatewayConfig::new("", "S1", Mode::Sandbox).unwrap_err();
    assert!(matches!(err, GatewayError::Configuration(_)));
}

// ── 2. config_rejects_empty_shared_secret ──────────────────────────────────

#[test]
fn config_rejects_empty_shared_secret() {
    let err = GatewayConfig::new("E1", "", Mode::Live).unwrap_err();
    assert!(matches!(err, GatewayError::Configuration(_)));
}

// ── 3. mode_selects_endpoint ───────────────────────────────────────────────

#[test]
fn mode_selects_endpoint() {
    assert_eq!(
        Mode::Sandbox.endpoint(),
        "https://checkout.testdrive.klarna.com/checkout/orders"
    );
    assert_eq!(
        Mode::Live.endpoint(),
        "https://checkout.klarna.com/checkout/orders"
    );

    let config = GatewayConfig::new("E1", "S1", Mode::Live).unwrap();
    assert_eq!(config.endpoint(), Mode::Live.endpoint());
}

// ── 4. mode_parses_only_its_enum ───────────────────────────────────────────

#[test]
fn mode_parses_only_its_enum() {
    assert_eq!(Mode::try_from("sandbox").unwrap(), Mode::Sandbox);
    assert_eq!(Mode::try_from("live").unwrap(), Mode::Live);

    let err = Mode::try_from("staging").unwrap_err();
    assert!(matches!(err, GatewayError::Configuration(_)));
}

// ── 5. require_keys_lists_missing_in_required_order ────────────────────────

#[test]
fn require_keys_lists_missing_in_required_order() {
    let input = BTreeMap::from([("locale".to_string(), "de-DE".to_string())]);

    let err = require_keys(&input, &["purchase_country", "locale", "merchant_reference"])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "validation: required fields are missing: purchase_country, merchant_reference"
    );
}

// ── 6. require_keys_accepts_complete_input ─────────────────────────────────

#[test]
fn require_keys_accepts_complete_input() {
    let input = BTreeMap::from([
        ("purchase_country".to_string(), "DE".to_string()),
        ("locale".to_string(), "de-DE".to_string()),
    ]);

    assert!(require_keys(&input, &["purchase_country", "locale"]).is_ok());
}
