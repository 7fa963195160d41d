use {super::error::GatewayError, std::collections::BTreeMap};

/// Check a per-call input map for required keys. Fails with a validation
/// error naming exactly the absent keys, in the order `required` lists
/// them. Shared by every lifecycle operation that takes a map.
pub fn require_keys(
    input: &BTreeMap<String, String>,
    required: &[&str],
) -> Result<(), GatewayError> {
    let missing: Vec<&str> = required
        .iter()
        .filter(|key| !input.contains_key(**key))
        .copied()
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(GatewayError::missing_fields(&missing))
    }
}
