use adapt_types::value::CairoValue;

/// Builds a [CairoValue] from a JSON literal.
pub fn value(raw: serde_json::Value) -> CairoValue {
    CairoValue::try_from(raw).unwrap()
}

/// Renders adapted calldata the way the wire returns it: space-separated.
pub fn as_raw_response(adapted: &[String]) -> String {
    adapted.join(" ")
}
