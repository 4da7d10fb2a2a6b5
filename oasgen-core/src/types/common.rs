use std::collections::BTreeMap;

pub type AnyValue = serde_json::Value;
pub type JsonSchema = serde_json::Value;

/// Object members the model does not interpret (`x-...` extensions, and fields
/// such as `servers` or `callbacks` that code generation does not consume).
///
/// They are kept so that re-encoding a decoded object loses nothing.
pub type Extensions = BTreeMap<String, serde_json::Value>;

pub(crate) fn is_false(v: &bool) -> bool {
    !*v
}
