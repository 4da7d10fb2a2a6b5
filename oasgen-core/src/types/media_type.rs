use crate::types::{Extensions, JsonSchema};

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MediaType {
    /// Left as written in the document; `$ref` targets are not followed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<JsonSchema>,

    #[serde(flatten, default)]
    pub extensions: Extensions,
}
