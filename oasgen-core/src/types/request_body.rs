use std::collections::BTreeMap;

use crate::types::{Extensions, MediaType};

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RequestBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub content: BTreeMap<String, MediaType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(flatten, default)]
    pub extensions: Extensions,
}

impl RequestBody {
    /// Content types in sorted order.
    pub fn content_types(&self) -> Vec<String> {
        self.content.keys().cloned().collect()
    }
}
