use std::collections::BTreeMap;

use crate::types::{AnyValue, Info, PathItem};

/// The decoded document: path templates mapped to their path items.
///
/// `paths` is ordered by template so that walking it is deterministic.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct OpenApiDocument {
    /// The OpenAPI version string (e.g. "3.1.0").
    pub openapi: String,

    pub info: Info,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub paths: BTreeMap<String, PathItem>,

    /// Kept verbatim; schemas and `$ref` targets are resolved downstream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<AnyValue>,
}

impl OpenApiDocument {
    pub fn path_item(&self, template: &str) -> Option<&PathItem> {
        self.paths.get(template)
    }
}
