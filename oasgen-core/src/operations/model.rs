use crate::operations::OperationView;
use crate::types::{HttpMethod, ParameterLocation};

/// Owned, serializable form of an [`OperationView`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct OperationSummary {
    pub path: String,
    pub method: HttpMethod,
    pub function_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    pub parameters: Vec<ParameterSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub request_body_content_types: Vec<String>,
    pub response_codes: Vec<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub deprecated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ParameterSummary {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    pub required: bool,
}

impl OperationSummary {
    pub(crate) fn from_view(view: &OperationView<'_>) -> Self {
        let op = view.operation;
        Self {
            path: view.path.to_string(),
            method: view.method,
            function_name: view.function_name(),
            operation_id: op.operation_id.clone(),
            parameters: view
                .parameters
                .iter()
                .map(|p| ParameterSummary {
                    name: p.name.clone(),
                    location: p.location,
                    required: p.is_required(),
                })
                .collect(),
            request_body_content_types: op
                .request_body
                .as_ref()
                .map(|rb| rb.content_types())
                .unwrap_or_default(),
            response_codes: op.responses.keys().cloned().collect(),
            deprecated: op.deprecated,
        }
    }
}
