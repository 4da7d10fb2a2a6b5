use serde::Deserialize;
use serde_json::Value;

use crate::error::MalformedDocumentError;
use crate::types::{HttpMethod, Method, Parameter, PathItem};

const PARAMETERS_KEY: &str = "parameters";
const UNSUPPORTED_REF: &str = "$ref parameters are not supported (references are not resolved)";

impl PathItem {
    /// Decodes the node found at `paths.<template>`.
    ///
    /// Only `get`, `post`, `put`, `patch`, `delete` and `parameters` are read;
    /// every other key is ignored. A missing key is never an error, a present
    /// key with the wrong shape always is.
    pub fn decode(template: &str, node: &Value) -> Result<Self, MalformedDocumentError> {
        let Some(obj) = node.as_object() else {
            return Err(MalformedDocumentError::new(
                template,
                "$",
                format!("expected a mapping, found {}", value_kind(node)),
            ));
        };

        let mut item = PathItem::default();
        for method in HttpMethod::ALL {
            if let Some(value) = obj.get(method.key()) {
                *item.slot_mut(method) = Some(decode_method(template, method, value)?);
            }
        }

        if let Some(value) = obj.get(PARAMETERS_KEY) {
            item.parameters = decode_parameters(template, value)?;
        }

        tracing::debug!(
            path = template,
            operations = item.operations().count(),
            parameters = item.parameters.len(),
            "decoded path item"
        );
        Ok(item)
    }
}

fn decode_method(
    template: &str,
    method: HttpMethod,
    value: &Value,
) -> Result<Method, MalformedDocumentError> {
    if !value.is_object() {
        return Err(MalformedDocumentError::new(
            template,
            method.key(),
            format!("expected an operation mapping, found {}", value_kind(value)),
        ));
    }
    if let Some(idx) = value
        .get(PARAMETERS_KEY)
        .and_then(Value::as_array)
        .and_then(|items| items.iter().position(is_reference))
    {
        return Err(MalformedDocumentError::new(
            template,
            method.key(),
            format!("parameters item {idx}: {UNSUPPORTED_REF}"),
        ));
    }
    Method::deserialize(value)
        .map_err(|e| MalformedDocumentError::new(template, method.key(), e.to_string()))
}

fn decode_parameters(
    template: &str,
    value: &Value,
) -> Result<Vec<Parameter>, MalformedDocumentError> {
    let Some(items) = value.as_array() else {
        return Err(MalformedDocumentError::new(
            template,
            PARAMETERS_KEY,
            format!("expected a sequence of parameters, found {}", value_kind(value)),
        ));
    };

    items
        .iter()
        .enumerate()
        .map(|(idx, node)| {
            if is_reference(node) {
                return Err(MalformedDocumentError::new(
                    template,
                    PARAMETERS_KEY,
                    format!("item {idx}: {UNSUPPORTED_REF}"),
                ));
            }
            Parameter::deserialize(node).map_err(|e| {
                MalformedDocumentError::new(template, PARAMETERS_KEY, format!("item {idx}: {e}"))
            })
        })
        .collect()
}

fn is_reference(node: &Value) -> bool {
    node.get("$ref").is_some()
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
