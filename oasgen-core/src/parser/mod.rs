use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::decode::value_kind;
use crate::error::{MalformedDocumentError, ParseError};
use crate::types::{Info, OpenApiDocument, PathItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
    Auto,
}

/// What the document decoder does with a path item that fails to decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PathPolicy {
    /// Fail the whole document with the first malformed path item.
    #[default]
    Abort,
    /// Leave the path out of the model and report it in [`ParsedDocument::skipped`].
    Skip,
}

#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    pub path_policy: PathPolicy,
}

#[derive(Debug, Clone)]
pub struct ParsedDocument {
    pub document: OpenApiDocument,
    pub format: DocumentFormat,
    /// Path items dropped under [`PathPolicy::Skip`]; always empty with `Abort`.
    pub skipped: Vec<MalformedDocumentError>,
}

pub fn parse_document_str(
    input: &str,
    format: DocumentFormat,
    options: &DecodeOptions,
) -> Result<ParsedDocument, ParseError> {
    let (tree, format) = match format {
        DocumentFormat::Json => (serde_json::from_str::<Value>(input)?, format),
        DocumentFormat::Yaml => (parse_yaml_tree(input)?, format),
        DocumentFormat::Auto => parse_tree_auto(input)?,
    };
    tracing::debug!(?format, "parsed document tree");

    let (document, skipped) = decode_document(&tree, options)?;
    Ok(ParsedDocument {
        document,
        format,
        skipped,
    })
}

/// Reads and decodes a document, picking the format from the file extension.
pub fn parse_document_file(
    path: &Path,
    options: &DecodeOptions,
) -> Result<ParsedDocument, ParseError> {
    let content = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let format = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => DocumentFormat::Json,
        Some("yaml" | "yml") => DocumentFormat::Yaml,
        _ => DocumentFormat::Auto,
    };
    parse_document_str(&content, format, options)
}

// YAML goes through its own value type first so that non-string keys
// (`200:` under `responses`) become strings in the JSON tree, and so that
// `<<` merge keys are expanded before path items are read.
fn parse_yaml_tree(input: &str) -> Result<Value, ParseError> {
    let mut yaml = serde_yaml::from_str::<serde_yaml::Value>(input)?;
    yaml.apply_merge()?;
    serde_json::to_value(yaml).map_err(ParseError::YamlTree)
}

fn parse_tree_auto(input: &str) -> Result<(Value, DocumentFormat), ParseError> {
    // Heuristic: JSON always starts with `{` or `[` after trimming.
    let trimmed = input.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return match serde_json::from_str::<Value>(input) {
            Ok(tree) => Ok((tree, DocumentFormat::Json)),
            // Report the JSON error since the input looked like JSON.
            Err(e) => parse_yaml_tree(input)
                .map(|tree| (tree, DocumentFormat::Yaml))
                .map_err(|_| ParseError::Json(e)),
        };
    }

    match parse_yaml_tree(input) {
        Ok(tree) => Ok((tree, DocumentFormat::Yaml)),
        Err(e) => serde_json::from_str::<Value>(input)
            .map(|tree| (tree, DocumentFormat::Json))
            .map_err(|_| e),
    }
}

fn decode_document(
    tree: &Value,
    options: &DecodeOptions,
) -> Result<(OpenApiDocument, Vec<MalformedDocumentError>), ParseError> {
    let Some(root) = tree.as_object() else {
        return Err(ParseError::root(
            "$",
            format!("expected a mapping, found {}", value_kind(tree)),
        ));
    };

    let openapi = match root.get("openapi") {
        Some(Value::String(v)) => v.clone(),
        Some(other) => {
            return Err(ParseError::root(
                "openapi",
                format!("expected a string, found {}", value_kind(other)),
            ))
        }
        None => return Err(ParseError::root("openapi", "missing required key")),
    };

    let info = match root.get("info") {
        Some(node) => {
            Info::deserialize(node).map_err(|e| ParseError::root("info", e.to_string()))?
        }
        None => return Err(ParseError::root("info", "missing required key")),
    };

    let mut paths = BTreeMap::new();
    let mut skipped = Vec::new();
    if let Some(node) = root.get("paths") {
        let Some(entries) = node.as_object() else {
            return Err(ParseError::root(
                "paths",
                format!("expected a mapping, found {}", value_kind(node)),
            ));
        };
        for (template, item) in entries {
            match PathItem::decode(template, item) {
                Ok(path_item) => {
                    paths.insert(template.clone(), path_item);
                }
                Err(err) => match options.path_policy {
                    PathPolicy::Abort => return Err(err.into()),
                    PathPolicy::Skip => {
                        tracing::warn!(
                            path = %err.path,
                            key = %err.key,
                            "skipping malformed path item: {}",
                            err.message
                        );
                        skipped.push(err);
                    }
                },
            }
        }
    }

    let document = OpenApiDocument {
        openapi,
        info,
        paths,
        components: root.get("components").cloned(),
    };
    Ok((document, skipped))
}
