use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OasgenError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("YAML document has no JSON equivalent: {0}")]
    YamlTree(#[source] serde_json::Error),
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid document root: key '{key}': {message}")]
    Root { key: String, message: String },
    #[error(transparent)]
    Malformed(#[from] MalformedDocumentError),
}

impl ParseError {
    pub(crate) fn root(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Root {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// A path item node whose recognized key holds a value of the wrong shape.
///
/// `key` is one of `get`, `post`, `put`, `patch`, `delete`, `parameters`, or
/// `$` when the node itself is not a mapping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed path item '{path}': key '{key}': {message}")]
pub struct MalformedDocumentError {
    pub path: String,
    pub key: String,
    pub message: String,
}

impl MalformedDocumentError {
    pub fn new(
        path: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
#[error("openapi document failed validation ({violations_len} violations)")]
pub struct ValidationError {
    pub violations: Vec<Violation>,
    violations_len: usize,
}

impl ValidationError {
    pub fn new(violations: Vec<Violation>) -> Self {
        let violations_len = violations.len();
        Self {
            violations,
            violations_len,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}
