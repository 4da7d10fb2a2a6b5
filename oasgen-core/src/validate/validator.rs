use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ValidationError, Violation};
use crate::types::OpenApiDocument;

use super::rules;

/// Captures the name inside each `{...}` segment of a path template.
pub(crate) static TEMPLATE_PARAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}/]+)\}").expect("valid"));

pub struct Validator {
    violations: Vec<Violation>,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(self.violations))
        }
    }

    pub fn validate_document(&mut self, doc: &OpenApiDocument) {
        rules::document::validate_document(self, doc);
    }

    pub(crate) fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.violations.push(Violation::new(path, message));
    }

    pub(crate) fn validate_spec_version(&mut self, path: &str, version: &str) {
        // 3.0.x and 3.1.x share the Path Item / Operation / Parameter shapes read here.
        let parts: Vec<&str> = version.split('.').collect();
        if parts.len() < 2 {
            self.push(path, "must be a semver-like string (major.minor[.patch])");
            return;
        }
        if parts[0] != "3" || !matches!(parts[1], "0" | "1") {
            self.push(path, "only OpenAPI 3.0.x and 3.1.x documents are supported");
        }
    }

    pub(crate) fn validate_non_empty(&mut self, path: &str, value: &str) {
        if value.trim().is_empty() {
            self.push(path, "must not be empty");
        }
    }
}
