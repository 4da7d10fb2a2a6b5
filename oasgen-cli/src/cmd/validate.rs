use std::path::Path;

use oasgen_core::Validate;
use serde::Serialize;

use crate::cmd::load_document;
use crate::exit_codes;
use crate::output::{print_result, OutputFormat};
use crate::{DecodeArgs, OutputArgs};

#[derive(Serialize)]
struct ValidateResult {
    valid: bool,
    format: String,
    paths: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    skipped: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

pub fn validate_cmd(path: &Path, output: OutputArgs, decode: DecodeArgs) -> i32 {
    let parsed = match load_document(path, &output, &decode) {
        Ok(p) => p,
        Err(code) => return code,
    };

    let skipped: Vec<String> = parsed.skipped.iter().map(|e| e.to_string()).collect();
    let errors: Vec<String> = match parsed.document.validate() {
        Ok(()) => Vec::new(),
        Err(err) => err
            .violations
            .iter()
            .map(|v| format!("{}: {}", v.path, v.message))
            .collect(),
    };
    let result = ValidateResult {
        valid: errors.is_empty(),
        format: format!("{:?}", parsed.format),
        paths: parsed.document.paths.len(),
        skipped,
        errors,
    };

    if output.format == OutputFormat::Text && !output.quiet {
        if result.valid {
            println!(
                "ok: valid OpenAPI {} document ({:?}, {} paths)",
                parsed.document.openapi, parsed.format, result.paths
            );
        } else {
            eprintln!("error: validation failed");
            for e in &result.errors {
                eprintln!("- {e}");
            }
        }
        for s in &result.skipped {
            eprintln!("skipped: {s}");
        }
    } else {
        print_result(output.format, output.quiet, &result);
    }

    if result.valid {
        exit_codes::SUCCESS
    } else {
        exit_codes::VALIDATION_FAILED
    }
}
