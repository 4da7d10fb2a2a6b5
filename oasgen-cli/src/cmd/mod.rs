pub mod operations;
pub mod paths;
pub mod validate;

use std::path::Path;

use oasgen_core::{parse_document_file, ParseError, ParsedDocument};

use crate::exit_codes;
use crate::output::print_error;
use crate::{DecodeArgs, OutputArgs};

/// Reads and decodes `path`, reporting failures and mapping them to an exit code.
pub(crate) fn load_document(
    path: &Path,
    output: &OutputArgs,
    decode: &DecodeArgs,
) -> Result<ParsedDocument, i32> {
    match parse_document_file(path, &decode.options()) {
        Ok(parsed) => {
            tracing::info!(
                path = %path.display(),
                format = ?parsed.format,
                paths = parsed.document.paths.len(),
                skipped = parsed.skipped.len(),
                "loaded document"
            );
            Ok(parsed)
        }
        Err(e @ ParseError::Io { .. }) => {
            print_error(output.format, output.quiet, &e.to_string());
            Err(exit_codes::RUNTIME_ERROR)
        }
        Err(e) => {
            print_error(output.format, output.quiet, &e.to_string());
            Err(exit_codes::VALIDATION_FAILED)
        }
    }
}
