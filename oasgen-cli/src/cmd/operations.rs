use std::path::Path;

use oasgen_core::{collect_operations, HttpMethod, OperationSummary};

use crate::cmd::load_document;
use crate::exit_codes;
use crate::output::{print_error, print_result, OutputFormat};
use crate::{DecodeArgs, OutputArgs};

pub fn operations_cmd(
    path: &Path,
    template: Option<&str>,
    method: Option<HttpMethod>,
    output: OutputArgs,
    decode: DecodeArgs,
) -> i32 {
    let parsed = match load_document(path, &output, &decode) {
        Ok(p) => p,
        Err(code) => return code,
    };
    let doc = &parsed.document;

    if let Some(t) = template {
        if doc.path_item(t).is_none() {
            print_error(
                output.format,
                output.quiet,
                &format!("path '{t}' not found in {}", path.display()),
            );
            return exit_codes::NOT_FOUND;
        }
    }

    let summaries: Vec<OperationSummary> = collect_operations(doc)
        .iter()
        .filter(|op| template.map_or(true, |t| op.path == t))
        .filter(|op| method.map_or(true, |m| op.method == m))
        .map(|op| op.summary())
        .collect();

    if output.format == OutputFormat::Text && !output.quiet {
        for s in &summaries {
            println!("{} {} -> {}", s.method, s.path, s.function_name);
            for p in &s.parameters {
                let required = if p.required { " (required)" } else { "" };
                println!("    {} {}{required}", p.location, p.name);
            }
        }
    } else {
        print_result(output.format, output.quiet, &summaries);
    }

    exit_codes::SUCCESS
}
