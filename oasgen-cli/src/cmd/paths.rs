use std::path::Path;

use oasgen_core::HttpMethod;
use serde::Serialize;

use crate::cmd::load_document;
use crate::exit_codes;
use crate::output::{print_result, OutputFormat};
use crate::{DecodeArgs, OutputArgs};

#[derive(Serialize)]
struct PathEntry {
    path: String,
    methods: Vec<HttpMethod>,
    shared_parameters: usize,
}

pub fn paths_cmd(path: &Path, output: OutputArgs, decode: DecodeArgs) -> i32 {
    let parsed = match load_document(path, &output, &decode) {
        Ok(p) => p,
        Err(code) => return code,
    };

    let entries: Vec<PathEntry> = parsed
        .document
        .paths
        .iter()
        .map(|(template, item)| PathEntry {
            path: template.clone(),
            methods: item.operations().map(|(m, _)| m).collect(),
            shared_parameters: item.parameters.len(),
        })
        .collect();

    if output.format == OutputFormat::Text && !output.quiet {
        for e in &entries {
            let methods: Vec<&str> = e.methods.iter().map(|m| m.as_upper()).collect();
            let methods = if methods.is_empty() {
                "-".to_string()
            } else {
                methods.join(",")
            };
            println!("{} {methods}", e.path);
        }
    } else {
        print_result(output.format, output.quiet, &entries);
    }

    exit_codes::SUCCESS
}
