use std::path::PathBuf;

use clap::Subcommand;
use oasgen_core::HttpMethod;

use crate::args::*;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decode and validate a document.
    Validate {
        path: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
        #[command(flatten)]
        decode: DecodeArgs,
    },
    /// List path templates and the methods each declares.
    Paths {
        path: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
        #[command(flatten)]
        decode: DecodeArgs,
    },
    /// Show operations with their effective parameter lists.
    Operations {
        path: PathBuf,
        /// Only operations under this path template.
        #[arg(long = "path", value_name = "TEMPLATE")]
        template: Option<String>,
        /// Only operations for this method (get, post, put, patch, delete).
        #[arg(long)]
        method: Option<HttpMethod>,
        #[command(flatten)]
        output: OutputArgs,
        #[command(flatten)]
        decode: DecodeArgs,
    },
}
