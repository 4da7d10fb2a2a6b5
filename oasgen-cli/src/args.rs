use clap::Args;
use oasgen_core::{DecodeOptions, PathPolicy};

use crate::output::OutputFormat;

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

#[derive(Debug, Args, Clone)]
pub struct DecodeArgs {
    /// Drop path items that fail to decode instead of rejecting the document.
    #[arg(long)]
    pub skip_malformed: bool,
}

impl DecodeArgs {
    pub fn options(&self) -> DecodeOptions {
        DecodeOptions {
            path_policy: if self.skip_malformed {
                PathPolicy::Skip
            } else {
                PathPolicy::Abort
            },
        }
    }
}
