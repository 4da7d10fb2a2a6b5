use clap::Parser;

mod args;
mod cmd;
mod commands;
mod exit_codes;
mod logging;
mod output;

pub use args::*;
use commands::Command;

#[derive(Debug, Parser)]
#[command(name = "oasgen", version, about = "OpenAPI client generator front end")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(long, short, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let exit_code = run_command(cli.command);
    std::process::exit(exit_code);
}

fn run_command(command: Command) -> i32 {
    match command {
        Command::Validate {
            path,
            output,
            decode,
        } => cmd::validate::validate_cmd(&path, output, decode),
        Command::Paths {
            path,
            output,
            decode,
        } => cmd::paths::paths_cmd(&path, output, decode),
        Command::Operations {
            path,
            template,
            method,
            output,
            decode,
        } => cmd::operations::operations_cmd(&path, template.as_deref(), method, output, decode),
    }
}
