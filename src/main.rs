// Entrypoint for the CLI application.
// - Keeps `main` small: parse arguments, set up logging, build the
//   context and hand off to `commands::run`.
// - Acts as the error boundary: any failure is printed to stderr and
//   turned into a nonzero exit code.

use clap::Parser;
use std::io;
use std::process::ExitCode;

use whatphone::{
    cli::Cli,
    commands::{self, Context},
    ui,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    ui::init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = Context::new()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::run(cli, &ctx, &mut out)
}
