#![allow(clippy::print_stdout)]

mod args;
mod error;
mod resolve;
mod route;

use clap::Parser;
use proc_exit::prelude::*;

use crate::error::Result;

/// Resolve and inspect static site configuration
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,

    #[command(flatten)]
    color: colorchoice_clap::Color,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
enum Command {
    Resolve(resolve::ResolveArgs),
    Check(resolve::CheckArgs),
    Route(route::RouteArgs),
}

impl Cli {
    fn run(&self) -> Result<()> {
        match &self.command {
            Command::Resolve(cmd) => cmd.run(),
            Command::Check(cmd) => cmd.run(),
            Command::Route(cmd) => cmd.run(),
        }
    }
}

fn main() {
    human_panic::setup_panic!();
    let result = run();
    proc_exit::exit(result);
}

fn run() -> proc_exit::ExitResult {
    let cli = Cli::parse();

    cli.color.write_global();
    let colored_stderr =
        anstream::AutoStream::choice(&std::io::stderr()) != anstream::ColorChoice::Never;
    args::get_logging(cli.verbose.log_level_filter(), colored_stderr).init();

    cli.run()
        .map_err(|e| format!("{e:#}"))
        .with_code(proc_exit::Code::FAILURE)?;

    Ok(())
}
