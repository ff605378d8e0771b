//! ulam binary
//!
//! Usage:
//!   ulam                     Interactive: read targets, print spirals
//!   ulam --renderer <kind>   Choose text, html, code or json output
//!   ulam --at <x> <y>        Print the spiral index at one coordinate

use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ulam_cli::{locate, CliConfig, Command, Session};
use ulam_spiral::ShellGenerator;

fn print_usage() {
    eprintln!("ulam - print square integer spirals");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  ulam                        Read targets from stdin and print each spiral");
    eprintln!("  ulam --renderer <kind>      Output format: text, html, code or json");
    eprintln!("  ulam --at <x> <y>           Print the index at (x, y), origin-relative, +y down");
    eprintln!("  ulam --help                 Show this message");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  ULAM_RENDERER    Default output format (default: text)");
    eprintln!("  ULAM_MAX_TARGET  Largest accepted target (default: 1000000)");
    eprintln!("  RUST_LOG         Log filter, logs go to stderr");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; stdout carries the rendered spirals
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ulam=info,ulam_cli=info,ulam_spiral=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = CliConfig::from_env()?.with_args(std::env::args().skip(1))?;
    tracing::debug!(?config, "starting");

    match config.command {
        Command::Help => print_usage(),
        Command::ValueAt(coord) => locate(&ShellGenerator, coord, &mut io::stdout().lock())?,
        Command::Interactive => {
            let mut session = Session::new(
                io::stdin().lock(),
                io::stdout().lock(),
                ShellGenerator,
                config.renderer.renderer(),
            )
            .with_max_target(config.max_target);
            session.run()?;
        }
    }

    Ok(())
}
