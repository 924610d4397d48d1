use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::render::RenderArgs;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries rendered output; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Render {
            license,
            author,
            commercial_allowed,
            no_commercial_allowed,
            no_appendix,
            title,
            footer,
            format,
            output,
        } => commands::handle_render(
            RenderArgs {
                license,
                author,
                commercial_allowed,
                no_commercial_allowed,
                no_appendix,
                title,
                footer,
                format,
                output,
            },
            cli.quiet,
        ),
        Commands::Settings { license, toggle, format } => {
            commands::handle_settings(license, toggle, format, cli.quiet)
        }
        Commands::Catalog { kind, filter, format } => {
            commands::handle_catalog(kind, filter, format, cli.quiet)
        }
        Commands::Init { preset, license } => commands::handle_init(preset, license, cli.quiet),
        Commands::Config { show, validate } => commands::handle_config(show, validate, cli.quiet),
    }
}
