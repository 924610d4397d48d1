use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "license-notice")]
#[command(about = "Render content-license notices for forum posts")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the license notice for a post
    Render {
        /// License file (default: license.toml)
        #[arg(short, long)]
        license: Option<PathBuf>,

        #[command(flatten)]
        author: AuthorArgs,

        /// Treat the server as allowing commercial use
        #[arg(long)]
        commercial_allowed: bool,

        /// Treat the server as forbidding commercial use, whatever the config says
        #[arg(long, conflicts_with = "commercial_allowed")]
        no_commercial_allowed: bool,

        /// Leave out the effectiveness rules appendix
        #[arg(long)]
        no_appendix: bool,

        /// Replace the main section title
        #[arg(long)]
        title: Option<String>,

        /// Replace the main section footer
        #[arg(long)]
        footer: Option<String>,

        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the settings panel, optionally flipping one switch first
    Settings {
        /// License file (default: license.toml)
        #[arg(short, long)]
        license: Option<PathBuf>,

        /// Switch to flip before showing the panel
        #[arg(long)]
        toggle: Option<ToggleArg>,

        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },
    /// List the built-in license catalog
    Catalog {
        /// Only list one kind of license
        #[arg(long)]
        kind: Option<CatalogKind>,

        /// Glob pattern on license names (e.g. "CC BY-NC*")
        #[arg(long)]
        filter: Option<String>,

        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },
    /// Write a starter license into the license file
    Init {
        /// License preset
        preset: PresetArg,

        /// License file (default: license.toml)
        #[arg(short, long)]
        license: Option<PathBuf>,
    },
    /// Show or validate configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },
}

#[derive(clap::Args)]
pub struct AuthorArgs {
    /// Author's user id
    #[arg(long, default_value_t = 0)]
    pub author_id: u64,

    /// Author's account handle
    #[arg(long, default_value = "author")]
    pub author_name: String,

    /// Author's display name (default: the handle)
    #[arg(long)]
    pub display_name: Option<String>,

    /// Author's avatar URL
    #[arg(long)]
    pub avatar_url: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ToggleArg {
    BotEnabled,
    AutoPost,
    RequireConfirmation,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CatalogKind {
    Cc,
    Software,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PresetArg {
    CcBy,
    CcByNcSa,
    Mit,
    Custom,
}

impl OutputFormat {
    /// CLI flag first, then the configured format, then text.
    pub fn resolve(flag: Option<OutputFormat>, configured: Option<&str>) -> OutputFormat {
        flag.unwrap_or(match configured {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        })
    }
}
