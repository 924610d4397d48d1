use anyhow::Result;
use std::path::PathBuf;
use crate::cli::{OutputFormat, ToggleArg};
use license_notice::config::load_config;
use license_notice::render::{format_sections_text, settings_section};
use license_notice::store::{flip_toggle, load_license_config, Toggle};

pub fn handle_settings(
    license: Option<PathBuf>,
    toggle: Option<ToggleArg>,
    format: Option<OutputFormat>,
    quiet: bool,
) -> Result<()> {
    let config = load_config()?;
    let path = config.license_path(license);

    if let Some(toggle) = toggle {
        let toggle = match toggle {
            ToggleArg::BotEnabled => Toggle::BotEnabled,
            ToggleArg::AutoPost => Toggle::AutoPost,
            ToggleArg::RequireConfirmation => Toggle::RequireConfirmation,
        };
        let enabled = flip_toggle(&path, toggle)?;
        if !quiet {
            eprintln!("{} is now {}", toggle.key(), if enabled { "on" } else { "off" });
        }
    }

    let license = load_license_config(&path)?;
    let section = settings_section(&license, &config.branding);

    if !quiet {
        match OutputFormat::resolve(format, config.format.as_deref()) {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&section)?),
            OutputFormat::Text => println!("{}", format_sections_text(&[section])),
        }
    }

    Ok(())
}
