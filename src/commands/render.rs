use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use crate::cli::{AuthorArgs, OutputFormat};
use license_notice::config::load_config;
use license_notice::render::format_sections_text;
use license_notice::store::load_license_config;
use license_notice::{AuthorInfo, Catalog, LicensePresenter, RenderOptions};

pub struct RenderArgs {
    pub license: Option<PathBuf>,
    pub author: AuthorArgs,
    pub commercial_allowed: bool,
    pub no_commercial_allowed: bool,
    pub no_appendix: bool,
    pub title: Option<String>,
    pub footer: Option<String>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

pub fn handle_render(args: RenderArgs, quiet: bool) -> Result<()> {
    let config = load_config()?;

    let commercial_use_allowed = commercial_policy(
        args.commercial_allowed,
        args.no_commercial_allowed,
        config.commercial_use_allowed,
    );
    let license = load_license_config(config.license_path(args.license))?;

    let author = AuthorInfo {
        id: args.author.author_id,
        display_name: args
            .author
            .display_name
            .unwrap_or_else(|| args.author.author_name.clone()),
        name: args.author.author_name,
        avatar_url: args.author.avatar_url,
    };
    let options = RenderOptions {
        title_override: args.title,
        footer_override: args.footer,
        include_appendix: !args.no_appendix,
    };

    let presenter = LicensePresenter::new(Catalog::builtin(), config.branding.clone());
    let sections = presenter.render(&license, &author, commercial_use_allowed, &options);

    let output_content = match OutputFormat::resolve(args.format, config.format.as_deref()) {
        OutputFormat::Json => serde_json::to_string_pretty(&sections)?,
        OutputFormat::Text => format_sections_text(&sections),
    };

    match args.output {
        Some(path) => fs::write(path, output_content)?,
        None => {
            if !quiet {
                println!("{}", output_content);
            }
        }
    }

    Ok(())
}

/// CLI flags override the configured policy in either direction.
fn commercial_policy(allow_flag: bool, forbid_flag: bool, configured: bool) -> bool {
    if forbid_flag {
        false
    } else {
        allow_flag || configured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commercial_policy_flags_override_config() {
        assert!(!commercial_policy(false, false, false));
        assert!(commercial_policy(false, false, true));
        assert!(commercial_policy(true, false, false));
        assert!(!commercial_policy(false, true, true));
    }
}
