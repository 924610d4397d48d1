use anyhow::{Context, Result};
use glob::Pattern;
use serde::Serialize;
use crate::cli::{CatalogKind, OutputFormat};
use license_notice::config::load_config;
use license_notice::{Catalog, LicenseKind};

#[derive(Debug, Serialize)]
struct CatalogEntry<'a> {
    name: &'a str,
    kind: LicenseKind,
    url: &'a str,
}

pub fn handle_catalog(
    kind: Option<CatalogKind>,
    filter: Option<String>,
    format: Option<OutputFormat>,
    quiet: bool,
) -> Result<()> {
    let config = load_config()?;
    let catalog = Catalog::builtin();

    let pattern = filter
        .as_deref()
        .map(Pattern::new)
        .transpose()
        .context("Invalid --filter pattern")?;

    let entries = list_entries(&catalog, kind, pattern.as_ref());

    if quiet {
        return Ok(());
    }

    match OutputFormat::resolve(format, config.format.as_deref()) {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Text => {
            if entries.is_empty() {
                println!("No licenses match.");
            }
            for entry in &entries {
                let tag = match entry.kind {
                    LicenseKind::CreativeCommons => "CC",
                    _ => "软件",
                };
                println!("{:<18} {:<4} {}", entry.name, tag, entry.url);
            }
        }
    }

    Ok(())
}

fn list_entries<'a>(
    catalog: &'a Catalog,
    kind: Option<CatalogKind>,
    pattern: Option<&Pattern>,
) -> Vec<CatalogEntry<'a>> {
    let wanted = |name: &str| pattern.map_or(true, |p| p.matches(name));
    let mut entries = Vec::new();

    if !matches!(kind, Some(CatalogKind::Software)) {
        for (name, license) in catalog.cc_licenses() {
            if wanted(name.as_str()) {
                entries.push(CatalogEntry {
                    name,
                    kind: LicenseKind::CreativeCommons,
                    url: &license.url,
                });
            }
        }
    }

    if !matches!(kind, Some(CatalogKind::Cc)) {
        for (name, license) in catalog.software_licenses() {
            if wanted(name.as_str()) {
                entries.push(CatalogEntry {
                    name,
                    kind: LicenseKind::Software,
                    url: &license.url,
                });
            }
        }
    }

    entries
}
