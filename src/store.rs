use std::fs;
use std::path::Path;
use anyhow::{Context, Result};
use tracing::info;
use crate::license::LicenseConfig;

/// One of the three independent switches on an author's settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    BotEnabled,
    AutoPost,
    RequireConfirmation,
}

impl Toggle {
    pub fn key(self) -> &'static str {
        match self {
            Toggle::BotEnabled => "bot_enabled",
            Toggle::AutoPost => "auto_post",
            Toggle::RequireConfirmation => "require_confirmation",
        }
    }

    pub fn get(self, config: &LicenseConfig) -> bool {
        match self {
            Toggle::BotEnabled => config.bot_enabled,
            Toggle::AutoPost => config.auto_post,
            Toggle::RequireConfirmation => config.require_confirmation,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum LicensePreset {
    CcBy,
    CcByNcSa,
    Mit,
    Custom,
}

fn get_preset_content(preset: LicensePreset) -> &'static str {
    match preset {
        LicensePreset::CcBy => include_str!("../presets/cc-by.toml"),
        LicensePreset::CcByNcSa => include_str!("../presets/cc-by-nc-sa.toml"),
        LicensePreset::Mit => include_str!("../presets/mit.toml"),
        LicensePreset::Custom => include_str!("../presets/custom.toml"),
    }
}

pub fn load_license_config<P: AsRef<Path>>(path: P) -> Result<LicenseConfig> {
    let path = path.as_ref();

    if !path.exists() {
        anyhow::bail!(
            "License file not found: {}. Run 'license-notice init <preset>' first.",
            path.display()
        );
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read license file: {}", path.display()))?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse license file: {}", path.display()))
}

pub fn save_license_config<P: AsRef<Path>>(config: &LicenseConfig, path: P) -> Result<()> {
    let content = toml::to_string_pretty(config)
        .context("Failed to serialize license config")?;

    fs::write(&path, content)
        .with_context(|| format!("Failed to write license file: {}", path.as_ref().display()))?;

    Ok(())
}

fn read_document(path: &Path) -> Result<toml_edit::DocumentMut> {
    if !path.exists() {
        return Ok(toml_edit::DocumentMut::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read license file: {}", path.display()))?;

    content
        .parse::<toml_edit::DocumentMut>()
        .with_context(|| format!("Failed to parse license file: {}", path.display()))
}

/// Set a toggle in place; comments and everything else in the file are kept.
pub fn set_toggle<P: AsRef<Path>>(path: P, toggle: Toggle, value: bool) -> Result<()> {
    let path = path.as_ref();
    let mut doc = read_document(path)?;

    doc[toggle.key()] = toml_edit::value(value);

    fs::write(path, doc.to_string())
        .with_context(|| format!("Failed to write license file: {}", path.display()))?;
    info!(toggle = toggle.key(), value, "updated license settings");

    Ok(())
}

/// Flip a toggle and return its new value.
pub fn flip_toggle<P: AsRef<Path>>(path: P, toggle: Toggle) -> Result<bool> {
    let current = toggle.get(&load_license_config(&path)?);
    set_toggle(path, toggle, !current)?;
    Ok(!current)
}

/// Write a preset's `[license_details]` into the license file, creating it if needed.
pub fn init_license_file<P: AsRef<Path>>(path: P, preset: LicensePreset) -> Result<()> {
    let path = path.as_ref();
    let mut doc = read_document(path)?;

    let preset_doc = get_preset_content(preset)
        .parse::<toml_edit::DocumentMut>()
        .context("Invalid preset")?;
    let details = preset_doc
        .get("license_details")
        .ok_or_else(|| anyhow::anyhow!("Preset has no [license_details] table"))?;

    doc["license_details"] = details.clone();

    fs::write(path, doc.to_string())
        .with_context(|| format!("Failed to write license file: {}", path.display()))?;
    info!(path = %path.display(), ?preset, "initialised license file");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license::LicenseDetails;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("license.toml");

        let config = LicenseConfig {
            auto_post: true,
            ..LicenseConfig::with_details(LicenseDetails {
                attribution: Some("alice".to_string()),
                ..LicenseDetails::of_type("CC BY-ND 4.0")
            })
        };
        save_license_config(&config, &path)?;

        assert_eq!(load_license_config(&path)?, config);
        Ok(())
    }

    #[test]
    fn test_missing_file_points_to_init() {
        let temp_dir = TempDir::new().unwrap();

        let err = load_license_config(temp_dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("license-notice init"));
    }

    #[test]
    fn test_flip_toggle_keeps_comments() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("license.toml");
        fs::write(&path, "# alice's settings\nbot_enabled = true\n\n[license_details]\ntype = \"custom\" # hand-written\n")?;

        assert!(!flip_toggle(&path, Toggle::BotEnabled)?);
        assert!(flip_toggle(&path, Toggle::AutoPost)?);

        let content = fs::read_to_string(&path)?;
        assert!(content.contains("# alice's settings"));
        assert!(content.contains("# hand-written"));

        let config = load_license_config(&path)?;
        assert!(!config.bot_enabled);
        assert!(config.auto_post);
        assert!(config.require_confirmation);
        Ok(())
    }

    #[test]
    fn test_init_creates_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("license.toml");

        init_license_file(&path, LicensePreset::CcByNcSa)?;

        let config = load_license_config(&path)?;
        assert_eq!(config.license_details.license_type(), "CC BY-NC-SA 4.0");
        assert_eq!(config.license_details.notes(), None);
        Ok(())
    }

    #[test]
    fn test_init_replaces_details_only() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("license.toml");
        fs::write(&path, "auto_post = true\n\n[license_details]\ntype = \"MIT\"\n")?;

        init_license_file(&path, LicensePreset::Custom)?;

        let config = load_license_config(&path)?;
        assert!(config.auto_post);
        assert_eq!(config.license_details.license_type(), "custom");
        assert_eq!(config.license_details.commercial(), "禁止");
        Ok(())
    }

    #[test]
    fn test_all_presets_parse() {
        for preset in [
            LicensePreset::CcBy,
            LicensePreset::CcByNcSa,
            LicensePreset::Mit,
            LicensePreset::Custom,
        ] {
            let config: LicenseConfig = toml::from_str(get_preset_content(preset)).unwrap();
            assert_ne!(config.license_details.attribution(), crate::license::UNSET);
        }
    }
}
