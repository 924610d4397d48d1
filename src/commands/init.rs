use anyhow::Result;
use std::path::PathBuf;
use crate::cli::PresetArg;
use license_notice::config::load_config;
use license_notice::store::{init_license_file, LicensePreset};

pub fn handle_init(preset: PresetArg, license: Option<PathBuf>, quiet: bool) -> Result<()> {
    let config = load_config()?;
    let path = config.license_path(license);

    let preset = match preset {
        PresetArg::CcBy => LicensePreset::CcBy,
        PresetArg::CcByNcSa => LicensePreset::CcByNcSa,
        PresetArg::Mit => LicensePreset::Mit,
        PresetArg::Custom => LicensePreset::Custom,
    };

    init_license_file(&path, preset)?;

    if !quiet {
        println!("✅ Wrote license details to {}", path.display());
    }

    Ok(())
}
