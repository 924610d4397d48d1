use anyhow::Result;
use license_notice::config::{get_config_file_path, load_config};

pub fn handle_config(show: bool, validate: bool, quiet: bool) -> Result<()> {
    if !show && !validate {
        if !quiet {
            eprintln!("Use --show or --validate");
        }
        std::process::exit(1);
    }

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            if !quiet {
                eprintln!("❌ {} is invalid: {:#}", get_config_file_path().display(), e);
            }
            std::process::exit(1);
        }
    };

    if quiet {
        return Ok(());
    }

    if show {
        println!("{}", serde_json::to_string_pretty(&config)?);
    }
    if validate {
        let source = get_config_file_path();
        if source.exists() {
            println!("✅ {} is valid", source.display());
        } else {
            println!("✅ No {} found, using defaults", source.display());
        }
    }

    Ok(())
}
