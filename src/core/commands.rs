use std::path::{Path, PathBuf};

use super::display::render_site_list;
use super::scan::list_site_directories;
use super::types::OutputFormat;

use crate::utils::app_config::AppConfig;
use crate::utils::error::Result;

/// Show the configuration file
pub fn config() -> Result<()> {
    let config = AppConfig::fetch()?;
    println!("{:#?}", config);

    Ok(())
}

/// Enumerate site directories under the base path and print them
pub fn sites_list(path: Option<&Path>, format: &OutputFormat) -> Result<()> {
    // Explicit path argument wins over the configured base path
    let base_path: PathBuf = match path {
        Some(path) => path.to_path_buf(),
        None => AppConfig::fetch()?.scan.base_path,
    };

    log::debug!("scanning for sites under {}", base_path.display());

    let sites = list_site_directories(&base_path)?;

    match format {
        OutputFormat::Text => {
            println!("Sites found: {}", render_site_list(&sites));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&sites)?);
        }
    }

    log::debug!("scan finished, {} sites", sites.len());

    Ok(())
}
