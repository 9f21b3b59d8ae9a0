pub mod export;
pub mod init;
pub mod show;

use anyhow::{Context, Result};
use site_nav_core::{SiteNavigation, parse_navigation_toml, site_navigation};
use std::path::Path;

/// Navigation from `config` when given, otherwise the built-in one
pub fn load_navigation(config: Option<&Path>) -> Result<SiteNavigation> {
    match config {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!(
                    "{} not found\nRun 'site-nav init <dir>' to create one",
                    path.display()
                );
            }
            parse_navigation_toml(path)
                .with_context(|| format!("Failed to parse {}", path.display()))
        }
        None => {
            tracing::debug!("no config given, using built-in navigation");
            Ok(site_navigation().clone())
        }
    }
}
