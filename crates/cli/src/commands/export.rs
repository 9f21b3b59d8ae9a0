use anyhow::{Context, Result};
use clap::ValueEnum;
use site_nav_core::SiteNavigation;
use std::fs;
use std::path::PathBuf;

use super::load_navigation;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Json,
    Toml,
}

/// Serialize the navigation for the template layer.
///
/// Writes to `output` when given, otherwise to stdout with nothing else
/// printed so the result can be piped.
pub async fn run(
    config: Option<PathBuf>,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let nav = load_navigation(config.as_deref())?;
    let rendered = render(&nav, format)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory {}", parent.display())
                })?;
            }
            fs::write(&path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("✓ Exported navigation to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn render(nav: &SiteNavigation, format: ExportFormat) -> Result<String> {
    let mut rendered = match format {
        ExportFormat::Json => {
            serde_json::to_string_pretty(nav).context("Failed to serialize navigation as JSON")?
        }
        ExportFormat::Toml => {
            toml::to_string_pretty(nav).context("Failed to serialize navigation as TOML")?
        }
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}
