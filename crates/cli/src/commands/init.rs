use anyhow::{Context, Result};
use site_nav_core::navigation::{FOOT_NOTE, default_social_links};
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "navigation.toml";

/// Escape a string for safe inclusion in TOML per TOML v1.0.0 spec
///
/// Handles the required escape sequences for TOML basic strings:
/// - Backslash (\\) -> \\\\
/// - Quote (\") -> \\\"
/// - Backspace (\b) -> \\b
/// - Form feed (\f) -> \\f
/// - Newline (\n) -> \\n
/// - Carriage return (\r) -> \\r
/// - Tab (\t) -> \\t
///
/// The generated file carries commented-out examples, which the toml crate's
/// serializer cannot emit.
///
/// See: https://toml.io/en/v1.0.0#string
fn toml_escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\x08', "\\b")
        .replace('\x0C', "\\f")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Write a navigation.toml reproducing the built-in navigation into `path`
pub async fn run(path: PathBuf, site: Option<String>, force: bool) -> Result<()> {
    println!("Initializing navigation config in: {}", path.display());

    if !path.exists() {
        anyhow::bail!(
            "Directory '{}' does not exist. Create it first: mkdir {}",
            path.display(),
            path.display()
        );
    }

    let config_path = path.join(CONFIG_FILE_NAME);
    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists at {}\nHint: Pass --force to overwrite it",
            CONFIG_FILE_NAME,
            config_path.display()
        );
    }

    let contents = generate_navigation_toml(site.as_deref());
    fs::write(&config_path, contents)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::debug!(path = %config_path.display(), "wrote navigation config");

    println!("✓ Wrote {}", config_path.display());
    println!("\nNext steps:");
    println!("  1. Edit {} (links, social profiles, footnote)", CONFIG_FILE_NAME);
    println!(
        "  2. Export for your templates: site-nav export --config {}",
        config_path.display()
    );

    Ok(())
}

fn generate_navigation_toml(site: Option<&str>) -> String {
    let site_line = match site {
        Some(url) => format!("site = \"{}\"", toml_escape_string(url)),
        None => "# site = \"https://example.com\"  # Needed for canonical URLs".to_string(),
    };

    let mut toml = format!(
        "# Generated by site-nav init\n\
# Edit this file to customize header and footer navigation\n\
\n\
[site]\n\
{site_line}\n\
base = \"/\"\n\
trailing_slash = false\n\
\n\
# Links take either a literal `href` or a permalink reference:\n\
#   permalink = \"/terms\"            -> page under the base path\n\
#   kind = \"home\" | \"blog\"          -> site home or blog index\n\
#   permalink = \"/rss.xml\", kind = \"asset\"\n\
\n\
[[header.links]]\n\
text = \"Home\"\n\
kind = \"home\"\n\
\n\
[[header.links]]\n\
text = \"Blog\"\n\
kind = \"blog\"\n\
\n\
# [[header.actions]]\n\
# text = \"Download\"\n\
# href = \"https://github.com/onwidget/astrowind\"\n\
# target = \"_blank\"\n\
\n\
[footer]\n\
foot_note = \"{foot_note}\"\n\
\n\
# [[footer.groups]]\n\
# title = \"Product\"\n\
# links = [\n\
#     {{ text = \"Features\", href = \"#\" }},\n\
#     {{ text = \"Pricing\", href = \"#\" }},\n\
# ]\n\
\n\
# [[footer.secondary_links]]\n\
# text = \"Terms\"\n\
# permalink = \"/terms\"\n\
\n\
# [[footer.secondary_links]]\n\
# text = \"Privacy Policy\"\n\
# permalink = \"/privacy\"\n",
        foot_note = toml_escape_string(FOOT_NOTE),
    );

    for link in default_social_links() {
        let _ = write!(
            toml,
            "\n[[footer.social_links]]\n\
aria_label = \"{}\"\n\
icon = \"{}\"\n\
href = \"{}\"\n",
            toml_escape_string(&link.aria_label),
            toml_escape_string(&link.icon),
            toml_escape_string(&link.href),
        );
    }

    toml.push_str(
        "\n# [[footer.social_links]]\n\
# aria_label = \"RSS\"\n\
# icon = \"tabler:rss\"\n\
# permalink = \"/rss.xml\"\n\
# kind = \"asset\"\n",
    );

    toml
}

#[cfg(test)]
mod tests {
    use super::*;
    use site_nav_core::{parse_navigation_toml, parse_navigation_toml_str, site_navigation};
    use tempfile::TempDir;

    #[test]
    fn test_toml_escape_string() {
        assert_eq!(toml_escape_string("plain"), "plain");
        assert_eq!(toml_escape_string("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(toml_escape_string("a\\b"), "a\\\\b");
        assert_eq!(toml_escape_string("line\nbreak\ttab"), "line\\nbreak\\ttab");
    }

    #[test]
    fn test_generated_toml_matches_builtin_navigation() {
        let toml = generate_navigation_toml(None);
        let nav = parse_navigation_toml_str(&toml).unwrap();
        assert_eq!(&nav, site_navigation());
    }

    #[test]
    fn test_generated_toml_with_site() {
        let toml = generate_navigation_toml(Some("https://pylebecq.example"));
        assert!(toml.contains("site = \"https://pylebecq.example\""));

        let nav = parse_navigation_toml_str(&toml).unwrap();
        assert_eq!(&nav, site_navigation());
    }

    #[tokio::test]
    async fn test_run_writes_config() {
        let dir = TempDir::new().unwrap();
        run(dir.path().to_path_buf(), None, false).await.unwrap();

        let nav = parse_navigation_toml(dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(nav.footer.social_links.len(), 3);
    }

    #[tokio::test]
    async fn test_run_refuses_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "# mine").unwrap();

        let result = run(dir.path().to_path_buf(), None, false).await;
        assert!(result.unwrap_err().to_string().contains("already exists"));
        assert_eq!(fs::read_to_string(&config_path).unwrap(), "# mine");

        run(dir.path().to_path_buf(), None, true).await.unwrap();
        assert!(
            fs::read_to_string(&config_path)
                .unwrap()
                .contains("[[header.links]]")
        );
    }

    #[tokio::test]
    async fn test_run_requires_existing_directory() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path().join("missing"), None, false).await;
        assert!(result.unwrap_err().to_string().contains("does not exist"));
    }
}
