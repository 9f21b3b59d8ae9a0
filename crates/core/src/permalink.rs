//! URL construction for site-internal links.
//!
//! Every internal href handed to the layout goes through [`Permalinks`] so
//! that the base pathname and trailing-slash policy are applied in one place.
//!
//! ```toml
//! [site]
//! site = "https://example.com"
//! base = "/docs"
//! trailing_slash = true
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Slug prefixes that are already complete hrefs
const EXTERNAL_PREFIXES: &[&str] = &["https://", "http://", "://", "#", "javascript:"];

/// `[site]` section of navigation.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PermalinkConfig {
    /// Absolute origin, only needed for canonical URLs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    pub base: String,
    pub trailing_slash: bool,
    pub blog_base: String,
    pub category_base: String,
    pub tag_base: String,
}

impl Default for PermalinkConfig {
    fn default() -> Self {
        Self {
            site: None,
            base: "/".to_string(),
            trailing_slash: false,
            blog_base: "blog".to_string(),
            category_base: "category".to_string(),
            tag_base: "tag".to_string(),
        }
    }
}

/// Logical resource a permalink points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermalinkKind {
    Home,
    Blog,
    Asset,
    Category,
    Tag,
    Post,
    #[default]
    Page,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Permalinks {
    config: PermalinkConfig,
}

impl Permalinks {
    pub fn new(config: PermalinkConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PermalinkConfig {
        &self.config
    }

    /// Build `/a/b` from segments, skipping empty ones.
    ///
    /// No non-empty segment yields `/`, which never gets a trailing slash.
    pub fn create_path(&self, segments: &[&str]) -> String {
        let parts: Vec<&str> = segments
            .iter()
            .map(|s| trim_slash(s))
            .filter(|s| !s.is_empty())
            .collect();

        let mut path = format!("/{}", parts.join("/"));
        if self.config.trailing_slash && !parts.is_empty() {
            path.push('/');
        }
        path
    }

    /// Resolve a slug of the given kind to an href under the base pathname.
    ///
    /// Slugs that are already absolute URLs, fragments or `javascript:` links
    /// are returned unchanged.
    pub fn permalink(&self, slug: &str, kind: PermalinkKind) -> String {
        if EXTERNAL_PREFIXES.iter().any(|p| slug.starts_with(p)) {
            return slug.to_string();
        }

        let path = match kind {
            PermalinkKind::Home => return self.home(),
            PermalinkKind::Blog => return self.blog(),
            PermalinkKind::Asset => return self.asset(slug),
            PermalinkKind::Category => {
                let slug = clean_slug(trim_slash(slug));
                self.create_path(&[self.config.category_base.as_str(), slug.as_str()])
            }
            PermalinkKind::Tag => {
                let slug = clean_slug(trim_slash(slug));
                self.create_path(&[self.config.tag_base.as_str(), slug.as_str()])
            }
            PermalinkKind::Post | PermalinkKind::Page => self.create_path(&[slug]),
        };

        let href = self.create_path(&[self.config.base.as_str(), path.as_str()]);
        debug!(slug, ?kind, %href, "resolved permalink");
        href
    }

    pub fn home(&self) -> String {
        self.permalink("/", PermalinkKind::Page)
    }

    pub fn blog(&self) -> String {
        self.permalink(&self.config.blog_base, PermalinkKind::Page)
    }

    /// Static file under the base pathname. Never gets a trailing slash.
    pub fn asset(&self, path: &str) -> String {
        let parts: Vec<&str> = [self.config.base.as_str(), path]
            .into_iter()
            .map(trim_slash)
            .filter(|s| !s.is_empty())
            .collect();
        format!("/{}", parts.join("/"))
    }

    /// Absolute URL for `path` on the configured site origin
    pub fn canonical(&self, path: &str) -> Result<String> {
        let site = self.config.site.as_deref().ok_or_else(|| {
            Error::InvalidData("canonical URLs need `site.site` to be set".to_string())
        })?;

        let origin = url::Url::parse(site)
            .map_err(|e| Error::InvalidData(format!("Invalid site URL '{}': {}", site, e)))?;
        let mut url = origin
            .join(path)
            .map_err(|e| Error::InvalidData(format!("Invalid path '{}': {}", path, e)))?
            .to_string();

        if !path.is_empty() {
            if self.config.trailing_slash && !url.ends_with('/') {
                url.push('/');
            } else if !self.config.trailing_slash && url.ends_with('/') {
                url.pop();
            }
        }
        Ok(url)
    }
}

/// Strip surrounding whitespace and every leading and trailing `/`
pub fn trim_slash(s: &str) -> &str {
    s.trim().trim_matches('/')
}

/// Slugify each `/`-separated segment
fn clean_slug(text: &str) -> String {
    text.split('/').map(slugify).collect::<Vec<_>>().join("/")
}

fn slugify(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter_map(|c| {
            // ASCII only, other characters are dropped
            if c.is_ascii_alphanumeric() {
                Some(c)
            } else if c.is_whitespace() || c == '-' || c == '_' {
                Some('-')
            } else {
                None
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
