use crate::error::{Error, Result};
use crate::navigation::FOOT_NOTE;
use crate::permalink::{PermalinkConfig, PermalinkKind, Permalinks};
use crate::types::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Raw TOML configuration structure
/// This matches the navigation.toml file structure exactly
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    site: PermalinkConfig,
    #[serde(default)]
    header: RawHeader,
    #[serde(default)]
    footer: RawFooter,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawHeader {
    links: Option<Vec<RawLink>>,
    actions: Option<Vec<RawAction>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFooter {
    groups: Option<Vec<RawGroup>>,
    secondary_links: Option<Vec<RawLink>>,
    social_links: Option<Vec<RawSocialLink>>,
    foot_note: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLink {
    text: String,
    href: Option<String>,
    permalink: Option<String>,
    kind: Option<PermalinkKind>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawAction {
    text: String,
    href: Option<String>,
    permalink: Option<String>,
    kind: Option<PermalinkKind>,
    target: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawGroup {
    title: String,
    #[serde(default)]
    links: Vec<RawLink>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSocialLink {
    aria_label: String,
    icon: String,
    href: Option<String>,
    permalink: Option<String>,
    kind: Option<PermalinkKind>,
}

/// Parse navigation.toml from a file path
pub fn parse_navigation_toml<P: AsRef<Path>>(path: P) -> Result<SiteNavigation> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading navigation config");
    let content = fs::read_to_string(path)?;
    parse_navigation_toml_str(&content)
}

/// Parse navigation.toml from a string (useful for testing)
///
/// Sections and fields left out of the file fall back to the built-in
/// navigation, resolved with the file's `[site]` settings.
pub fn parse_navigation_toml_str(content: &str) -> Result<SiteNavigation> {
    let raw: RawConfig = toml::from_str(content)?;
    let permalinks = Permalinks::new(raw.site);
    let builtin = SiteNavigation::build(&permalinks);

    let links = match raw.header.links {
        Some(links) => resolve_links(links, "header.links", &permalinks)?,
        None => builtin.header.links,
    };

    let actions = match raw.header.actions {
        Some(actions) => actions
            .into_iter()
            .enumerate()
            .map(|(i, a)| {
                let field = format!("header.actions[{}]", i);
                Ok(ActionLink {
                    href: resolve_href(a.href, a.permalink, a.kind, &field, &permalinks)?,
                    text: a.text,
                    target: a.target,
                })
            })
            .collect::<Result<Vec<_>>>()?,
        None => builtin.header.actions,
    };

    let groups = match raw.footer.groups {
        Some(groups) => groups
            .into_iter()
            .enumerate()
            .map(|(i, g)| {
                let field = format!("footer.groups[{}].links", i);
                Ok(FooterGroup {
                    links: resolve_links(g.links, &field, &permalinks)?,
                    title: g.title,
                })
            })
            .collect::<Result<Vec<_>>>()?,
        None => builtin.footer.links,
    };

    let secondary_links = match raw.footer.secondary_links {
        Some(links) => resolve_links(links, "footer.secondary_links", &permalinks)?,
        None => builtin.footer.secondary_links,
    };

    let social_links = match raw.footer.social_links {
        Some(links) => links
            .into_iter()
            .enumerate()
            .map(|(i, s)| {
                let field = format!("footer.social_links[{}]", i);
                Ok(SocialLink {
                    href: resolve_href(s.href, s.permalink, s.kind, &field, &permalinks)?,
                    aria_label: s.aria_label,
                    icon: s.icon,
                })
            })
            .collect::<Result<Vec<_>>>()?,
        None => builtin.footer.social_links,
    };

    let navigation = SiteNavigation {
        header: HeaderData { links, actions },
        footer: FooterData {
            links: groups,
            secondary_links,
            social_links,
            foot_note: raw.footer.foot_note.unwrap_or_else(|| FOOT_NOTE.to_string()),
        },
    };

    debug!(
        header_links = navigation.header.links.len(),
        footer_groups = navigation.footer.links.len(),
        social_links = navigation.footer.social_links.len(),
        "navigation config parsed"
    );

    Ok(navigation)
}

fn resolve_links(
    links: Vec<RawLink>,
    field: &str,
    permalinks: &Permalinks,
) -> Result<Vec<NavLink>> {
    links
        .into_iter()
        .enumerate()
        .map(|(i, l)| {
            let field = format!("{}[{}]", field, i);
            Ok(NavLink {
                href: resolve_href(l.href, l.permalink, l.kind, &field, permalinks)?,
                text: l.text,
            })
        })
        .collect()
}

/// Pick the link target: a literal `href`, or a permalink reference.
///
/// `kind` alone is enough for home/blog links; `permalink` alone is a page.
fn resolve_href(
    href: Option<String>,
    permalink: Option<String>,
    kind: Option<PermalinkKind>,
    field: &str,
    permalinks: &Permalinks,
) -> Result<String> {
    match (href, permalink, kind) {
        (Some(href), None, None) => Ok(href),
        (Some(_), _, _) => Err(Error::ConfigParse(format!(
            "'{}' sets both 'href' and a permalink; use one",
            field
        ))),
        (None, None, None) => Err(Error::ConfigParse(format!(
            "'{}' needs either 'href' or 'permalink'/'kind'",
            field
        ))),
        (None, slug, kind) => Ok(permalinks.permalink(
            slug.as_deref().unwrap_or_default(),
            kind.unwrap_or_default(),
        )),
    }
}
