//! Built-in header and footer content.

use crate::permalink::Permalinks;
use crate::types::*;
use std::sync::LazyLock;

/// Footnote shown under the footer, raw HTML
pub const FOOT_NOTE: &str = r#"
    This website and all its content is licensed under a
    <a class="underline dark:text-gray-200" href="https://creativecommons.org/licenses/by-sa/4.0/" alt="Creative Commons Attribution-ShareAlike 4.0 International License">Creative Commons Attribution-ShareAlike 4.0 International License</a>. <br/>
    Built with <a class="underline dark:text-gray-200" href="https://astro.build/" alt="Astro website">Astro</a> and the theme <a class="underline dark:text-gray-200" href="https://astro.build/themes/details/astrowind/" alt="Astrowind website">Astrowind</a>
    made by <a class="underline dark:text-gray-200" href="https://onwidget.com/"> onWidget</a>.
  "#;

static SITE_NAVIGATION: LazyLock<SiteNavigation> =
    LazyLock::new(|| SiteNavigation::build(&Permalinks::default()));

/// Built-in navigation with the default permalink settings, built on first use
pub fn site_navigation() -> &'static SiteNavigation {
    &SITE_NAVIGATION
}

impl SiteNavigation {
    pub fn build(permalinks: &Permalinks) -> Self {
        Self {
            header: HeaderData::build(permalinks),
            footer: FooterData::build(),
        }
    }
}

impl HeaderData {
    pub fn build(permalinks: &Permalinks) -> Self {
        Self {
            links: vec![
                NavLink::new("Home", permalinks.home()),
                NavLink::new("Blog", permalinks.blog()),
            ],
            actions: vec![],
        }
    }
}

impl FooterData {
    pub fn build() -> Self {
        Self {
            links: vec![],
            secondary_links: vec![],
            social_links: default_social_links(),
            foot_note: FOOT_NOTE.to_string(),
        }
    }
}

pub fn default_social_links() -> Vec<SocialLink> {
    vec![
        SocialLink::new("X", "tabler:brand-x", "https://twitter.com/pylebecq"),
        SocialLink::new(
            "Github",
            "tabler:brand-github",
            "https://github.com/pylebecq",
        ),
        SocialLink::new(
            "LinkedIn",
            "tabler:brand-linkedin",
            "https://www.linkedin.com/in/pierreyveslebecq/",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permalink::PermalinkConfig;

    #[test]
    fn test_header_links_are_home_and_blog() {
        let permalinks = Permalinks::default();
        let nav = site_navigation();

        let labels: Vec<&str> = nav.header.links.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(labels, ["Home", "Blog"]);
        assert_eq!(nav.header.links[0].href, permalinks.home());
        assert_eq!(nav.header.links[1].href, permalinks.blog());
        assert!(nav.header.actions.is_empty());
    }

    #[test]
    fn test_header_follows_permalink_config() {
        let permalinks = Permalinks::new(PermalinkConfig {
            base: "/writing".to_string(),
            trailing_slash: true,
            ..PermalinkConfig::default()
        });
        let header = HeaderData::build(&permalinks);
        assert_eq!(header.links[0].href, "/writing/");
        assert_eq!(header.links[1].href, "/writing/blog/");
    }

    #[test]
    fn test_social_links() {
        let social = &site_navigation().footer.social_links;
        let labels: Vec<&str> = social.iter().map(|l| l.aria_label.as_str()).collect();
        assert_eq!(labels, ["X", "Github", "LinkedIn"]);
        assert!(social.iter().all(|l| !l.href.is_empty()));
        assert!(social.iter().all(|l| l.icon.starts_with("tabler:")));
    }

    #[test]
    fn test_footer_groups_and_secondary_links_empty() {
        let footer = &site_navigation().footer;
        assert!(footer.links.is_empty());
        assert!(footer.secondary_links.is_empty());
    }

    #[test]
    fn test_foot_note_mentions_license_and_astro() {
        let foot_note = &site_navigation().footer.foot_note;
        assert!(foot_note.contains("Creative Commons"));
        assert!(foot_note.contains("Astro"));
    }

    #[test]
    fn test_build_is_idempotent() {
        let permalinks = Permalinks::default();
        let first = SiteNavigation::build(&permalinks);
        let second = SiteNavigation::build(&permalinks);
        assert_eq!(first, second);
        assert_eq!(&first, site_navigation());
        assert!(std::ptr::eq(site_navigation(), site_navigation()));
    }
}
