use serde::{Deserialize, Serialize};

/// Both navigation values handed to the page layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteNavigation {
    pub header: HeaderData,
    pub footer: FooterData,
}

/// Header menu and call-to-action buttons
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderData {
    pub links: Vec<NavLink>,
    pub actions: Vec<ActionLink>,
}

/// Footer content: link columns, legal links, social icons and the footnote
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterData {
    pub links: Vec<FooterGroup>,
    pub secondary_links: Vec<NavLink>,
    pub social_links: Vec<SocialLink>,
    /// Raw HTML, inserted as-is by the layout
    pub foot_note: String,
}

/// Label/target pair used in menus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub text: String,
    pub href: String,
}

impl NavLink {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
        }
    }
}

/// Header button, optionally opened in another browsing context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLink {
    pub text: String,
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// Titled column of footer links
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterGroup {
    pub title: String,
    pub links: Vec<NavLink>,
}

/// Social media icon link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    /// Accessible name, the icon carries no visible text
    pub aria_label: String,
    /// Icon identifier from the icon set (e.g. "tabler:brand-github")
    pub icon: String,
    pub href: String,
}

impl SocialLink {
    pub fn new(
        aria_label: impl Into<String>,
        icon: impl Into<String>,
        href: impl Into<String>,
    ) -> Self {
        Self {
            aria_label: aria_label.into(),
            icon: icon.into(),
            href: href.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_serializes_with_template_keys() {
        let footer = FooterData {
            links: vec![],
            secondary_links: vec![NavLink::new("Terms", "/terms")],
            social_links: vec![SocialLink::new("X", "tabler:brand-x", "https://x.com")],
            foot_note: "note".to_string(),
        };

        let json = serde_json::to_value(&footer).unwrap();
        assert!(json.get("secondaryLinks").is_some());
        assert!(json.get("footNote").is_some());
        assert_eq!(json["socialLinks"][0]["ariaLabel"], "X");
        assert!(json.get("secondary_links").is_none());
    }

    #[test]
    fn test_action_link_omits_missing_target() {
        let action = ActionLink {
            text: "Download".to_string(),
            href: "https://example.com".to_string(),
            target: None,
        };
        let json = serde_json::to_value(&action).unwrap();
        assert!(json.get("target").is_none());

        let action = ActionLink {
            target: Some("_blank".to_string()),
            ..action
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["target"], "_blank");
    }
}
