use anyhow::Result;
use site_nav_core::SiteNavigation;
use std::path::PathBuf;

use super::load_navigation;

pub async fn run(config: Option<PathBuf>) -> Result<()> {
    let nav = load_navigation(config.as_deref())?;
    print!("{}", summarize(&nav));
    Ok(())
}

fn summarize(nav: &SiteNavigation) -> String {
    let mut out = String::new();

    out.push_str("Header\n");
    out.push_str(&format!("  Links: {}\n", nav.header.links.len()));
    for link in &nav.header.links {
        out.push_str(&format!("    {} -> {}\n", link.text, link.href));
    }
    out.push_str(&format!("  Actions: {}\n", nav.header.actions.len()));
    for action in &nav.header.actions {
        match &action.target {
            Some(target) => out.push_str(&format!(
                "    {} -> {} ({})\n",
                action.text, action.href, target
            )),
            None => out.push_str(&format!("    {} -> {}\n", action.text, action.href)),
        }
    }

    out.push_str("\nFooter\n");
    out.push_str(&format!("  Groups: {}\n", nav.footer.links.len()));
    for group in &nav.footer.links {
        out.push_str(&format!("    {}\n", group.title));
        for link in &group.links {
            out.push_str(&format!("      {} -> {}\n", link.text, link.href));
        }
    }
    out.push_str(&format!(
        "  Secondary links: {}\n",
        nav.footer.secondary_links.len()
    ));
    for link in &nav.footer.secondary_links {
        out.push_str(&format!("    {} -> {}\n", link.text, link.href));
    }
    out.push_str(&format!("  Social links: {}\n", nav.footer.social_links.len()));
    for link in &nav.footer.social_links {
        out.push_str(&format!(
            "    {} [{}] -> {}\n",
            link.aria_label, link.icon, link.href
        ));
    }

    let foot_note = nav.footer.foot_note.trim();
    let first_line = foot_note.lines().next().unwrap_or("").trim();
    out.push_str(&format!(
        "  Footnote: {} chars, starts \"{}\"\n",
        foot_note.len(),
        first_line
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use site_nav_core::{ActionLink, site_navigation};

    #[test]
    fn test_summarize_builtin() {
        let summary = summarize(site_navigation());
        assert!(summary.contains("  Links: 2\n"));
        assert!(summary.contains("    Home -> /\n"));
        assert!(summary.contains("    Blog -> /blog\n"));
        assert!(summary.contains("  Groups: 0\n"));
        assert!(summary.contains("  Social links: 3\n"));
        assert!(summary.contains("    Github [tabler:brand-github] -> https://github.com/pylebecq\n"));
        assert!(summary.contains("starts \"This website and all its content is licensed under a\""));
    }

    #[test]
    fn test_summarize_action_target() {
        let mut nav = site_navigation().clone();
        nav.header.actions.push(ActionLink {
            text: "Download".to_string(),
            href: "https://example.com/dl".to_string(),
            target: Some("_blank".to_string()),
        });

        let summary = summarize(&nav);
        assert!(summary.contains("  Actions: 1\n"));
        assert!(summary.contains("    Download -> https://example.com/dl (_blank)\n"));
    }
}
