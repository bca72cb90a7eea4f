//! Renderer payload generation.
//!
//! Converts a validated [`SiteConfig`] into the nested record the external
//! documentation renderer consumes. The conversion is pure: same config in,
//! same payload out, with section and entry ordering preserved and JSON key
//! order fixed by insertion (`serde_json` with `preserve_order`).
//!
//! Payload shape:
//!
//! ```json
//! {
//!   "title": "...",
//!   "description": "...",
//!   "lang": "en",
//!   "head": [["link", {"rel": "icon", "href": "/logo.png"}], "<raw html>"],
//!   "themeConfig": {
//!     "nav": [{"text": "...", "link": "..."}],
//!     "sidebar": [{"text": "...", "items": [...]}],
//!     "footer": {"message": "...", "copyright": "..."},
//!     "socialLinks": [{"icon": "github", "link": "..."}]
//!   }
//! }
//! ```

use crate::config::{FooterConfig, NavEntry, SidebarSection, SiteConfig, SocialLink};
use anyhow::Result;
use serde::Serialize;
use serde_json::{Map, Value};

/// The root record handed to the external renderer.
#[derive(Debug, Clone, Serialize)]
pub struct RendererPayload {
    pub title: String,
    pub description: String,
    pub lang: String,
    pub head: Vec<HeadEntry>,
    #[serde(rename = "themeConfig")]
    pub theme_config: ThemePayload,
}

/// One entry of the `head` array: either a `[tag, attrs]` pair or a raw
/// HTML string the renderer injects verbatim.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum HeadEntry {
    Tag(String, Map<String, Value>),
    Raw(String),
}

/// The `themeConfig` record.
#[derive(Debug, Clone, Serialize)]
pub struct ThemePayload {
    pub nav: Vec<NavEntry>,
    pub sidebar: Vec<SidebarSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterConfig>,
    #[serde(rename = "socialLinks")]
    pub social_links: Vec<SocialLink>,
}

impl RendererPayload {
    /// Build the payload from a loaded configuration.
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            title: config.site.title.clone(),
            description: config.site.description.clone(),
            lang: config.site.language.clone(),
            head: build_head(config),
            theme_config: ThemePayload {
                nav: config.theme.nav.clone(),
                sidebar: config.theme.sidebar.clone(),
                footer: config.theme.footer.clone(),
                social_links: config.theme.social.clone(),
            },
        }
    }

    /// Serialize to JSON, optionally pretty-printed.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// Assemble head entries: icon link first, then meta tags, then raw elements.
fn build_head(config: &SiteConfig) -> Vec<HeadEntry> {
    let mut head = Vec::new();

    if let Some(icon) = &config.head.icon {
        let mut attrs = Map::new();
        attrs.insert("rel".into(), Value::String("icon".into()));
        if let Some(mime) = &icon.mime {
            attrs.insert("type".into(), Value::String(mime.clone()));
        }
        attrs.insert("href".into(), Value::String(icon.href.clone()));
        head.push(HeadEntry::Tag("link".into(), attrs));
    }

    for tag in &config.head.meta {
        let mut attrs = Map::new();
        if let Some(name) = &tag.name {
            attrs.insert("name".into(), Value::String(name.clone()));
        }
        if let Some(property) = &tag.property {
            attrs.insert("property".into(), Value::String(property.clone()));
        }
        attrs.insert("content".into(), Value::String(tag.content.clone()));
        head.push(HeadEntry::Tag("meta".into(), attrs));
    }

    for element in &config.head.elements {
        head.push(HeadEntry::Raw(element.clone()));
    }

    head
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FULL_CONFIG, test_parse_config};

    fn full_payload() -> RendererPayload {
        let config = SiteConfig::from_str(FULL_CONFIG).unwrap();
        RendererPayload::from_config(&config)
    }

    #[test]
    fn test_top_level_fields() {
        let payload = full_payload();
        assert_eq!(payload.title, "Vue Query");
        assert_eq!(
            payload.description,
            "Build responsive and accessible apps 10x faster"
        );
        assert_eq!(payload.lang, "en");
    }

    #[test]
    fn test_head_shape() {
        let payload = full_payload();
        let json: Value = serde_json::from_str(&payload.to_json(false).unwrap()).unwrap();

        let head = json["head"].as_array().unwrap();
        assert_eq!(head.len(), 2);

        // ["link", {rel, type, href}] with insertion order preserved
        assert_eq!(head[0][0], "link");
        let attrs = head[0][1].as_object().unwrap();
        assert_eq!(attrs["rel"], "icon");
        assert_eq!(attrs["type"], "image/svg+xml");
        assert_eq!(attrs["href"], "/vue-query.png");
        let keys: Vec<_> = attrs.keys().map(String::as_str).collect();
        assert_eq!(keys, ["rel", "type", "href"]);

        assert_eq!(head[1][0], "meta");
        assert_eq!(head[1][1]["property"], "og:type");
        assert_eq!(head[1][1]["content"], "website");
    }

    #[test]
    fn test_raw_head_elements() {
        let config = test_parse_config(
            "[head]\nelements = ['<meta name=\"darkreader-lock\">']",
        );
        let payload = RendererPayload::from_config(&config);
        let json: Value = serde_json::from_str(&payload.to_json(false).unwrap()).unwrap();
        assert_eq!(json["head"][0], "<meta name=\"darkreader-lock\">");
    }

    #[test]
    fn test_theme_config_shape() {
        let payload = full_payload();
        let json: Value = serde_json::from_str(&payload.to_json(false).unwrap()).unwrap();
        let theme = &json["themeConfig"];

        assert_eq!(theme["nav"][0]["text"], "Guide");
        assert_eq!(theme["nav"][0]["link"], "/getting-started/overview.md");

        // Sections unchanged and in original position
        let sidebar = theme["sidebar"].as_array().unwrap();
        assert_eq!(sidebar.len(), 3);
        assert_eq!(sidebar[2]["text"], "Examples");
        assert_eq!(sidebar[2]["items"][0]["link"], "/examples/simple.md");

        assert_eq!(theme["socialLinks"][0]["icon"], "github");

        // No footer configured: key must be absent, not null
        assert!(theme.get("footer").is_none());
    }

    #[test]
    fn test_footer_included_when_set() {
        let config = test_parse_config(
            "[theme.footer]\nmessage = \"MIT Licensed\"\ncopyright = \"Copyright © 2026\"",
        );
        let payload = RendererPayload::from_config(&config);
        let json: Value = serde_json::from_str(&payload.to_json(false).unwrap()).unwrap();
        assert_eq!(json["themeConfig"]["footer"]["message"], "MIT Licensed");
    }

    #[test]
    fn test_emit_is_deterministic() {
        let a = full_payload().to_json(true).unwrap();
        let b = full_payload().to_json(true).unwrap();
        assert_eq!(a, b);
    }
}
