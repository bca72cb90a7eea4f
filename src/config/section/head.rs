//! `[head]` configuration.
//!
//! Custom tags injected into the rendered page `<head>`: the favicon link,
//! Open Graph / meta tags, and raw elements for anything else.
//!
//! # Example
//!
//! ```toml
//! [head]
//! icon = { href = "/logo.png", type = "image/svg+xml" }
//! meta = [{ property = "og:type", content = "website" }]
//! elements = ['<meta name="darkreader-lock">']
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Field paths for diagnostic messages.
pub struct HeadConfigFields {
    pub icon: FieldPath,
    pub meta: FieldPath,
    pub elements: FieldPath,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadConfig {
    /// Favicon link tag (`rel="icon"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconLink>,

    /// Meta tags (Open Graph properties or named meta).
    pub meta: Vec<MetaTag>,

    /// Raw HTML elements to insert into head.
    pub elements: Vec<String>,
}

impl HeadConfig {
    pub const FIELDS: HeadConfigFields = HeadConfigFields {
        icon: FieldPath::new("head.icon"),
        meta: FieldPath::new("head.meta"),
        elements: FieldPath::new("head.elements"),
    };

    /// Validate head entries.
    ///
    /// # Checks
    /// - `icon.href` must be a site-absolute path (non-empty, leading `/`)
    /// - each meta tag must set exactly one of `name`/`property`, plus `content`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(icon) = &self.icon
            && !icon.href.starts_with('/')
        {
            diag.error_with_hint(
                Self::FIELDS.icon,
                format!("icon href '{}' must begin with '/'", icon.href),
                "use a site-absolute path, e.g.: \"/logo.png\"",
            );
        }

        for tag in &self.meta {
            match (&tag.name, &tag.property) {
                (None, None) => diag.error(
                    Self::FIELDS.meta,
                    "meta tag must set either 'name' or 'property'",
                ),
                (Some(_), Some(_)) => diag.error(
                    Self::FIELDS.meta,
                    "meta tag must set only one of 'name' and 'property'",
                ),
                _ => {}
            }
            if tag.content.is_empty() {
                diag.error(Self::FIELDS.meta, "meta tag content must not be empty");
            }
        }
    }
}

/// Favicon link attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconLink {
    /// Icon path (site-absolute, e.g. "/logo.png").
    pub href: String,

    /// MIME type attribute (e.g. "image/svg+xml").
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
}

/// A `<meta>` tag with either a `name` or a `property` attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaTag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,

    pub content: String,
}
