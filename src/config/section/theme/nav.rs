//! Navigation entries and sidebar sections.
//!
//! # Example
//!
//! ```toml
//! [[theme.nav]]
//! text = "Guide"
//! link = "/getting-started/overview.md"
//!
//! [[theme.sidebar]]
//! text = "Getting Started"
//! items = [
//!     { text = "Overview", link = "/getting-started/overview.md" },
//! ]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A labeled link shown in the top navigation or a sidebar list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Display label.
    pub text: String,

    /// Target document path (site-absolute, e.g. "/guide/queries.md").
    pub link: String,
}

impl NavEntry {
    /// Validate a single entry against the field it came from.
    ///
    /// Links must be site-absolute document paths; resolving them to real
    /// documents is the renderer's build step, not ours.
    pub fn validate(&self, field: FieldPath, diag: &mut ConfigDiagnostics) {
        if self.text.trim().is_empty() {
            diag.error(field, format!("entry for '{}' has an empty label", self.link));
        }
        if self.link.is_empty() {
            diag.error(field, format!("entry '{}' has an empty link", self.text));
        } else if !self.link.starts_with('/') {
            diag.error_with_hint(
                field,
                format!("link '{}' must begin with '/'", self.link),
                "use a site-absolute path, e.g.: \"/guide/overview.md\"",
            );
        }
    }
}

/// A titled, ordered group of nav entries shown in the sidebar.
///
/// Item order is meaningful and preserved end to end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarSection {
    /// Section heading.
    pub text: String,

    /// Entries in display order.
    pub items: Vec<NavEntry>,
}

/// Field paths for diagnostic messages.
pub struct NavFields {
    pub nav: FieldPath,
    pub sidebar: FieldPath,
    pub sidebar_items: FieldPath,
}

pub const NAV_FIELDS: NavFields = NavFields {
    nav: FieldPath::new("theme.nav"),
    sidebar: FieldPath::new("theme.sidebar"),
    sidebar_items: FieldPath::new("theme.sidebar.items"),
};

/// Validate the top navigation.
///
/// Duplicate labels are reported as a warning only: the renderer displays
/// them fine, they are just confusing to readers.
pub fn validate_nav(nav: &[NavEntry], diag: &mut ConfigDiagnostics) {
    let mut seen = HashSet::new();
    for entry in nav {
        entry.validate(NAV_FIELDS.nav, diag);
        if !entry.text.trim().is_empty() && !seen.insert(entry.text.as_str()) {
            diag.warn(
                NAV_FIELDS.nav,
                format!("duplicate nav label '{}'", entry.text),
            );
        }
    }
}

/// Validate the sidebar section tree.
pub fn validate_sidebar(sidebar: &[SidebarSection], diag: &mut ConfigDiagnostics) {
    for section in sidebar {
        if section.text.trim().is_empty() {
            diag.error(NAV_FIELDS.sidebar, "sidebar section has an empty heading");
        }
        if section.items.is_empty() {
            diag.error_with_hint(
                NAV_FIELDS.sidebar_items,
                format!("sidebar section '{}' has no items", section.text),
                "add at least one { text, link } item or remove the section",
            );
        }
        for item in &section.items {
            item.validate(NAV_FIELDS.sidebar_items, diag);
        }
    }
}
