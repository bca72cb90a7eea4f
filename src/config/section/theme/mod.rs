//! `[theme]` section configuration.
//!
//! Everything the renderer's default theme consumes: top navigation,
//! sidebar tree, footer, social links.
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
//!
//! [theme.footer]
//! message = "Released under the MIT License."
//! copyright = "Copyright © 2026"
//!
//! [[theme.social]]
//! icon = "github"
//! link = "https://github.com/example/project"
//! ```

mod nav;
mod social;

pub use nav::{NavEntry, SidebarSection};
pub use social::{SocialIcon, SocialLink};

use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};

/// Theme section: nav, sidebar, footer, social links.
///
/// Section and entry order is meaningful everywhere here and is carried
/// through to the emitted payload untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSectionConfig {
    /// Top navigation entries in display order.
    pub nav: Vec<NavEntry>,

    /// Sidebar sections in display order.
    pub sidebar: Vec<SidebarSection>,

    /// Optional footer block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterConfig>,

    /// Social links shown in the top bar.
    pub social: Vec<SocialLink>,
}

impl ThemeSectionConfig {
    /// Validate every theme subsection, collecting all findings.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        nav::validate_nav(&self.nav, diag);
        nav::validate_sidebar(&self.sidebar, diag);
        social::validate_social(&self.social, diag);
    }
}

/// Footer message and copyright lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub message: String,
    pub copyright: String,
}
