//! Social link entries.
//!
//! # Example
//!
//! ```toml
//! [[theme.social]]
//! icon = "github"
//! link = "https://github.com/example/project"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

pub const SOCIAL_FIELD: FieldPath = FieldPath::new("theme.social");

/// Icon identifiers the renderer ships artwork for.
///
/// A closed set: unknown identifiers fail at parse time instead of
/// producing a blank icon in the rendered site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Github,
    Twitter,
    X,
    Discord,
    Mastodon,
    Youtube,
    Linkedin,
    Facebook,
    Instagram,
    Slack,
    Npm,
}

impl SocialIcon {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Twitter => "twitter",
            Self::X => "x",
            Self::Discord => "discord",
            Self::Mastodon => "mastodon",
            Self::Youtube => "youtube",
            Self::Linkedin => "linkedin",
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::Slack => "slack",
            Self::Npm => "npm",
        }
    }
}

impl fmt::Display for SocialIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An icon plus the external URL it points at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: SocialIcon,
    pub link: String,
}

/// Validate social links.
///
/// # Checks
/// - at most one entry per distinct icon
/// - each link is a valid http/https URL
pub fn validate_social(social: &[SocialLink], diag: &mut ConfigDiagnostics) {
    let mut seen = HashSet::new();
    for entry in social {
        if !seen.insert(entry.icon) {
            diag.error_with_hint(
                SOCIAL_FIELD,
                format!("icon '{}' is used by more than one entry", entry.icon),
                "keep one entry per icon",
            );
        }

        match url::Url::parse(&entry.link) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            Ok(parsed) => {
                diag.error(
                    SOCIAL_FIELD,
                    format!(
                        "scheme '{}' not supported for '{}', must be http or https",
                        parsed.scheme(),
                        entry.icon
                    ),
                );
            }
            Err(e) => {
                diag.error_with_hint(
                    SOCIAL_FIELD,
                    format!("invalid URL for '{}': {}", entry.icon, e),
                    "use format like https://github.com/example/project",
                );
            }
        }
    }
}
