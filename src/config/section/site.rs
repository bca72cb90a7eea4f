//! `[site]` configuration.
//!
//! Basic site information shown in the rendered page shell: title,
//! description, language, canonical URL.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Field paths for diagnostic messages.
pub struct SiteInfoConfigFields {
    pub title: FieldPath,
    pub description: FieldPath,
    pub language: FieldPath,
    pub url: FieldPath,
}

/// Site metadata passed through to the renderer as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title shown in the browser tab and top bar.
    pub title: String,

    /// Site description (meta description / tagline).
    pub description: String,

    /// Language code (e.g., "en", "zh-Hans").
    pub language: String,

    /// Canonical site URL (e.g., "https://example.com/docs").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            language: "en".into(),
            url: None,
        }
    }
}

impl SiteInfoConfig {
    pub const FIELDS: SiteInfoConfigFields = SiteInfoConfigFields {
        title: FieldPath::new("site.title"),
        description: FieldPath::new("site.description"),
        language: FieldPath::new("site.language"),
        url: FieldPath::new("site.url"),
    };

    /// Validate site metadata.
    ///
    /// # Checks
    /// - `title` must be non-empty
    /// - `url`, when set, must be a valid http/https URL with a host
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.title,
                "site title must not be empty",
                "set site.title, e.g.: \"My Docs\"",
            );
        }

        // URL format check using url crate for strict validation
        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    // Must be http or https
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    // Must have a valid host
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!("invalid URL: {}", e),
                        "use format like https://example.com",
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = SiteInfoConfig::default();
        assert_eq!(config.title, "");
        assert_eq!(config.language, "en");
        assert!(config.url.is_none());
    }

    #[test]
    fn test_parse_full_section() {
        // Bare keys continue the [site] table opened by the helper
        let config = test_parse_config(
            "language = \"zh-Hans\"\nurl = \"https://example.com/docs\"",
        );
        assert_eq!(config.site.title, "Test");
        assert_eq!(config.site.language, "zh-Hans");
        assert_eq!(config.site.url.as_deref(), Some("https://example.com/docs"));
    }

    #[test]
    fn test_empty_title_is_error() {
        let config = SiteInfoConfig {
            title: "  ".into(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, SiteInfoConfig::FIELDS.title);
    }

    #[test]
    fn test_url_validation() {
        let mut config = SiteInfoConfig {
            title: "Test".into(),
            ..Default::default()
        };

        // Valid https URL
        config.url = Some("https://example.com/docs".into());
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert!(diag.is_empty());

        // Unsupported scheme
        config.url = Some("ftp://example.com".into());
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert_eq!(diag.len(), 1);

        // Not a URL at all
        config.url = Some("not a url".into());
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
