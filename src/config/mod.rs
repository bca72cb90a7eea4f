//! Site configuration management for `docsite.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── head       # [head]
//! │   └── theme      # [theme] (nav, sidebar, footer, social)
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, diagnostics collector
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The whole structure is built once at load time, validated, and then
//! only read. The renderer payload in [`crate::payload`] is derived from
//! it without further mutation.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{
    FooterConfig, HeadConfig, IconLink, MetaTag, NavEntry, SidebarSection, SiteInfoConfig,
    SocialIcon, SocialLink, ThemeSectionConfig,
};

// Re-export from types/
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands},
    log,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing docsite.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata (title, description, language, url)
    pub site: SiteInfoConfig,

    /// Head tag injections (icon, meta, raw elements)
    pub head: HeadConfig,

    /// Theme settings (nav, sidebar, footer, social)
    pub theme: ThemeSectionConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find config file.
    /// The project root is determined by the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        // Validate config existence (skip for init)
        if !cli.is_init() && !exists {
            log!(
                "error";
                "Config file '{}' not found. Run 'docsite init' to create one.",
                cli.config.display()
            );
            std::process::exit(1);
        }

        // Load or create default config
        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        config.root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.config_path = config_path;

        // Full validation (skip for init: no config file yet)
        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        match &cli.command {
            Commands::Init { name: Some(name) } => {
                let path = cwd.join(name).join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            Commands::Init { name: None } => {
                let path = cwd.join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            _ => {
                // Search upward from cwd
                match find_config_file(&cli.config) {
                    Some(path) => Ok((path, true)),
                    None => Ok((cwd.join(&cli.config), false)),
                }
            }
        }
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !Self::prompt_continue()? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only filename (docsite.toml) since it's always at site root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        // Default no (empty input), explicit "y" or "yes" to continue
        Ok(input == "y" || input == "yes")
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the whole configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.head.validate(&mut diag);
        self.theme.validate(&mut diag);

        // Print collected warnings (grouped display)
        diag.print_warnings();

        // Return all collected errors
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\ntitle = \"Test\"\ndescription = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// Full config exercising every section, used by round-trip and payload tests.
#[cfg(test)]
pub const FULL_CONFIG: &str = r#"[site]
title = "Vue Query"
description = "Build responsive and accessible apps 10x faster"

[head]
icon = { href = "/vue-query.png", type = "image/svg+xml" }
meta = [{ property = "og:type", content = "website" }]

[[theme.nav]]
text = "Guide"
link = "/getting-started/overview.md"

[[theme.nav]]
text = "Examples"
link = "/examples/simple.md"

[[theme.sidebar]]
text = "Getting Started"
items = [
    { text = "Overview", link = "/getting-started/overview.md" },
    { text = "Installation", link = "/getting-started/installation.md" },
    { text = "Quick start", link = "/getting-started/quick-start.md" },
    { text = "DevTools", link = "/getting-started/devTools.md" },
    { text = "TypeScript", link = "/getting-started/typeScript.md" },
]

[[theme.sidebar]]
text = "Guides & Concepts"
items = [
    { text = "Important defaults", link = "/guide/important-defaults.md" },
    { text = "Queries", link = "/guide/queries.md" },
    { text = "Query Keys", link = "/guide/query-keys.md" },
    { text = "Query Functions", link = "/guide/query-functions.md" },
    { text = "Parallel Queries", link = "/guide/parallel-queries.md" },
    { text = "Dependent Queries", link = "/guide/dependent-queries.md" },
    { text = "Background Fetching Indicators", link = "/guide/background-fetching-indicators.md" },
    { text = "Window Focus Refetching", link = "/guide/window-focus-refetching.md" },
    { text = "Disabling Queries", link = "/guide/disabling-queries.md" },
    { text = "Query Retries", link = "/guide/query-retries.md" },
    { text = "Pagination Queries", link = "/guide/pagination-queries.md" },
    { text = "Infinite Queries", link = "/guide/infinite-queries.md" },
    { text = "Placeholder Query Data", link = "/guide/placeholder-query-data.md" },
    { text = "Initial Query Data", link = "/guide/initial-query-data.md" },
    { text = "Prefetching", link = "/guide/prefetching.md" },
    { text = "Mutations", link = "/guide/mutations.md" },
    { text = "SSR & Nuxt.js", link = "/guide/ssr-nuxt.md" },
    { text = "Best Practices", link = "/guide/best-practices.md" },
]

[[theme.sidebar]]
text = "Examples"
items = [
    { text = "Simple", link = "/examples/simple.md" },
]

[[theme.social]]
icon = "github"
link = "https://github.com/DamianOsipiuk/vue-query"
"#;

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result: Result<SiteConfig, _> = toml::from_str("[site\ntitle = \"My Docs\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.site.title, "");
        assert_eq!(config.site.language, "en");
        assert!(config.theme.nav.is_empty());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content =
            "[site]\ntitle = \"Test\"\ndescription = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        // Config should parse successfully
        assert_eq!(config.site.title, "Test");

        // Unknown fields should be collected
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\ntitle = \"Test\"\ndescription = \"Test\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_full_config_parses_and_validates() {
        let (config, ignored) = SiteConfig::parse_with_ignored(FULL_CONFIG).unwrap();
        assert!(ignored.is_empty(), "unknown fields: {:?}", ignored);

        assert_eq!(config.site.title, "Vue Query");
        assert_eq!(config.theme.nav.len(), 2);
        assert_eq!(config.theme.sidebar.len(), 3);
        assert_eq!(config.theme.sidebar[1].items.len(), 18);
        assert_eq!(config.theme.social.len(), 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = SiteConfig::from_str(FULL_CONFIG).unwrap();
        let serialized = toml::to_string(&config).unwrap();
        let reparsed = SiteConfig::from_str(&serialized).unwrap();
        // No property added or dropped
        assert_eq!(config, reparsed);
    }

    #[test]
    fn test_section_returned_unchanged_and_in_position() {
        let config = SiteConfig::from_str(FULL_CONFIG).unwrap();
        let section = &config.theme.sidebar[2];
        assert_eq!(section.text, "Examples");
        assert_eq!(section.items.len(), 1);
        assert_eq!(section.items[0].text, "Simple");
        assert_eq!(section.items[0].link, "/examples/simple.md");
    }

    #[test]
    fn test_validate_collects_all_errors() {
        // Bare keys continue the [site] table opened by the helper
        let config = test_parse_config(
            r#"url = "not a url"

[[theme.sidebar]]
text = "Empty"
items = []"#,
        );
        let err = config.validate().unwrap_err();
        let config_err = err.downcast::<ConfigError>().unwrap();
        match config_err {
            ConfigError::Diagnostics(diag) => assert_eq!(diag.len(), 2),
            other => panic!("expected diagnostics, got {other}"),
        }
    }
}
