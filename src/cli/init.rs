//! Init command implementation.
//!
//! Writes a commented starter `docsite.toml` into the target directory.

use crate::{config::SiteConfig, log};
use anyhow::Result;
use std::fs;

/// Starter configuration written by `docsite init`.
const STARTER_CONFIG: &str = r#"# Documentation site configuration.
# Run `docsite check` to validate, `docsite emit` to produce the renderer payload.

[site]
title = "My Docs"
description = "Documentation for my project"
# language = "en"
# url = "https://example.com/docs"

[head]
# icon = { href = "/logo.png", type = "image/svg+xml" }
# meta = [{ property = "og:type", content = "website" }]

[[theme.nav]]
text = "Guide"
link = "/guide/overview.md"

[[theme.sidebar]]
text = "Guide"
items = [
    { text = "Overview", link = "/guide/overview.md" },
]

# [theme.footer]
# message = "Released under the MIT License."
# copyright = "Copyright © 2026"

# [[theme.social]]
# icon = "github"
# link = "https://github.com/example/project"
"#;

/// Create a starter config file.
///
/// Refuses to overwrite an existing one.
pub fn new_config(config: &SiteConfig) -> Result<()> {
    let path = &config.config_path;

    if path.exists() {
        log!("error"; "'{}' already exists, not overwriting", path.display());
        std::process::exit(1);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, STARTER_CONFIG)?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_config_is_valid() {
        let config = SiteConfig::from_str(STARTER_CONFIG).unwrap();
        assert_eq!(config.site.title, "My Docs");
        assert_eq!(config.theme.nav.len(), 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_writes_into_new_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig {
            config_path: dir.path().join("project").join("docsite.toml"),
            ..Default::default()
        };
        new_config(&config).unwrap();
        assert!(config.config_path.exists());
    }
}
