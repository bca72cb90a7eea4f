//! Check command implementation.
//!
//! Validation itself runs during config load; by the time we get here the
//! configuration is known good, so this just reports what was checked.

use crate::{config::SiteConfig, debug, log};
use anyhow::Result;

/// Report a successful validation pass.
pub fn check_config(config: &SiteConfig) -> Result<()> {
    let item_count: usize = config.theme.sidebar.iter().map(|s| s.items.len()).sum();

    debug!("check"; "config file: {}", config.config_path.display());
    log!(
        "check";
        "{} ok: {} nav entries, {} sidebar sections ({} items), {} social links",
        config.site.title,
        config.theme.nav.len(),
        config.theme.sidebar.len(),
        item_count,
        config.theme.social.len()
    );
    Ok(())
}
