//! `check` command: validate the config and report what it describes.

use crate::{config::SiteConfig, log};
use anyhow::Result;
use std::path::Path;

/// Validate content references (when a content root is given) and print a
/// summary. The config itself is already validated by [`SiteConfig::load`].
pub fn check_site(config: &SiteConfig, content: Option<&Path>) -> Result<()> {
    if let Some(content_dir) = content {
        config.resolve_content(content_dir)?;
        log!("check"; "all sidebar slugs resolve under {}", content_dir.display());
    }

    let stats = config.sidebar_stats();
    log!(
        "check";
        "`{}` ok: {} social link(s), {} page(s) ({} package(s)), {} link(s), {} group(s)",
        config.title,
        config.social.len(),
        stats.pages,
        stats.packages,
        stats.links,
        stats.groups
    );
    if let Some(base) = config.effective_base() {
        log!("check"; "served under {}", base);
    }
    Ok(())
}
