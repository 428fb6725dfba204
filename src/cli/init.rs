//! `init` command: write a starter `docs.toml`.

use crate::{
    config::{NavEntry, SiteConfig, SocialIcon, SocialLink},
    export, log,
};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Framework packages that have a documentation page.
pub const KNOWN_PACKAGES: &[&str] = &[
    "application",
    "auth",
    "database",
    "fileserver",
    "httpclient",
    "httpserver",
    "log",
    "openapiserver",
    "queue",
    "scheduler",
    "session",
];

/// Starter configuration for the platforma docs.
pub fn starter_config() -> Result<SiteConfig> {
    let builder = KNOWN_PACKAGES
        .iter()
        .fold(SiteConfig::builder("platforma"), |b, name| b.package(*name));

    let config = builder
        .social(SocialLink::new(
            SocialIcon::GitHub,
            "GitHub",
            "https://github.com/mishankov/platforma",
        ))
        .entry(NavEntry::slug("getting-started"))
        .entry(NavEntry::group(
            "Packages",
            [NavEntry::package("database"), NavEntry::package("httpserver")],
        ))
        .build()?;
    Ok(config)
}

/// Generate docs.toml content with a header comment.
pub fn generate_config_template() -> Result<String> {
    let mut out = format!(
        "# platforma docs configuration (platforma-docs v{})\n\n",
        env!("CARGO_PKG_VERSION")
    );
    out.push_str(&export::to_toml(&starter_config()?)?);
    Ok(out)
}

/// Write the starter config to `path`.
///
/// If `dry_run` is true, only prints the config template to stdout.
pub fn new_config(path: &Path, dry_run: bool, force: bool) -> Result<()> {
    let content = generate_config_template()?;

    if dry_run {
        print!("{content}");
        return Ok(());
    }

    if path.exists() && !force {
        bail!(
            "'{}' already exists, use --force to overwrite",
            path.display()
        );
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    log!("init"; "created {}", path.display());
    Ok(())
}
