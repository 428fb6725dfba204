//! Documentation site configuration (`docs.toml`).
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Field groups and their validation
//! │   ├── site       # title, description, site, base
//! │   ├── social     # [[social]]
//! │   └── sidebar    # navigation tree
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── builder.rs     # SiteConfigBuilder
//! ├── util.rs        # config discovery, base path derivation
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Example
//!
//! ```toml
//! title = "platforma"
//! packages = ["database", "httpserver", "queue"]
//!
//! [[social]]
//! icon = "github"
//! label = "GitHub"
//! href = "https://github.com/mishankov/platforma"
//!
//! [[sidebar]]
//! slug = "getting-started"
//!
//! [[sidebar]]
//! label = "Packages"
//! items = ["packages/database", "packages/httpserver", "packages/queue"]
//! ```

pub mod builder;
pub mod section;
pub mod types;
mod util;

pub use builder::SiteConfigBuilder;
pub use section::{NavEntry, SocialIcon, SocialLink};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use util::{base_from_site_url, find_config_file};

/// Default config filename
pub const CONFIG_FILE: &str = "docs.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing docs.toml.
///
/// Built once (from the file or through [`SiteConfig::builder`]), validated,
/// then only read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// Site description used for meta tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Deployed site URL (e.g., "https://mishankov.github.io/platforma").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,

    /// Base path the site is served under (e.g., "/platforma").
    #[serde(
        default,
        alias = "baseURL",
        alias = "base_url",
        skip_serializing_if = "Option::is_none"
    )]
    pub base: Option<String>,

    /// Known package names; `packages/<name>` sidebar references must match one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub packages: Vec<String>,

    /// Header social links, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub social: Vec<SocialLink>,

    /// Navigation tree, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sidebar: Vec<NavEntry>,
}

impl SiteConfig {
    /// Start building a configuration in code.
    pub fn builder(title: impl Into<String>) -> SiteConfigBuilder {
        SiteConfigBuilder::new(title)
    }

    /// Locate, parse and validate the config file.
    ///
    /// Searches upward from cwd for `config_name`. Unknown fields are
    /// reported as warnings; every other defect is fatal.
    pub fn load(config_name: &Path) -> Result<Self> {
        let path = find_config_file(config_name).with_context(|| {
            format!(
                "Config file '{}' not found. Run 'platforma-docs init' to create one.",
                config_name.display()
            )
        })?;
        debug!("config"; "loading {}", path.display());

        let config = Self::from_path(&path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Base path the site is served under: `base`, else the path of `site`.
    pub fn effective_base(&self) -> Option<String> {
        self.base
            .clone()
            .or_else(|| self.site.as_deref().and_then(base_from_site_url))
    }

    /// Collect all validation diagnostics without failing.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        section::site::validate(
            &self.title,
            self.site.as_deref(),
            self.base.as_deref(),
            &mut diag,
        );
        section::social::validate(&self.social, &mut diag);
        section::sidebar::validate(&self.sidebar, &self.packages, &mut diag);
        diag
    }

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let diag = self.diagnostics();
        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Check sidebar references against the content tree.
    pub fn resolve_content(&self, content_dir: &Path) -> Result<(), ConfigError> {
        if !content_dir.is_dir() {
            return Err(ConfigError::Validation(format!(
                "content directory `{}` not found",
                content_dir.display()
            )));
        }
        let mut diag = ConfigDiagnostics::new();
        section::sidebar::resolve(&self.sidebar, content_dir, &mut diag);
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Entry counts of the sidebar.
    pub fn sidebar_stats(&self) -> section::SidebarStats {
        section::sidebar::stats(&self.sidebar)
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Config matching the hand-written platforma docs site.
#[cfg(test)]
pub fn test_platforma_config() -> SiteConfig {
    SiteConfig::builder("platforma")
        .social(SocialLink::new(
            SocialIcon::GitHub,
            "GitHub",
            "https://github.com/mishankov/platforma",
        ))
        .entry(NavEntry::slug("getting-started"))
        .entry(NavEntry::group(
            "Packages",
            [
                NavEntry::package("database"),
                NavEntry::package("httpserver"),
                NavEntry::package("queue"),
            ],
        ))
        .build()
        .unwrap()
}

// ============================================================================
// tests
// ============================================================================
