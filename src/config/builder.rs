//! Fluent construction of a validated [`SiteConfig`].
//!
//! # Example
//!
//! ```ignore
//! let config = SiteConfig::builder("platforma")
//!     .social(SocialLink::new(SocialIcon::GitHub, "GitHub", "https://github.com/mishankov/platforma"))
//!     .entry(NavEntry::slug("getting-started"))
//!     .entry(NavEntry::group("Packages", [NavEntry::package("database")]))
//!     .build()?;
//! ```

use super::{ConfigError, NavEntry, SiteConfig, SocialLink};

/// Accumulates literal values; [`build`](Self::build) validates them.
#[derive(Debug, Clone)]
pub struct SiteConfigBuilder {
    config: SiteConfig,
}

impl SiteConfigBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            config: SiteConfig {
                title: title.into(),
                ..SiteConfig::default()
            },
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.config.description = Some(description.into());
        self
    }

    /// Deployed site URL. Also supplies the base path when none is set.
    pub fn site(mut self, url: impl Into<String>) -> Self {
        self.config.site = Some(url.into());
        self
    }

    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.config.base = Some(base.into());
        self
    }

    /// Register a known package name.
    pub fn package(mut self, name: impl Into<String>) -> Self {
        self.config.packages.push(name.into());
        self
    }

    pub fn social(mut self, link: SocialLink) -> Self {
        self.config.social.push(link);
        self
    }

    /// Append a top-level sidebar entry.
    pub fn entry(mut self, entry: NavEntry) -> Self {
        self.config.sidebar.push(entry);
        self
    }

    pub fn entries(mut self, entries: impl IntoIterator<Item = NavEntry>) -> Self {
        self.config.sidebar.extend(entries);
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<SiteConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SocialIcon, section::NavGroup};

    #[test]
    fn test_platforma_scenario() {
        let config = crate::config::test_platforma_config();

        let expected = SiteConfig {
            title: "platforma".into(),
            description: None,
            site: None,
            base: None,
            packages: Vec::new(),
            social: vec![SocialLink {
                icon: SocialIcon::GitHub,
                label: "GitHub".into(),
                href: "https://github.com/mishankov/platforma".into(),
            }],
            sidebar: vec![
                NavEntry::Slug("getting-started".into()),
                NavEntry::Group(NavGroup {
                    label: "Packages".into(),
                    items: vec![
                        NavEntry::Slug("packages/database".into()),
                        NavEntry::Slug("packages/httpserver".into()),
                        NavEntry::Slug("packages/queue".into()),
                    ],
                    collapsed: false,
                }),
            ],
        };
        assert_eq!(config, expected);
    }

    #[test]
    fn test_build_rejects_invalid() {
        let result = SiteConfig::builder("")
            .social(SocialLink::new(SocialIcon::GitHub, "GitHub", "nope"))
            .build();
        match result {
            Err(ConfigError::Diagnostics(diag)) => assert_eq!(diag.len(), 2),
            other => panic!("expected diagnostics, got {other:?}"),
        }
    }

    #[test]
    fn test_known_packages_enforced() {
        let result = SiteConfig::builder("platforma")
            .package("database")
            .entry(NavEntry::group(
                "Packages",
                [NavEntry::package("database"), NavEntry::package("auth")],
            ))
            .build();
        assert!(result.is_err());

        let config = SiteConfig::builder("platforma")
            .package("database")
            .package("auth")
            .entries([NavEntry::group(
                "Packages",
                [NavEntry::package("database"), NavEntry::package("auth")],
            )])
            .build()
            .unwrap();
        assert_eq!(config.packages, vec!["database", "auth"]);
    }

    #[test]
    fn test_site_and_base() {
        let config = SiteConfig::builder("platforma")
            .description("Go framework docs")
            .site("https://mishankov.github.io/platforma")
            .build()
            .unwrap();
        assert_eq!(config.effective_base().as_deref(), Some("/platforma"));
        assert_eq!(config.description.as_deref(), Some("Go framework docs"));

        let result = SiteConfig::builder("platforma").base("platforma").build();
        assert!(result.is_err());
    }
}
