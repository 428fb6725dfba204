//! `[[social]]` links shown in the site header.
//!
//! # Example
//!
//! ```toml
//! [[social]]
//! icon = "github"
//! label = "GitHub"
//! href = "https://github.com/mishankov/platforma"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// External link displayed as an icon in the site header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    /// Platform icon.
    pub icon: SocialIcon,

    /// Accessible label (e.g., "GitHub").
    pub label: String,

    /// Target URL.
    pub href: String,
}

impl SocialLink {
    pub fn new(icon: SocialIcon, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            icon,
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Platforms the documentation theme ships icons for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocialIcon {
    #[serde(rename = "github")]
    GitHub,
    #[serde(rename = "gitlab")]
    GitLab,
    #[serde(rename = "codeberg")]
    Codeberg,
    #[serde(rename = "bitbucket")]
    Bitbucket,
    #[serde(rename = "discord")]
    Discord,
    #[serde(rename = "mastodon")]
    Mastodon,
    #[serde(rename = "x.com")]
    X,
    #[serde(rename = "blueSky")]
    BlueSky,
    #[serde(rename = "linkedin")]
    LinkedIn,
    #[serde(rename = "youtube")]
    YouTube,
    #[serde(rename = "telegram")]
    Telegram,
    #[serde(rename = "slack")]
    Slack,
    #[serde(rename = "matrix")]
    Matrix,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "rss")]
    Rss,
}

impl SocialIcon {
    /// Icon name as understood by the theme.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GitHub => "github",
            Self::GitLab => "gitlab",
            Self::Codeberg => "codeberg",
            Self::Bitbucket => "bitbucket",
            Self::Discord => "discord",
            Self::Mastodon => "mastodon",
            Self::X => "x.com",
            Self::BlueSky => "blueSky",
            Self::LinkedIn => "linkedin",
            Self::YouTube => "youtube",
            Self::Telegram => "telegram",
            Self::Slack => "slack",
            Self::Matrix => "matrix",
            Self::Email => "email",
            Self::Rss => "rss",
        }
    }
}

/// Validate social links.
///
/// # Checks
/// - `label` must not be empty
/// - `href` must parse as a URL (http/https links also need a host)
/// - duplicate `href`s are reported as warnings
pub fn validate(links: &[SocialLink], diag: &mut ConfigDiagnostics) {
    let root = FieldPath::new("social");
    let mut seen = FxHashSet::default();

    for (i, link) in links.iter().enumerate() {
        let field = root.index(i);

        if link.label.trim().is_empty() {
            diag.error_with_hint(
                field.key("label"),
                format!("{} link has an empty label", link.icon.as_str()),
                "set a readable label, e.g.: \"GitHub\"",
            );
        }

        match url::Url::parse(&link.href) {
            Ok(parsed) => {
                if matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_none() {
                    diag.error_with_hint(
                        field.key("href"),
                        "URL must have a valid host",
                        "use format like https://github.com/owner/repo",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    field.key("href"),
                    format!("invalid URL `{}`: {}", link.href, e),
                    "use format like https://github.com/owner/repo",
                );
            }
        }

        if !seen.insert(link.href.as_str()) {
            diag.warn(field.key("href"), format!("duplicate link `{}`", link.href));
        }
    }
}
