//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Derive the base path a site is served under from its URL.
///
/// Returns `None` for invalid URLs and for sites served from the root.
///
/// # Examples
/// ```ignore
/// base_from_site_url("https://mishankov.github.io/platforma/") -> Some("/platforma")
/// base_from_site_url("https://docs.example.com/a/b")           -> Some("/a/b")
/// base_from_site_url("https://docs.example.com")               -> None
/// base_from_site_url("invalid")                                -> None
/// ```
pub fn base_from_site_url(url_str: &str) -> Option<String> {
    let parsed = url::Url::parse(url_str).ok()?;
    let path = parsed.path().trim_matches('/');
    (!path.is_empty()).then(|| format!("/{path}"))
}

/// Find config file by searching upward from the current directory.
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Find config file by searching upward from `start`.
///
/// Absolute names are returned as-is when they exist.
///
/// # Example
/// ```text
/// /home/user/platforma/docs/src/       ← start
/// /home/user/platforma/docs/docs.toml  ← found!
/// ```
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.exists())
}

// ============================================================================
// tests
// ============================================================================
