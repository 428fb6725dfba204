//! Site identity: `title`, `description`, `site` and `base`.
//!
//! # Example
//!
//! ```toml
//! title = "platforma"
//! description = "Go framework for web services"
//! site = "https://mishankov.github.io/platforma"
//! base = "/platforma"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};

/// Validate site identity fields.
///
/// # Checks
/// - `title` must not be empty
/// - `site` must be an http/https URL with a host
/// - `base` must start with `/` and contain no whitespace
pub fn validate(
    title: &str,
    site: Option<&str>,
    base: Option<&str>,
    diag: &mut ConfigDiagnostics,
) {
    if title.trim().is_empty() {
        diag.error_with_hint(
            FieldPath::new("title"),
            "site title must not be empty",
            "set title, e.g.: \"platforma\"",
        );
    }

    if let Some(url_str) = site {
        validate_site_url(url_str, diag);
    }

    if let Some(base) = base {
        let field = FieldPath::new("base");
        if !base.starts_with('/') {
            diag.error_with_hint(
                field.clone(),
                format!("base path `{base}` must start with `/`"),
                format!("use \"/{}\"", base.trim_start_matches('/')),
            );
        }
        if base.chars().any(char::is_whitespace) {
            diag.error(field, format!("base path `{base}` must not contain whitespace"));
        }
    }
}

fn validate_site_url(url_str: &str, diag: &mut ConfigDiagnostics) {
    let field = FieldPath::new("site");
    match url::Url::parse(url_str) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field.clone(),
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
            }
            if parsed.host_str().is_none() {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL: {}", e),
                "use format like https://example.com",
            );
        }
    }
}
