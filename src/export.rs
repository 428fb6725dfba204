//! Export the site configuration for the documentation generator.
//!
//! | Format | Output                                               |
//! |--------|------------------------------------------------------|
//! | `json` | `{ site, base, starlight: { title, social, ... } }`  |
//! | `toml` | `docs.toml` form, re-parses to the same config       |
//! | `mjs`  | `astro.config.mjs` module                            |

use crate::config::{ConfigError, SiteConfig};
use serde_json::{Map, Value, json};
use std::fmt::Write;

/// Options object passed to the Starlight integration.
pub fn starlight_options(config: &SiteConfig) -> Result<Value, serde_json::Error> {
    let mut options = Map::new();
    options.insert("title".into(), json!(config.title));
    if let Some(description) = &config.description {
        options.insert("description".into(), json!(description));
    }
    options.insert("social".into(), serde_json::to_value(&config.social)?);
    options.insert("sidebar".into(), serde_json::to_value(&config.sidebar)?);
    Ok(Value::Object(options))
}

/// Generator-facing JSON document.
pub fn to_json(config: &SiteConfig) -> Result<String, serde_json::Error> {
    let mut root = Map::new();
    if let Some(site) = &config.site {
        root.insert("site".into(), json!(site));
    }
    if let Some(base) = config.effective_base() {
        root.insert("base".into(), json!(base));
    }
    root.insert("starlight".into(), starlight_options(config)?);
    serde_json::to_string_pretty(&Value::Object(root))
}

/// `docs.toml` text.
pub fn to_toml(config: &SiteConfig) -> Result<String, ConfigError> {
    Ok(toml::to_string(config)?)
}

/// `astro.config.mjs` module registering the Starlight integration.
pub fn to_module(config: &SiteConfig) -> Result<String, serde_json::Error> {
    let options = serde_json::to_string_pretty(&starlight_options(config)?)?;

    let mut out = String::new();
    out.push_str("// @ts-check\n");
    out.push_str("import { defineConfig } from \"astro/config\";\n");
    out.push_str("import starlight from \"@astrojs/starlight\";\n\n");
    out.push_str("// https://astro.build/config\n");
    out.push_str("export default defineConfig({\n");
    if let Some(site) = &config.site {
        let _ = writeln!(out, "  site: {},", json!(site));
    }
    if let Some(base) = config.effective_base() {
        let _ = writeln!(out, "  base: {},", json!(base));
    }
    out.push_str("  integrations: [\n");
    out.push_str("    starlight(");
    for (i, line) in options.lines().enumerate() {
        if i > 0 {
            out.push_str("\n    ");
        }
        out.push_str(line);
    }
    out.push_str("),\n");
    out.push_str("  ],\n");
    out.push_str("});\n");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NavEntry, test_platforma_config};

    #[test]
    fn test_json_shape() {
        let json = to_json(&test_platforma_config()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert!(value.get("site").is_none());
        assert!(value.get("base").is_none());

        let starlight = &value["starlight"];
        assert_eq!(starlight["title"], "platforma");
        assert_eq!(starlight["social"][0]["icon"], "github");
        assert_eq!(starlight["social"][0]["href"], "https://github.com/mishankov/platforma");
        assert_eq!(starlight["sidebar"][0], "getting-started");
        assert_eq!(starlight["sidebar"][1]["label"], "Packages");
        assert_eq!(starlight["sidebar"][1]["items"][2], "packages/queue");
        assert!(starlight["sidebar"][1].get("collapsed").is_none());
    }

    #[test]
    fn test_json_key_order() {
        let config = SiteConfig::builder("platforma")
            .description("docs")
            .site("https://mishankov.github.io/platforma")
            .build()
            .unwrap();
        let json = to_json(&config).unwrap();

        let site = json.find("\"site\"").unwrap();
        let base = json.find("\"base\"").unwrap();
        let title = json.find("\"title\"").unwrap();
        let description = json.find("\"description\"").unwrap();
        assert!(site < base && base < title && title < description);
        assert!(json.contains("\"/platforma\""));
    }

    #[test]
    fn test_toml_export_reparses() {
        let config = SiteConfig::builder("platforma")
            .site("https://mishankov.github.io/platforma")
            .package("database")
            .entry(NavEntry::slug("getting-started"))
            .entry(NavEntry::autogenerate("Reference", "reference"))
            .entry(NavEntry::group("Packages", [NavEntry::package("database")]))
            .build()
            .unwrap();
        let text = to_toml(&config).unwrap();
        assert_eq!(SiteConfig::from_str(&text).unwrap(), config);
    }

    #[test]
    fn test_module_output() {
        let config = SiteConfig::builder("platforma")
            .base("/platforma")
            .entry(NavEntry::slug("getting-started"))
            .build()
            .unwrap();
        let module = to_module(&config).unwrap();

        assert!(module.starts_with("// @ts-check\n"));
        assert!(module.contains("import starlight from \"@astrojs/starlight\";"));
        assert!(module.contains("  base: \"/platforma\",\n"));
        assert!(module.contains("    starlight({\n      \"title\": \"platforma\""));
        assert!(module.contains("\"getting-started\""));
        assert!(module.ends_with("  ],\n});\n"));
    }
}
