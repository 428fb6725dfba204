//! `emit` command: export the config for the documentation generator.

use super::{EmitArgs, EmitFormat};
use crate::{config::SiteConfig, export, log};
use anyhow::{Context, Result};
use std::{fs, io::Write};

/// Render `config` in the requested format.
pub fn render(config: &SiteConfig, format: EmitFormat) -> Result<String> {
    let output = match format {
        EmitFormat::Json => export::to_json(config)?,
        EmitFormat::Toml => export::to_toml(config)?,
        EmitFormat::Mjs => export::to_module(config)?,
    };
    Ok(output)
}

/// Write the rendered config to stdout or the output file.
pub fn emit_config(config: &SiteConfig, args: &EmitArgs) -> Result<()> {
    let mut output = render(config, args.format)?;
    if !output.ends_with('\n') {
        output.push('\n');
    }

    match &args.output {
        Some(path) => {
            fs::write(path, &output)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            log!("emit"; "wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
