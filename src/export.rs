use std::path::Path;

use clap::ValueEnum;
use colored::Colorize;
use eyre::{eyre, Result, WrapErr};
use indoc::formatdoc;
use tracing::{debug, instrument};

use crate::config::SiteConfig;

/// Output shapes understood by the site generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// `siteConfig.js` CommonJS module
    #[default]
    Js,
    Json,
    Toml,
}

/// Serializes the configuration using the generator's field names
#[instrument(level = "debug", skip(config))]
pub fn render(config: &SiteConfig, format: Format) -> Result<String> {
    let output = match format {
        Format::Json => {
            let mut json = to_json(config)?;
            json.push('\n');
            json
        }
        Format::Js => {
            let json = to_json(config)?;
            formatdoc! {"
                const siteConfig = {json};

                module.exports = siteConfig;
            "}
        }
        Format::Toml => toml::to_string_pretty(config)
            .map_err(|e| eyre!("{}: {}", "Failed to serialize site configuration".bold(), e))?,
    };
    debug!(bytes = output.len(), "Rendered site configuration");

    Ok(output)
}

/// Field name `toml` uses when a datetime goes through a serializer other than its own
const TOML_DATETIME_FIELD: &str = "$__toml_private_datetime";

fn to_json(config: &SiteConfig) -> Result<String> {
    let mut value = serde_json::to_value(config)
        .map_err(|e| eyre!("{}: {}", "Failed to serialize site configuration".bold(), e))?;
    datetimes_to_strings(&mut value);
    serde_json::to_string_pretty(&value)
        .map_err(|e| eyre!("{}: {}", "Failed to serialize site configuration".bold(), e))
}

/// Replaces serialized TOML datetimes with their RFC 3339 text
fn datetimes_to_strings(value: &mut serde_json::Value) {
    if let Some(text) = datetime_text(value) {
        *value = serde_json::Value::String(text);
        return;
    }

    match value {
        serde_json::Value::Object(map) => map.values_mut().for_each(datetimes_to_strings),
        serde_json::Value::Array(items) => items.iter_mut().for_each(datetimes_to_strings),
        _ => {}
    }
}

fn datetime_text(value: &serde_json::Value) -> Option<String> {
    let map = value.as_object().filter(|map| map.len() == 1)?;
    map.get(TOML_DATETIME_FIELD)?.as_str().map(str::to_owned)
}

/// Writes the rendered configuration to `path`, creating parent directories
#[instrument(level = "debug", skip(config))]
pub async fn write(config: &SiteConfig, format: Format, path: &Path) -> Result<()> {
    let output = render(config, format)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.wrap_err(format!(
            "{}: {}",
            "Failed to create output directory".bold(),
            parent.display()
        ))?;
    }
    tokio::fs::write(path, output).await.wrap_err(format!(
        "{}: {}",
        "Failed to write site configuration".bold(),
        path.display()
    ))?;

    Ok(())
}
