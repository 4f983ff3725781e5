use std::path::Path;

use colored::Colorize;
use eyre::{bail, Result, WrapErr};
use tokio::fs;
use tracing::{debug, instrument};

use crate::config::{BUILTIN_SOURCE, CONFIG_FILE};

/// Create a site directory holding a `docsite.toml` with the built-in configuration
#[instrument]
pub async fn init(name: &str) -> Result<()> {
    let root = Path::new(name);
    let config_path = root.join(CONFIG_FILE);

    if fs::try_exists(&config_path).await? {
        // Get the canonical (absolute) path to the existing configuration
        let path = fs::canonicalize(&config_path).await?;
        bail!(
            "{}: {} already exists",
            "Could not initialize the site configuration".bold(),
            path.display()
        );
    }

    // Create the site directory and all its parent directories if required
    debug!(path = %root.display(), "Creating site directory");
    fs::create_dir_all(root).await.wrap_err(format!(
        "{}: {}",
        "Failed to create site directory".bold(),
        root.display()
    ))?;
    fs::write(&config_path, BUILTIN_SOURCE).await.wrap_err(format!(
        "{}: {}",
        "Failed to write site configuration".bold(),
        config_path.display()
    ))?;

    let path = fs::canonicalize(&config_path).await?;
    println!(
        "{} site configuration created in {}",
        "[init]".green().bold(),
        path.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[tokio::test]
    async fn writes_loadable_configuration() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("my-docs");

        init(root.to_str().unwrap()).await.unwrap();

        let config = SiteConfig::from_file(&root.join(CONFIG_FILE)).await.unwrap();
        assert_eq!(config, SiteConfig::load().unwrap());
    }

    #[tokio::test]
    async fn refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "title = \"mine\"").await.unwrap();

        let err = init(dir.path().to_str().unwrap()).await.unwrap_err();
        assert!(err.to_string().contains("already exists"));

        let kept = fs::read_to_string(&config_path).await.unwrap();
        assert_eq!(kept, "title = \"mine\"");
    }
}
