use std::path::PathBuf;

use colored::Colorize;
use eyre::Result;
use tokio::io::AsyncWriteExt;
use tracing::instrument;

use crate::config::SiteConfig;
use crate::export::{self, Format};

/// Write the site configuration to `output`, or stdout when no path is given
#[instrument]
pub async fn export(format: Format, output: Option<PathBuf>) -> Result<()> {
    let config = SiteConfig::discover().await?;

    match output {
        Some(path) => {
            export::write(&config, format, &path).await?;
            println!(
                "{} site configuration written to {}",
                "[export]".green().bold(),
                path.display()
            );
        }
        None => {
            let rendered = export::render(&config, format)?;
            let mut stdout = tokio::io::stdout();
            stdout.write_all(rendered.as_bytes()).await?;
            stdout.flush().await?;
        }
    }

    Ok(())
}
