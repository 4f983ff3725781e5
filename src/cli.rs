use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::cmd;
use crate::export::Format;

#[derive(Parser)]
#[command(author = "sinoui", version, disable_version_flag = true, about = "Site configuration for the sinoui documentation website")]
struct Cli {
    /// Print version
    #[arg(short = 'v', long, action = clap::builder::ArgAction::Version)]
    version: (),

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short = 'd', long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Create a site directory with the default docsite.toml
    Init {
        /// Site directory
        #[arg(default_value = "docsite")]
        name: String,
    },
    /// Print the loaded site configuration
    Show,
    /// Export the site configuration for the site generator
    Export {
        #[arg(short = 'f', long, value_enum, default_value_t = Format::Js)]
        format: Format,

        /// Output file (defaults to stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub async fn start() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match cli.command {
        Commands::Init { name } => cmd::init(&name).await?,
        Commands::Show => cmd::show().await?,
        Commands::Export { format, output } => cmd::export(format, output).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn export_defaults_to_js() {
        let cli = Cli::try_parse_from(["docsite", "export"]).unwrap();
        match cli.command {
            Commands::Export { format, output } => {
                assert_eq!(format, Format::Js);
                assert!(output.is_none());
            }
            _ => panic!("expected the export command"),
        }
    }

    #[test]
    fn export_accepts_format_and_output() {
        let cli =
            Cli::try_parse_from(["docsite", "-d", "export", "-f", "json", "-o", "site.json"]).unwrap();
        assert!(cli.debug);
        match cli.command {
            Commands::Export { format, output } => {
                assert_eq!(format, Format::Json);
                assert_eq!(output, Some(PathBuf::from("site.json")));
            }
            _ => panic!("expected the export command"),
        }
    }

    #[test]
    fn init_has_a_default_name() {
        let cli = Cli::try_parse_from(["docsite", "init"]).unwrap();
        assert!(matches!(cli.command, Commands::Init { name } if name == "docsite"));
    }
}
