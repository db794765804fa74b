mod commands;
mod input;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use bump_api::{Client, ClientConfig};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bump")]
#[command(version, about = "Validate and preview API documentation on bump.sh")]
struct Cli {
    /// Base URL of the Bump API
    #[arg(long, env = "BUMP_API_URL", global = true)]
    api_url: Option<String>,

    /// Base URL used to build preview links
    #[arg(long, env = "BUMP_ROOT_URL", global = true)]
    root_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a given file against its schema definition
    Validate(commands::validate::ValidateArgs),
    /// Create a documentation preview for the given file
    Preview(commands::preview::PreviewArgs),
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::default();
        if let Some(url) = &self.api_url {
            config = config.with_api_url(url);
        }
        if let Some(url) = &self.root_url {
            config = config.with_root_url(url);
        }
        config
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = Client::new(cli.client_config())?;

    let result = match &cli.command {
        Commands::Validate(args) => commands::validate::run(args, &client).await,
        Commands::Preview(args) => commands::preview::run(args, &client).await,
    };

    Ok(match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => output::report_error(&err),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_validate_with_all_options() {
        let cli = Cli::try_parse_from([
            "bump",
            "validate",
            "path/to/file",
            "--id",
            "1",
            "--token",
            "token",
            "--specification",
            "api-blueprint/v1a9",
        ])
        .unwrap();
        match cli.command {
            Commands::Validate(args) => {
                assert_eq!(args.file, "path/to/file");
                assert_eq!(args.id, "1");
                assert_eq!(args.token, "token");
                assert_eq!(args.specification.as_deref(), Some("api-blueprint/v1a9"));
            }
            Commands::Preview(_) => panic!("expected validate"),
        }
    }

    #[test]
    fn parses_preview_without_specification() {
        let cli = Cli::try_parse_from(["bump", "preview", "openapi.yml"]).unwrap();
        match cli.command {
            Commands::Preview(args) => {
                assert_eq!(args.file, "openapi.yml");
                assert!(args.specification.is_none());
            }
            Commands::Validate(_) => panic!("expected preview"),
        }
    }

    #[test]
    fn preview_requires_a_file() {
        assert!(Cli::try_parse_from(["bump", "preview"]).is_err());
    }

    #[test]
    fn url_flags_override_config() {
        let cli = Cli::try_parse_from([
            "bump",
            "preview",
            "openapi.yml",
            "--api-url",
            "http://localhost:3000/api/v1",
            "--root-url",
            "http://localhost:3000",
        ])
        .unwrap();
        let config = cli.client_config();
        assert_eq!(config.api_url, "http://localhost:3000/api/v1");
        assert_eq!(config.root_url, "http://localhost:3000");
    }
}
