//! ZoneDex - Main entry point.

use std::io::{IsTerminal, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use zonedex_engine::api::{self, Cli};
use zonedex_engine::infrastructure::config::AppConfig;
use zonedex_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load environment from repo root, then the working directory.
    load_dotenv_from_repo_root();

    // Initialize logging (stderr, so rendered views on stdout stay clean)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zonedex_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::from_env();
    if let Some(path) = cli.catalog {
        config.catalog_path = path;
    }

    let app = App::from_config(&config).await;

    let color = std::io::stdout().is_terminal();
    let output = api::run(&app, cli.command, color).await?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.text.as_bytes())
        .context("Failed to write output")?;
    stdout.flush().context("Failed to flush output")?;

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
    let _ = dotenvy::dotenv();
}
