use anyhow::{bail, Result};
use clap::Parser;
use std::io::{IsTerminal, Read};

mod app;
mod cli;
mod commands;
mod report;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut settings = quill_core::Settings::load();
    if let Some(ref model) = cli.model {
        settings.model = model.clone();
    }

    if cli.interactive {
        return app::run_interactive(settings).await;
    }

    if cli.clear_history {
        return app::clear_history(&settings.build_store()?);
    }

    let client = settings.build_client()?;

    let stdin = std::io::stdin();
    let mut piped = false;
    if !stdin.is_terminal() {
        let mut context = String::new();
        stdin.lock().read_to_string(&mut context)?;
        piped = !context.trim().is_empty();
        app::provide_context(&client, &context)?;
    }

    let prompt = cli.query.join(" ");
    if prompt.trim().is_empty() {
        if piped {
            return Ok(());
        }
        bail!("nothing to ask: pass a query, or use --interactive");
    }

    app::run_single_prompt(&client, &prompt, !cli.query_mode).await
}
