use anyhow::Result;
use quill_core::{Client, HistoryStore, Settings};
use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::commands::{self, CommandResult};
use crate::report::finish;

// ── Single-prompt mode ──────────────────────────────────────────────────

pub async fn run_single_prompt(client: &Client, prompt: &str, stream: bool) -> Result<()> {
    if stream {
        let result = stream_answer(client, prompt).await;
        finish(result, true, &mut io::stdout())
    } else {
        let result = client.query(prompt).await;
        if let Ok(ref answer) = result {
            println!("{answer}");
        }
        finish(result, false, &mut io::stdout())
    }
}

pub fn provide_context(client: &Client, context: &str) -> Result<()> {
    let context = context.trim();
    if context.is_empty() {
        return Ok(());
    }
    debug!(bytes = context.len(), "Providing piped context");
    client.provide_context(context)?;
    Ok(())
}

pub fn clear_history(store: &dyn HistoryStore) -> Result<()> {
    store.delete()?;
    eprintln!("History cleared.");
    Ok(())
}

// ── Interactive mode ────────────────────────────────────────────────────

pub async fn run_interactive(mut settings: Settings) -> Result<()> {
    let mut client = settings.build_client()?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("quill interactive mode ({}). Type /help for commands.", client.model());
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match commands::handle_command(input) {
            CommandResult::Quit => break,
            CommandResult::Message(msg) => println!("{msg}"),
            CommandResult::Clear => {
                if let Err(e) = client.clear_history() {
                    eprintln!("Error: {e}");
                } else {
                    println!("History cleared.");
                }
            }
            CommandResult::ShowModel => println!("Model: {}", client.model()),
            CommandResult::ModelChanged(model) => {
                settings.model = model;
                client = settings.build_client()?;
                println!("Model set to {}", client.model());
            }
            CommandResult::ShowHistory => match client.history() {
                Ok(messages) if messages.is_empty() => println!("(no history)"),
                Ok(messages) => {
                    for message in messages {
                        println!("[{}] {}", message.role, message.content);
                    }
                }
                Err(e) => eprintln!("Error: {e}"),
            },
            CommandResult::NotACommand => {
                let result = stream_answer(&client, input).await;
                if let Err(e) = finish(result, true, &mut io::stdout()) {
                    eprintln!("Error: {e}");
                }
            }
        }
    }

    Ok(())
}

// ── Helpers ─────────────────────────────────────────────────────────────

async fn stream_answer(client: &Client, prompt: &str) -> quill_core::Result<String> {
    let result = client
        .stream(prompt, |delta| {
            print!("{delta}");
            let _ = io::stdout().flush();
        })
        .await;
    println!();
    result
}
