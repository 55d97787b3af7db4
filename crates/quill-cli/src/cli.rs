use clap::Parser;

#[derive(Parser)]
#[command(name = "quill")]
#[command(about = "quill - multi-turn chat completions from the terminal")]
#[command(version)]
pub struct Cli {
    /// Message to send
    #[arg(trailing_var_arg = true)]
    pub query: Vec<String>,

    /// Wait for the full answer instead of streaming it
    #[arg(short = 'q', long = "query")]
    pub query_mode: bool,

    /// Start an interactive session
    #[arg(short, long, conflicts_with_all = ["query_mode", "query"])]
    pub interactive: bool,

    /// Delete the stored conversation and exit
    #[arg(long)]
    pub clear_history: bool,

    /// LLM model to use
    #[arg(short, long)]
    pub model: Option<String>,
}
