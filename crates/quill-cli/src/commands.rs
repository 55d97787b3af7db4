/// Result of processing a slash command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResult {
    /// Display a message to the user.
    Message(String),
    /// Delete the stored conversation.
    Clear,
    /// Quit the application.
    Quit,
    /// Change the model.
    ModelChanged(String),
    /// Show the current model.
    ShowModel,
    /// Print the stored conversation.
    ShowHistory,
    /// Not a command - treat as regular input.
    NotACommand,
}

pub fn handle_command(input: &str) -> CommandResult {
    let parts: Vec<&str> = input.trim().splitn(2, ' ').collect();
    let cmd = parts[0];
    let arg = parts.get(1).map(|s| s.trim()).unwrap_or("");

    match cmd {
        "/help" | "/h" => show_help(),
        "/exit" | "/quit" | "/q" => CommandResult::Quit,
        "/clear" => CommandResult::Clear,
        "/history" => CommandResult::ShowHistory,
        "/model" => {
            if arg.is_empty() {
                CommandResult::ShowModel
            } else {
                CommandResult::ModelChanged(arg.to_string())
            }
        }
        "/version" => CommandResult::Message(format!("quill v{}", env!("CARGO_PKG_VERSION"))),

        // Unknown command
        _ => {
            if input.trim_start().starts_with('/') {
                CommandResult::Message(format!("Unknown command: {cmd}. Type /help for commands."))
            } else {
                CommandResult::NotACommand
            }
        }
    }
}

fn show_help() -> CommandResult {
    let help_text = "\
quill interactive commands

  /clear                    Clear conversation history
  /history                  Show the stored conversation
  /model [name]             Show or change the model
  /version                  Show version information
  /help, /h                 Show this help message
  /exit, /quit, /q          Quit

Anything else is sent as the next message.";

    CommandResult::Message(help_text.into())
}
