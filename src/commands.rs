//! User-facing commands and the actions they trigger

/// Action performed by a scratch command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScratchAction {
    /// Show the scratch buffer, reusing the current window when it is safe
    Open,
    /// Show the scratch buffer in a new split
    Split,
}

/// A command that can be bound to a key or invoked by name
#[derive(Debug, Clone)]
pub struct Command {
    /// Command name (e.g., "Scratch")
    pub name: String,
    /// Command description
    pub description: String,
    /// The action to trigger
    pub action: ScratchAction,
}

/// Get all available scratch commands
pub fn get_all_commands() -> Vec<Command> {
    vec![
        Command {
            name: "Scratch".to_string(),
            description: "Open the scratch buffer in the current window".to_string(),
            action: ScratchAction::Open,
        },
        Command {
            name: "ScratchSplit".to_string(),
            description: "Open the scratch buffer in a new split".to_string(),
            action: ScratchAction::Split,
        },
    ]
}

/// Look up a command by name, ignoring case
pub fn find_command(name: &str) -> Option<Command> {
    get_all_commands()
        .into_iter()
        .find(|cmd| cmd.name.eq_ignore_ascii_case(name))
}
