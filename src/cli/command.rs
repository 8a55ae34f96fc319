use clap::Parser;

use crate::errors::AppError;

#[derive(Parser, Debug)]
#[command(name = "assistant-bot", version, about = "Interactive contact book assistant")]
pub struct Cli {}

/// Commands understood by the interactive loop.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    Exit,
}

/// Match the command word case-insensitively, like the prompt promises
/// for exit/close.
pub fn parse_command(word: &str) -> Result<Command, AppError> {
    match word.to_lowercase().as_str() {
        "hello" => Ok(Command::Hello),
        "add" => Ok(Command::Add),
        "change" => Ok(Command::Change),
        "phone" => Ok(Command::Phone),
        "all" => Ok(Command::All),
        "exit" | "close" => Ok(Command::Exit),
        _ => Err(AppError::ParseCommand(word.to_string())),
    }
}
