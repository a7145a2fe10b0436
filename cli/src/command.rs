//! Parsing of interactive input lines.

use items_core::{ItemId, SortOrder};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  list                                  show the items
  sort <none|asc|desc>                  change the display order
  add <title> | <description>           create an item
  edit <id> <title> | <description>     replace an item's text
  delete <id>                           delete an item
  reload                                fetch the items again
  help                                  show this text
  quit                                  leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Sort(SortOrder),
    Add { title: String, description: String },
    Edit { id: ItemId, title: String, description: String },
    Delete(ItemId),
    Reload,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`; type `help`")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("not an item id: `{0}`")]
    InvalidId(String),

    #[error("{0}")]
    InvalidSort(String),
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "list" | "ls" => Command::List,
        "sort" => {
            if rest.is_empty() {
                return Err(CommandError::Usage("sort <none|asc|desc>"));
            }
            Command::Sort(rest.parse().map_err(CommandError::InvalidSort)?)
        }
        "add" | "new" => {
            let (title, description) =
                split_text(rest).ok_or(CommandError::Usage("add <title> | <description>"))?;
            Command::Add { title, description }
        }
        "edit" => {
            let (id, text) = rest
                .split_once(char::is_whitespace)
                .ok_or(CommandError::Usage("edit <id> <title> | <description>"))?;
            let id = parse_id(id)?;
            let (title, description) =
                split_text(text).ok_or(CommandError::Usage("edit <id> <title> | <description>"))?;
            Command::Edit { id, title, description }
        }
        "delete" | "rm" => {
            if rest.is_empty() {
                return Err(CommandError::Usage("delete <id>"));
            }
            Command::Delete(parse_id(rest)?)
        }
        "reload" => Command::Reload,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => return Err(CommandError::Unknown(word.to_string())),
    };

    Ok(Some(command))
}

fn parse_id(raw: &str) -> Result<ItemId, CommandError> {
    raw.trim()
        .parse()
        .map_err(|_| CommandError::InvalidId(raw.trim().to_string()))
}

/// Split `title | description`. Both halves are trimmed; either may be empty.
fn split_text(text: &str) -> Option<(String, String)> {
    let (title, description) = text.split_once('|')?;
    Some((title.trim().to_string(), description.trim().to_string()))
}
