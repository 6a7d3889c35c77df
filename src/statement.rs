use crate::error::{Error, Result};
use crate::row::Row;

// Non-SQL statements like .exit are called "meta-commands".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaCommand {
    Exit,
    Unrecognized(String),
}

impl MetaCommand {
    pub fn parse(input: &str) -> Option<MetaCommand> {
        match input {
            ".exit" => Some(MetaCommand::Exit),
            _ if input.starts_with('.') => Some(MetaCommand::Unrecognized(input.to_string())),
            _ => None,
        }
    }
}

/// A prepared statement, ready for the executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Select,
    Insert(Row),
}

impl Statement {
    /// Prepare a statement from a normalized input line.
    ///
    /// `select` matches by prefix. `insert` must be followed by exactly
    /// three whitespace-separated tokens: a `u32` id, a username and an email.
    pub fn prepare(input: &str) -> Result<Statement> {
        if input.starts_with("select") {
            return Ok(Statement::Select);
        }

        if let Some(args) = input.strip_prefix("insert") {
            let tokens: Vec<&str> = args.split_whitespace().collect();
            let &[id, username, email] = tokens.as_slice() else {
                return Err(Error::SyntaxError(input.to_string()));
            };
            let id: u32 = id
                .parse()
                .map_err(|_| Error::SyntaxError(input.to_string()))?;

            return Ok(Statement::Insert(Row::new(id, username, email)?));
        }

        Err(Error::UnrecognizedCommand(input.to_string()))
    }
}

/// One classified input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputType {
    Empty,
    Meta(MetaCommand),
    Statement(Statement),
}

impl InputType {
    /// Classify a normalized line. Statement preparation errors are returned
    /// as-is; the line must not be executed.
    pub fn parse(input: &str) -> Result<InputType> {
        if input.is_empty() {
            return Ok(InputType::Empty);
        }
        if let Some(meta) = MetaCommand::parse(input) {
            return Ok(InputType::Meta(meta));
        }
        Statement::prepare(input).map(InputType::Statement)
    }
}

/// Trim surrounding whitespace and case-fold a raw input line.
pub fn normalize(line: &str) -> String {
    line.trim().to_lowercase()
}
