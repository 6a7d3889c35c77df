use std::io::{BufRead, Read, Write};

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::executor::execute_statement;
use crate::statement::{InputType, MetaCommand, normalize};
use crate::table::Table;
use crate::MAX_LINE_LEN;

pub const PROMPT: &str = "db > ";

enum Flow {
    Continue,
    Exit,
}

enum Line {
    Eof,
    Text(String),
    TooLong,
}

/// A single shell session owning its table.
///
/// The table lives exactly as long as the session; nothing is persisted.
#[derive(Debug)]
pub struct Session {
    table: Table,
    interactive: bool,
}

impl Session {
    pub fn new(table: Table, interactive: bool) -> Self {
        Self { table, interactive }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Process `input` line by line until `.exit` or end of input.
    ///
    /// Statement errors are written to `out` and the loop continues. Only an
    /// I/O failure on `input` or `out` ends the session with an error.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<()> {
        info!(interactive = self.interactive, "session started");
        let mut buf = Vec::new();

        loop {
            if self.interactive {
                write!(out, "{PROMPT}")?;
                out.flush()?;
            }

            let line = match next_line(&mut input, &mut buf)? {
                Line::Eof => {
                    info!("end of input");
                    break;
                }
                Line::TooLong => {
                    report(&Error::LineTooLong { max: MAX_LINE_LEN }, out)?;
                    continue;
                }
                Line::Text(line) => line,
            };

            if let Flow::Exit = self.handle_line(&normalize(&line), out)? {
                info!("exit requested");
                break;
            }
        }

        out.flush()?;
        Ok(())
    }

    fn handle_line<W: Write>(&mut self, input: &str, out: &mut W) -> Result<Flow> {
        let statement = match InputType::parse(input) {
            Ok(InputType::Empty) => return Ok(Flow::Continue),
            Ok(InputType::Meta(MetaCommand::Exit)) => return Ok(Flow::Exit),
            Ok(InputType::Meta(MetaCommand::Unrecognized(command))) => {
                warn!(%command, "unrecognized meta-command");
                writeln!(out, "Unrecognized meta-command: {command}")?;
                return Ok(Flow::Continue);
            }
            Ok(InputType::Statement(statement)) => statement,
            Err(err) => {
                report(&err, out)?;
                return Ok(Flow::Continue);
            }
        };

        match execute_statement(statement, &mut self.table, out) {
            Ok(()) => writeln!(out, "Executed.")?,
            Err(err) if err.is_recoverable() => report(&err, out)?,
            Err(err) => return Err(err),
        }
        Ok(Flow::Continue)
    }
}

/// Read one line of at most [`MAX_LINE_LEN`] bytes. Invalid UTF-8 is
/// replaced rather than rejected, so a bad line fails as a statement.
fn next_line<R: BufRead>(input: &mut R, buf: &mut Vec<u8>) -> Result<Line> {
    buf.clear();
    let read = input
        .by_ref()
        .take(MAX_LINE_LEN as u64 + 1)
        .read_until(b'\n', buf)?;
    if read == 0 {
        return Ok(Line::Eof);
    }

    if buf.len() > MAX_LINE_LEN && buf.last() != Some(&b'\n') {
        skip_rest_of_line(input)?;
        return Ok(Line::TooLong);
    }

    Ok(Line::Text(String::from_utf8_lossy(buf).into_owned()))
}

fn skip_rest_of_line<R: BufRead>(input: &mut R) -> Result<()> {
    loop {
        let available = input.fill_buf()?;
        if available.is_empty() {
            return Ok(());
        }
        match available.iter().position(|&b| b == b'\n') {
            Some(pos) => {
                input.consume(pos + 1);
                return Ok(());
            }
            None => {
                let len = available.len();
                input.consume(len);
            }
        }
    }
}

fn report<W: Write>(err: &Error, out: &mut W) -> Result<()> {
    warn!(error = %err, "statement rejected");
    writeln!(out, "Error: {err}")?;
    Ok(())
}
