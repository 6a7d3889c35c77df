//! Statement execution against a [`Table`].

use std::io::Write;

use tracing::debug;

use crate::COLUMN_USERNAME_SIZE;
use crate::error::Result;
use crate::row::Row;
use crate::statement::Statement;
use crate::table::Table;

const ID_WIDTH: usize = 10;
const USERNAME_WIDTH: usize = COLUMN_USERNAME_SIZE;
const EMAIL_HEADER: &str = "email";

/// Run `statement` against `table`, writing any projected rows to `out`.
///
/// An insert that hits the capacity bound returns the error with the table
/// unchanged and the row dropped.
pub fn execute_statement<W: Write>(
    statement: Statement,
    table: &mut Table,
    out: &mut W,
) -> Result<()> {
    match statement {
        Statement::Insert(row) => execute_insert(row, table),
        Statement::Select => execute_select(table, out),
    }
}

fn execute_insert(row: Row, table: &mut Table) -> Result<()> {
    let id = row.id();
    table.append_row(row)?;
    debug!(id, num_rows = table.num_rows(), "row inserted");
    Ok(())
}

fn execute_select<W: Write>(table: &Table, out: &mut W) -> Result<()> {
    writeln!(out, "{}", format_line("id", "username", EMAIL_HEADER))?;
    writeln!(out, "{}", separator())?;
    for row in table.rows() {
        writeln!(out, "{}", format_row(row))?;
    }
    Ok(())
}

/// Render one row as a fixed-width projection line.
pub fn format_row(row: &Row) -> String {
    format_line(row.id(), row.username(), row.email())
}

fn format_line(id: impl std::fmt::Display, username: &str, email: &str) -> String {
    format!(
        "{:>id_w$} | {:<name_w$} | {}",
        id,
        username,
        email,
        id_w = ID_WIDTH,
        name_w = USERNAME_WIDTH
    )
}

fn separator() -> String {
    format!(
        "{}-+-{}-+-{}",
        "-".repeat(ID_WIDTH),
        "-".repeat(USERNAME_WIDTH),
        "-".repeat(EMAIL_HEADER.len())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn row(id: u32) -> Row {
        Row::new(id, format!("user{id}"), format!("person{id}@example.com")).unwrap()
    }

    fn select(table: &mut Table) -> Vec<String> {
        let mut out = Vec::new();
        execute_statement(Statement::Select, table, &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn select_on_empty_table_prints_only_header() {
        let lines = select(&mut Table::new());
        assert_eq!(lines.len(), 2);
        assert!(lines[0].trim_start().starts_with("id |"));
        assert!(lines[0].ends_with("| email"));
        assert!(lines[1].chars().all(|c| c == '-' || c == '+'));
    }

    #[test]
    fn select_renders_rows_in_insertion_order() {
        let mut table = Table::new();
        let mut sink = Vec::new();
        for id in 1..=10 {
            execute_statement(Statement::Insert(row(id)), &mut table, &mut sink).unwrap();
        }
        assert!(sink.is_empty());

        let lines = select(&mut table);
        assert_eq!(lines.len(), 12);
        for (line, id) in lines[2..].iter().zip(1..=10) {
            assert_eq!(line, &format_row(&row(id)));
        }

        execute_statement(Statement::Insert(row(11)), &mut table, &mut sink).unwrap();
        assert_eq!(table.num_full_pages(), 1);

        let lines = select(&mut table);
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[12], format_row(&row(11)));
    }

    #[test]
    fn format_row_pads_to_fixed_width() {
        let line = format_row(&row(7));
        assert_eq!(
            line,
            format!("         7 | {:<32} | person7@example.com", "user7")
        );
    }

    #[test]
    fn insert_into_full_table_leaves_it_unchanged() {
        let mut table = Table::with_capacity(1, 2);
        let mut sink = Vec::new();
        execute_statement(Statement::Insert(row(1)), &mut table, &mut sink).unwrap();
        execute_statement(Statement::Insert(row(2)), &mut table, &mut sink).unwrap();

        let err = execute_statement(Statement::Insert(row(3)), &mut table, &mut sink).unwrap_err();
        assert!(matches!(err, Error::CapacityExceeded));
        assert_eq!(table.num_rows(), 2);

        let lines = select(&mut table);
        assert_eq!(&lines[2..], &[format_row(&row(1)), format_row(&row(2))]);
    }
}
