pub mod error;
pub mod executor;
pub mod page;
pub mod repl;
pub mod row;
pub mod statement;
pub mod table;

pub use error::{Error, Result};
pub use executor::execute_statement;
pub use page::Page;
pub use repl::Session;
pub use row::Row;
pub use statement::{InputType, MetaCommand, Statement};
pub use table::Table;

pub const COLUMN_USERNAME_SIZE: usize = 32;
pub const COLUMN_EMAIL_SIZE: usize = 255;

/// Longest accepted input line, newline excluded.
pub const MAX_LINE_LEN: usize = 64 * 1024;

pub const ROWS_PER_PAGE: usize = 10;
pub const TABLE_MAX_PAGES: usize = 100;
pub const TABLE_MAX_ROWS: usize = ROWS_PER_PAGE * TABLE_MAX_PAGES;
