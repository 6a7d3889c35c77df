//! In-memory table built from a pre-allocated arena of pages.
//!
//! Row numbers map to pages by plain division: row `n` lives at offset
//! `n % rows_per_page` of page `n / rows_per_page`. Pages fill strictly in
//! order, so the page at index `num_full_pages` is always the append target.

use tracing::debug;

use crate::error::{Error, Result};
use crate::page::Page;
use crate::row::Row;
use crate::{ROWS_PER_PAGE, TABLE_MAX_PAGES};

#[derive(Debug)]
pub struct Table {
    pages: Vec<Page>,
    rows_per_page: usize,
    num_rows: usize,
    num_full_pages: usize,
}

impl Table {
    /// Create a table with the default geometry of [`TABLE_MAX_PAGES`] pages
    /// of [`ROWS_PER_PAGE`] rows each.
    pub fn new() -> Self {
        Self::with_capacity(TABLE_MAX_PAGES, ROWS_PER_PAGE)
    }

    /// Create a table with `max_pages` pages of `rows_per_page` rows.
    /// Every page is allocated here; appends never allocate. Zero dimensions
    /// are clamped to one.
    pub fn with_capacity(max_pages: usize, rows_per_page: usize) -> Self {
        let max_pages = max_pages.max(1);
        let rows_per_page = rows_per_page.max(1);

        Self {
            pages: (0..max_pages).map(|_| Page::new(rows_per_page)).collect(),
            rows_per_page,
            num_rows: 0,
            num_full_pages: 0,
        }
    }

    /// Append `row` at row number `num_rows()`.
    ///
    /// Fails with [`Error::CapacityExceeded`] once every page is full, leaving
    /// the table untouched.
    pub fn append_row(&mut self, row: Row) -> Result<()> {
        if self.is_full() {
            return Err(Error::CapacityExceeded);
        }

        let page_index = self.num_full_pages;
        let page = self
            .pages
            .get_mut(page_index)
            .ok_or(Error::CapacityExceeded)?;
        page.append(row);
        let page_full = page.is_full();

        if page_full {
            self.num_full_pages += 1;
            debug!(
                page = page_index,
                next = self.num_full_pages,
                "page full, advancing append cursor"
            );
        }
        self.num_rows += 1;

        Ok(())
    }

    /// Fetch the row stored at `row_num`.
    pub fn get_row(&self, row_num: usize) -> Result<&Row> {
        let out_of_range = || Error::OutOfRange {
            row_num,
            num_rows: self.num_rows,
        };

        if row_num >= self.num_rows {
            return Err(out_of_range());
        }

        let page_index = row_num / self.rows_per_page;
        let offset = row_num % self.rows_per_page;
        self.pages
            .get(page_index)
            .and_then(|page| page.get(offset))
            .ok_or_else(out_of_range)
    }

    /// Iterate over all stored rows in row-number order.
    pub fn rows(&self) -> impl Iterator<Item = &Row> + '_ {
        self.pages.iter().flat_map(|page| page.rows().iter())
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_full_pages(&self) -> usize {
        self.num_full_pages
    }

    pub fn capacity(&self) -> usize {
        self.pages.len() * self.rows_per_page
    }

    pub fn is_full(&self) -> bool {
        self.num_rows >= self.capacity()
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}
