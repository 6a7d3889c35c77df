use crate::row::Row;

/// An append-only, insertion-ordered block of at most `capacity` rows.
///
/// The row buffer is reserved up front, so appending never reallocates.
/// Capacity is enforced by the owning [`Table`](crate::Table).
#[derive(Debug, Clone)]
pub struct Page {
    rows: Vec<Row>,
    capacity: usize,
}

impl Page {
    pub fn new(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append `row` to the end of the page.
    ///
    /// The caller must ensure the page is not full.
    pub fn append(&mut self, row: Row) {
        debug_assert!(!self.is_full(), "append to a full page");
        self.rows.push(row);
    }

    pub fn get(&self, offset: usize) -> Option<&Row> {
        self.rows.get(offset)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_full(&self) -> bool {
        self.rows.len() >= self.capacity
    }
}
