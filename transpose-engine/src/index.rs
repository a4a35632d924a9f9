//! Row offset index.
//!
//! One byte offset per source row, pointing at the first not-yet-consumed
//! field of that row. Offsets only move forward: pass 0 records the start of
//! each row (past any leading separators), and every consumed field advances
//! its row's offset by the field's length plus one separator, so the next
//! pass resumes exactly where this one left off without re-scanning.

/// Flat offset arena keyed by source row number.
#[derive(Debug, Default)]
pub struct RowIndex {
    offsets: Vec<u64>,
}

impl RowIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the offset at which field-reading for `row` should resume.
    /// Rows are recorded in order; re-recording an existing row overwrites.
    pub fn record(&mut self, row: usize, offset: u64) {
        if row == self.offsets.len() {
            self.offsets.push(offset);
        } else {
            self.offsets[row] = offset;
        }
    }

    /// Advance `row`'s offset past `bytes` consumed bytes.
    pub fn advance(&mut self, row: usize, bytes: u64) {
        self.offsets[row] += bytes;
    }

    /// Offset of the next unread field of `row`.
    pub fn get(&self, row: usize) -> u64 {
        self.offsets[row]
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_in_order() {
        let mut idx = RowIndex::new();
        idx.record(0, 0);
        idx.record(1, 10);
        idx.record(2, 25);
        assert_eq!(idx.len(), 3);
        assert_eq!(idx.get(1), 10);
    }

    #[test]
    fn test_advance_moves_forward() {
        let mut idx = RowIndex::new();
        idx.record(0, 0);
        idx.advance(0, 4);
        idx.advance(0, 3);
        assert_eq!(idx.get(0), 7);
    }

    #[test]
    fn test_record_overwrites() {
        let mut idx = RowIndex::new();
        idx.record(0, 0);
        idx.record(0, 2);
        assert_eq!(idx.get(0), 2);
        assert_eq!(idx.len(), 1);
    }
}
