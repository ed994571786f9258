//! Cell occupancy index
//!
//! Column -> occupied rows. Keeps the generator from stacking two things on
//! the same cell.

use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Default)]
pub struct OccupancyIndex {
    columns: HashMap<i32, HashSet<i32>>,
}

impl OccupancyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        self.columns
            .get(&col)
            .is_some_and(|rows| rows.contains(&row))
    }

    /// Mark a cell; returns false if it was already taken
    pub fn mark_occupied(&mut self, row: i32, col: i32) -> bool {
        self.columns.entry(col).or_default().insert(row)
    }

    /// Forget every column left of `min_col`
    pub fn release_before(&mut self, min_col: i32) {
        self.columns.retain(|&col, _| col >= min_col);
    }

    pub fn clear(&mut self) {
        self.columns.clear();
    }

    /// Number of occupied cells
    pub fn len(&self) -> usize {
        self.columns.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.values().all(HashSet::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_and_query() {
        let mut index = OccupancyIndex::new();
        assert!(!index.is_occupied(0, 4));
        assert!(index.mark_occupied(0, 4));
        assert!(index.is_occupied(0, 4));
        assert!(!index.is_occupied(2, 4));
        assert!(!index.is_occupied(0, 5));
    }

    #[test]
    fn test_double_mark_is_rejected() {
        let mut index = OccupancyIndex::new();
        assert!(index.mark_occupied(2, 9));
        assert!(!index.mark_occupied(2, 9));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_release_before() {
        let mut index = OccupancyIndex::new();
        for col in 0..10 {
            index.mark_occupied(0, col);
        }
        index.release_before(6);
        assert_eq!(index.len(), 4);
        assert!(!index.is_occupied(0, 5));
        assert!(index.is_occupied(0, 6));
    }

    #[test]
    fn test_clear() {
        let mut index = OccupancyIndex::new();
        index.mark_occupied(1, 3);
        assert!(!index.is_empty());
        index.clear();
        assert!(index.is_empty());
        assert!(!index.is_occupied(1, 3));
    }
}
