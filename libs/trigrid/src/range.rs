//! # Grid Ranges
//!
//! Finite windows onto the infinite grid. The lattice never bounds itself;
//! consumers pick the window that covers their canvas or surface.

use config::constants::DEFAULT_CANVAS_EXTENT;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// One cell of the grid: row `i`, column `j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCell {
    /// Row index
    pub i: i32,
    /// Column index
    pub j: i32,
}

impl GridCell {
    /// Creates a cell.
    pub const fn new(i: i32, j: i32) -> Self {
        Self { i, j }
    }
}

impl From<(i32, i32)> for GridCell {
    fn from((i, j): (i32, i32)) -> Self {
        Self::new(i, j)
    }
}

/// A rectangular block of cells, half-open on both axes.
///
/// # Example
///
/// ```rust
/// use trigrid::{GridCell, GridRange};
///
/// let range = GridRange::new(0..2, 5..7);
/// let cells: Vec<GridCell> = range.cells().collect();
/// assert_eq!(
///     cells,
///     vec![
///         GridCell::new(0, 5),
///         GridCell::new(0, 6),
///         GridCell::new(1, 5),
///         GridCell::new(1, 6),
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridRange {
    /// Rows (`i`) covered
    pub rows: Range<i32>,
    /// Columns (`j`) covered
    pub cols: Range<i32>,
}

impl GridRange {
    /// Creates a range of rows × columns.
    pub fn new(rows: Range<i32>, cols: Range<i32>) -> Self {
        Self { rows, cols }
    }

    /// `-extent..extent` on both axes. A negative extent gives an empty
    /// range.
    pub fn square(extent: i32) -> Self {
        let start = extent.saturating_neg();
        Self::new(start..extent, start..extent)
    }

    /// Exact number of cells; any pair of `i32` ranges fits in a `u64`.
    pub fn cell_count(&self) -> u64 {
        self.rows.len() as u64 * self.cols.len() as u64
    }

    /// Number of cells, saturating at `usize::MAX` on narrow targets.
    pub fn len(&self) -> usize {
        usize::try_from(self.cell_count()).unwrap_or(usize::MAX)
    }

    /// True if the range covers no cells.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.cols.is_empty()
    }

    /// Whether `cell` falls inside the range.
    pub fn contains(&self, cell: GridCell) -> bool {
        self.rows.contains(&cell.i) && self.cols.contains(&cell.j)
    }

    /// Row-major iterator over the cells.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> {
        let cols = self.cols.clone();
        self.rows
            .clone()
            .flat_map(move |i| cols.clone().map(move |j| GridCell::new(i, j)))
    }
}

impl Default for GridRange {
    /// `-DEFAULT_CANVAS_EXTENT..DEFAULT_CANVAS_EXTENT` on both axes.
    fn default() -> Self {
        Self::square(DEFAULT_CANVAS_EXTENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_range() {
        let range = GridRange::square(50);
        assert_eq!(range.len(), 10_000);
        assert!(range.contains(GridCell::new(-50, 49)));
        assert!(!range.contains(GridCell::new(50, 0)));
    }

    #[test]
    fn test_empty_range() {
        let range = GridRange::new(3..3, 0..10);
        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
        assert_eq!(range.cells().count(), 0);
    }

    #[test]
    fn test_cells_row_major() {
        let first_row: Vec<_> = GridRange::new(-1..1, 0..3).cells().take(3).collect();
        assert!(first_row.iter().all(|cell| cell.i == -1));
        assert_eq!(first_row[2], GridCell::new(-1, 2));
    }

    #[test]
    fn test_default_range() {
        let range = GridRange::default();
        assert_eq!(range.rows, -DEFAULT_CANVAS_EXTENT..DEFAULT_CANVAS_EXTENT);
        assert_eq!(range.len(), (2 * DEFAULT_CANVAS_EXTENT as usize).pow(2));
    }

    #[test]
    fn test_full_lattice_count_does_not_wrap() {
        let range = GridRange::new(i32::MIN..i32::MAX, i32::MIN..i32::MAX);
        assert_eq!(range.cell_count(), u64::from(u32::MAX).pow(2));
        assert!(range.len() > config::constants::MAX_TRIANGLES);
    }

    #[test]
    fn test_square_of_extreme_extents() {
        assert!(GridRange::square(i32::MIN).is_empty());
        assert!(GridRange::square(-3).is_empty());
        assert_eq!(GridRange::square(i32::MAX).cell_count(), u64::from(u32::MAX - 1).pow(2));
    }

    #[test]
    fn test_cell_from_tuple() {
        assert_eq!(GridCell::from((4, -2)), GridCell::new(4, -2));
    }
}
