//! The dynamic-programming table.
//!
//! A [`DpTable`] is a fixed-size, row-major grid of `(n + 1) x (capacity + 1)`
//! cells where `table[(i, j)]` is the best value achievable with the first
//! `i` items and total weight at most `j`. The buffer is allocated once at its
//! final size and is never resized.
//!
//! The table is part of the DP solution, so it also exposes a plain
//! rectangular grid view ([`DpTable::to_grid`]) for exporters.

use std::ops::Index;

use num_traits::Zero;
use thiserror::Error;

use crate::error::{Result, SolveError};

/// Row-major `(rows x cols)` grid of DP values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        into = "Vec<Vec<V>>",
        try_from = "Vec<Vec<V>>",
        bound(
            serialize = "V: serde::Serialize + Clone",
            deserialize = "V: serde::Deserialize<'de> + Clone"
        )
    )
)]
pub struct DpTable<V> {
    rows: usize,
    cols: usize,
    cells: Vec<V>,
}

/// Why a nested grid could not be turned into a [`DpTable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid has no rows")]
    NoRows,
    #[error("grid rows have no cells")]
    NoColumns,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl<V: Copy + Zero> DpTable<V> {
    /// Allocate a zero-filled table of exactly `rows * cols` cells.
    ///
    /// The caller has already checked the cell count against its limit;
    /// allocator refusal is reported rather than aborting.
    pub(crate) fn zeroed(rows: usize, cols: usize) -> Result<Self> {
        let len = rows
            .checked_mul(cols)
            .ok_or(SolveError::AllocationFailed { cells: usize::MAX })?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| SolveError::AllocationFailed { cells: len })?;
        cells.resize(len, V::zero());
        Ok(Self { rows, cols, cells })
    }
}

impl<V: Copy> DpTable<V> {
    /// Number of rows, `n + 1`.
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `capacity + 1`.
    #[inline]
    pub fn num_cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Never true for a table built by a solver.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell `(i, j)`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<V> {
        if i < self.rows && j < self.cols {
            Some(self.cells[i * self.cols + j])
        } else {
            None
        }
    }

    /// Row `i`, or `None` if out of bounds.
    pub fn row(&self, i: usize) -> Option<&[V]> {
        if i < self.rows {
            let start = i * self.cols;
            Some(&self.cells[start..start + self.cols])
        } else {
            None
        }
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[V]> + '_ {
        self.cells.chunks_exact(self.cols.max(1))
    }

    /// The row-major cell buffer.
    pub fn as_slice(&self) -> &[V] {
        &self.cells
    }

    /// Copy the table out as a nested rectangular grid.
    pub fn to_grid(&self) -> Vec<Vec<V>> {
        self.rows().map(<[V]>::to_vec).collect()
    }

    /// Previous row and mutable current row, for filling row `i >= 1`.
    pub(crate) fn row_pair_mut(&mut self, i: usize) -> (&[V], &mut [V]) {
        debug_assert!(i >= 1 && i < self.rows);
        let cols = self.cols;
        let (before, after) = self.cells.split_at_mut(i * cols);
        (&before[(i - 1) * cols..], &mut after[..cols])
    }
}

impl<V: Copy> Index<(usize, usize)> for DpTable<V> {
    type Output = V;

    /// # Panics
    /// Panics if `(i, j)` is outside the table.
    fn index(&self, (i, j): (usize, usize)) -> &V {
        assert!(
            i < self.rows && j < self.cols,
            "cell ({i}, {j}) outside {}x{} table",
            self.rows,
            self.cols
        );
        &self.cells[i * self.cols + j]
    }
}

impl<V: Clone> From<DpTable<V>> for Vec<Vec<V>> {
    fn from(table: DpTable<V>) -> Self {
        table
            .cells
            .chunks_exact(table.cols.max(1))
            .map(<[V]>::to_vec)
            .collect()
    }
}

impl<V> TryFrom<Vec<Vec<V>>> for DpTable<V> {
    type Error = GridError;

    fn try_from(grid: Vec<Vec<V>>) -> std::result::Result<Self, GridError> {
        let rows = grid.len();
        let cols = grid.first().map(Vec::len).ok_or(GridError::NoRows)?;
        if cols == 0 {
            return Err(GridError::NoColumns);
        }
        let mut cells = Vec::with_capacity(rows * cols);
        for (row, cells_in_row) in grid.into_iter().enumerate() {
            if cells_in_row.len() != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    found: cells_in_row.len(),
                });
            }
            cells.extend(cells_in_row);
        }
        Ok(Self { rows, cols, cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_table_has_exact_shape() {
        let t = DpTable::<u32>::zeroed(3, 4).unwrap();
        assert_eq!(t.dimensions(), (3, 4));
        assert_eq!(t.len(), 12);
        assert!(!t.is_empty());
        assert!(t.as_slice().iter().all(|&v| v == 0));
        assert_eq!(t.rows().len(), 3);
    }

    #[test]
    fn row_pair_mut_splits_adjacent_rows() {
        let mut t = DpTable::<u32>::zeroed(3, 2).unwrap();
        {
            let (prev, curr) = t.row_pair_mut(1);
            assert_eq!(prev, &[0, 0]);
            curr[0] = 5;
            curr[1] = 6;
        }
        {
            let (prev, curr) = t.row_pair_mut(2);
            assert_eq!(prev, &[5, 6]);
            curr[1] = 7;
        }
        assert_eq!(t.to_grid(), vec![vec![0, 0], vec![5, 6], vec![0, 7]]);
        assert_eq!(t[(2, 1)], 7);
        assert_eq!(t.get(1, 0), Some(5));
        assert_eq!(t.get(3, 0), None);
        assert_eq!(t.row(1), Some(&[5, 6][..]));
        assert_eq!(t.row(3), None);
    }

    #[test]
    #[should_panic(expected = "outside 1x1 table")]
    fn index_out_of_bounds_panics() {
        let t = DpTable::<u32>::zeroed(1, 1).unwrap();
        let _cell = t[(0, 1)];
    }

    #[test]
    fn grid_conversion_checks_shape() {
        let t = DpTable::try_from(vec![vec![0u8, 1], vec![2, 3]]).unwrap();
        assert_eq!(t.dimensions(), (2, 2));
        assert_eq!(Vec::<Vec<u8>>::from(t), vec![vec![0, 1], vec![2, 3]]);

        assert_eq!(
            DpTable::<u8>::try_from(Vec::new()).unwrap_err(),
            GridError::NoRows
        );
        assert_eq!(
            DpTable::<u8>::try_from(vec![vec![]]).unwrap_err(),
            GridError::NoColumns
        );
        assert_eq!(
            DpTable::try_from(vec![vec![0u8, 1], vec![2]]).unwrap_err(),
            GridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }
}
