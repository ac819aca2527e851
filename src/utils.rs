//! Assorted helpers for sizing the DP table.

use crate::error::{Result, SolveError};

/// Default upper bound on the number of DP table cells (2^26).
///
/// At 8 bytes per cell this caps a single solve at 512 MiB.
pub const DEFAULT_MAX_CELLS: usize = 1 << 26;

/// Table shape `(rows, cols)` for `items` items and the given capacity.
///
/// Rows are `items + 1` (the empty prefix included), columns are
/// `capacity + 1` (zero capacity included).
pub fn table_shape(items: usize, capacity: u64) -> Result<(usize, usize)> {
    let cols = usize::try_from(capacity)
        .ok()
        .and_then(|c| c.checked_add(1))
        .ok_or(SolveError::CapacityOverflow { capacity })?;
    let rows = items.saturating_add(1);
    Ok((rows, cols))
}

/// Number of cells in a `rows x cols` table, or `None` on overflow.
#[inline]
pub fn cell_count(rows: usize, cols: usize) -> Option<usize> {
    rows.checked_mul(cols)
}

#[cfg(test)]
mod tests {
    use super::{cell_count, table_shape};
    use crate::error::SolveError;

    #[test]
    fn shape_includes_empty_prefix_and_zero_capacity() {
        assert_eq!(table_shape(0, 0), Ok((1, 1)));
        assert_eq!(table_shape(4, 7), Ok((5, 8)));
        assert_eq!(table_shape(0, 10), Ok((1, 11)));
    }

    #[test]
    fn capacity_at_address_limit_overflows() {
        let capacity = usize::MAX as u64;
        assert_eq!(
            table_shape(1, capacity),
            Err(SolveError::CapacityOverflow { capacity })
        );
    }

    #[test]
    fn cell_count_detects_overflow() {
        assert_eq!(cell_count(5, 8), Some(40));
        assert_eq!(cell_count(usize::MAX, 2), None);
    }
}
