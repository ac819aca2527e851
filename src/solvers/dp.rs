//! Exact 0/1 knapsack via bottom-up dynamic programming.
//!
//! Rows are item prefixes (0..=n) and columns are capacities (0..=capacity).
//! Row `i` is built from row `i - 1` only:
//!
//! ```text
//! dp[i][j] = dp[i-1][j]                                   if w[i-1] > j
//!          = max(dp[i-1][j], dp[i-1][j - w[i-1]] + v[i-1]) otherwise
//! ```
//!
//! The whole table is kept because it is part of the solution. The chosen
//! items are recovered by walking from `(n, capacity)` back to row 0: an item
//! was taken exactly where a cell differs from the cell above it.

use crate::error::{Result, SolveError};
use crate::instance::Instance;
use crate::solution::DpSolution;
use crate::table::DpTable;
use crate::traits::{KnapsackSolver, Value};
use crate::utils::{cell_count, table_shape, DEFAULT_MAX_CELLS};

/// Exact dynamic-programming solver.
///
/// The only configuration is the cell limit guarding table allocation; see
/// [`DpSolverBuilder`](crate::builder::DpSolverBuilder).
///
/// ```
/// use knapsack_dp::{DpSolver, Instance, KnapsackSolver};
///
/// let weights = [1, 3, 4, 5];
/// let values = [1u32, 4, 5, 7];
/// let instance = Instance::new(&weights, &values, 7).unwrap();
/// let solution = DpSolver::new().solve(&instance).unwrap();
/// assert_eq!(solution.max_value, 9);
/// assert_eq!(solution.selected_items, vec![1, 2]);
/// assert_eq!(solution.table.dimensions(), (5, 8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DpSolver {
    max_cells: Option<usize>,
}

impl Default for DpSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl DpSolver {
    /// Solver limited to [`DEFAULT_MAX_CELLS`] table cells.
    pub fn new() -> Self {
        Self::with_max_cells(DEFAULT_MAX_CELLS)
    }

    /// Solver limited to `max_cells` table cells.
    ///
    /// # Panics
    /// Panics if `max_cells == 0`.
    pub fn with_max_cells(max_cells: usize) -> Self {
        assert!(max_cells > 0, "max_cells must be positive");
        Self {
            max_cells: Some(max_cells),
        }
    }

    /// Solver without a cell limit. Allocation failure is still reported.
    pub fn unbounded() -> Self {
        Self { max_cells: None }
    }

    /// The configured cell limit, `None` if unbounded.
    pub fn max_cells(&self) -> Option<usize> {
        self.max_cells
    }

    /// Check the table shape for `instance` against the limit.
    ///
    /// Returns `(rows, cols)` on success. Runs before anything is allocated.
    pub fn check_limits<V: Value>(&self, instance: &Instance<'_, V>) -> Result<(usize, usize)> {
        let (rows, cols) = table_shape(instance.len(), instance.capacity())?;
        let limit = self.max_cells.unwrap_or(usize::MAX);
        match cell_count(rows, cols) {
            Some(cells) if cells <= limit => Ok((rows, cols)),
            _ => {
                #[cfg(feature = "tracing")]
                tracing::debug!(rows, cols, limit, "DP table exceeds cell limit");
                Err(SolveError::TableTooLarge { rows, cols, limit })
            }
        }
    }
}

impl<V: Value> KnapsackSolver<V> for DpSolver {
    type Solution = DpSolution<V>;

    fn solve(&self, instance: &Instance<'_, V>) -> Result<DpSolution<V>> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "dp_solve",
            items = instance.len(),
            capacity = instance.capacity()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let (rows, cols) = self.check_limits(instance)?;
        let mut table = DpTable::zeroed(rows, cols)?;

        {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("fill_table", rows, cols);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            fill_table(&mut table, instance);
        }

        let capacity = cols - 1;
        let max_value = table[(rows - 1, capacity)];

        let selected_items = {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("backtrack");
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            backtrack(&table, instance.weights(), capacity)
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            max_value = ?max_value,
            selected = selected_items.len(),
            "dp solve finished"
        );

        Ok(DpSolution {
            max_value,
            selected_items,
            table,
        })
    }
}

/// Fill rows `1..=n`; row 0 stays zero.
fn fill_table<V: Value>(table: &mut DpTable<V>, instance: &Instance<'_, V>) {
    for item in instance.items() {
        let (prev, curr) = table.row_pair_mut(item.index + 1);
        let cols = curr.len();
        // A weight beyond the address space never fits.
        let w = usize::try_from(item.weight).unwrap_or(usize::MAX).min(cols);

        // Columns below the weight: the item cannot be taken.
        curr[..w].copy_from_slice(&prev[..w]);

        for j in w..cols {
            let exclude = prev[j];
            let include = prev[j - w] + item.value;
            // Ties keep the exclusion value.
            curr[j] = if include > exclude { include } else { exclude };
        }
    }
}

/// Recover the chosen items, ascending.
///
/// Walks rows `n..1` once. After the remaining capacity reaches zero the walk
/// still inspects column 0, where only a zero-weight item can differ from
/// the row above.
fn backtrack<V: Value>(table: &DpTable<V>, weights: &[u64], capacity: usize) -> Vec<usize> {
    let mut j = capacity;
    let mut selected = Vec::new();

    for i in (1..table.num_rows()).rev() {
        if table[(i, j)] != table[(i - 1, j)] {
            selected.push(i - 1);
            // A differing cell means the item fit, so its weight is <= j.
            j -= weights[i - 1] as usize;
        }
    }

    selected.reverse();
    selected
}

/// Validate `weights`/`values`/`capacity` and solve with the default limit.
pub fn solve_dp<V: Value>(weights: &[u64], values: &[V], capacity: u64) -> Result<DpSolution<V>> {
    let instance = Instance::new(weights, values, capacity)?;
    DpSolver::new().solve(&instance)
}
