use crate::solvers::dp::DpSolver;
use crate::utils::DEFAULT_MAX_CELLS;

/// Configures the cell limit of a [`DpSolver`].
///
/// ```
/// use knapsack_dp::DpSolverBuilder;
///
/// let solver = DpSolverBuilder::new().with_max_cells(1_000).build();
/// assert_eq!(solver.max_cells(), Some(1_000));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DpSolverBuilder {
    max_cells: Option<usize>,
    unbounded: bool,
}

impl DpSolverBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject tables with more than `max_cells` cells. Clears `unbounded`.
    ///
    /// `build` panics if this is zero.
    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = Some(max_cells);
        self.unbounded = false;
        self
    }

    /// Accept tables of any size.
    pub fn unbounded(mut self) -> Self {
        self.unbounded = true;
        self
    }

    pub fn build(self) -> DpSolver {
        if self.unbounded {
            return DpSolver::unbounded();
        }
        DpSolver::with_max_cells(self.max_cells.unwrap_or(DEFAULT_MAX_CELLS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_limit_falls_back_to_default() {
        assert_eq!(
            DpSolverBuilder::new().build().max_cells(),
            Some(DEFAULT_MAX_CELLS)
        );
    }

    #[test]
    fn last_setting_wins() {
        let solver = DpSolverBuilder::new().unbounded().with_max_cells(64).build();
        assert_eq!(solver.max_cells(), Some(64));
        let solver = DpSolverBuilder::new().with_max_cells(64).unbounded().build();
        assert_eq!(solver.max_cells(), None);
    }

    #[test]
    #[should_panic(expected = "max_cells must be positive")]
    fn zero_limit_is_rejected_on_build() {
        let _ = DpSolverBuilder::new().with_max_cells(0).build();
    }
}
