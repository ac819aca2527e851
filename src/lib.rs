//! 0/1 knapsack solvers: exact dynamic programming and a greedy heuristic.
//!
//! Given items with integer weights and non-negative values plus a capacity,
//! choose a subset of maximum total value whose total weight fits.
//!
//! ## Strategies
//! - [`DpSolver`] builds the full `(n + 1) x (capacity + 1)` table bottom-up
//!   and backtracks through it. The result is optimal, and the table itself
//!   is returned for inspection or export. O(n · capacity) time and space.
//! - [`GreedySolver`] packs items in descending value-to-weight order.
//!   O(n log n), feasible, not always optimal.
//!
//! Both are pure: they borrow a validated [`Instance`] and return an owned
//! solution or a [`SolveError`]. [`compare`] runs both on one instance.
//!
//! ## Quick start
//! ```
//! use knapsack_dp::{compare, DpSolver, Instance};
//!
//! let weights = [10, 20, 30];
//! let values = [60u32, 100, 120];
//! let instance = Instance::new(&weights, &values, 50).unwrap();
//!
//! let cmp = compare(&DpSolver::new(), &instance).unwrap();
//! assert_eq!(cmp.dp.max_value, 220);
//! assert_eq!(cmp.dp.selected_items, vec![1, 2]);
//! assert_eq!(cmp.greedy.max_value, 160);
//! assert_eq!(cmp.gap(), 60);
//! ```
//!
//! ## Resource limits
//! The table is checked against a cell limit before it is allocated
//! ([`DEFAULT_MAX_CELLS`] unless configured through [`DpSolverBuilder`]).
//! Oversized requests fail with an error for which
//! [`SolveError::is_resource_exhaustion`] is true.
//!
//! ## Features
//! - `tracing`: spans around each solve and debug events on rejection.
//! - `parallel`: [`compare`] runs both solvers through `rayon::join`.
//! - `serde`: `Serialize`/`Deserialize` for solutions and the table.

pub mod builder;
pub mod compare;
pub mod error;
pub mod instance;
pub mod solution;
pub mod solvers;
pub mod table;
pub mod traits;
pub mod utils;

pub use crate::builder::DpSolverBuilder;
pub use crate::compare::{compare, Comparison};
pub use crate::error::{Result, SolveError};
pub use crate::instance::{Instance, Item};
pub use crate::solution::{DpSolution, GreedySolution};
pub use crate::solvers::dp::{solve_dp, DpSolver};
pub use crate::solvers::greedy::{solve_greedy, GreedySolver};
pub use crate::table::DpTable;
pub use crate::traits::{KnapsackSolver, Value};
pub use crate::utils::DEFAULT_MAX_CELLS;
