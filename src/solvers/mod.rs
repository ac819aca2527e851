//! Knapsack solving strategies.
//!
//! Both implement [`KnapsackSolver`](crate::traits::KnapsackSolver) over the
//! same [`Instance`](crate::instance::Instance):
//! - [`dp`]     : exact bottom-up dynamic programming with the full table.
//! - [`greedy`] : value-to-weight ratio heuristic, O(n log n).

pub mod dp;
pub mod greedy;
