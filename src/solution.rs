//! Solution value objects returned by the solvers.

use std::fmt;

use crate::instance::{total_value, total_weight};
use crate::table::DpTable;
use crate::traits::Value;

/// Exact solution produced by [`DpSolver`](crate::solvers::dp::DpSolver).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(
        serialize = "V: serde::Serialize + Clone",
        deserialize = "V: serde::Deserialize<'de> + Clone"
    ))
)]
pub struct DpSolution<V> {
    /// `table[(n, capacity)]`, the optimum.
    pub max_value: V,
    /// Indices of the chosen items, ascending.
    pub selected_items: Vec<usize>,
    /// The full table the optimum was read from.
    pub table: DpTable<V>,
}

impl<V: Value> DpSolution<V> {
    /// Number of chosen items.
    #[inline]
    pub fn len(&self) -> usize {
        self.selected_items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.selected_items.is_empty()
    }

    /// Total weight of the chosen items.
    pub fn total_weight(&self, weights: &[u64]) -> u64 {
        total_weight(weights, &self.selected_items)
    }

    /// Total value of the chosen items; equals `max_value` up to float rounding.
    pub fn total_value(&self, values: &[V]) -> V {
        total_value(values, &self.selected_items)
    }

    /// Split into `(max_value, selected_items, table)`.
    pub fn into_parts(self) -> (V, Vec<usize>, DpTable<V>) {
        (self.max_value, self.selected_items, self.table)
    }
}

/// Heuristic solution produced by [`GreedySolver`](crate::solvers::greedy::GreedySolver).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreedySolution<V> {
    /// Sum of the accepted values.
    pub max_value: V,
    /// Indices of the accepted items, in acceptance (ratio) order.
    pub selected_items: Vec<usize>,
}

impl<V: Value> GreedySolution<V> {
    #[inline]
    pub fn len(&self) -> usize {
        self.selected_items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.selected_items.is_empty()
    }

    pub fn total_weight(&self, weights: &[u64]) -> u64 {
        total_weight(weights, &self.selected_items)
    }

    pub fn total_value(&self, values: &[V]) -> V {
        total_value(values, &self.selected_items)
    }
}

impl<V: fmt::Display> fmt::Display for DpSolution<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Optimal(value={}, items={:?})",
            self.max_value, self.selected_items
        )
    }
}

impl<V: fmt::Display> fmt::Display for GreedySolution<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Greedy(value={}, items={:?})",
            self.max_value, self.selected_items
        )
    }
}
