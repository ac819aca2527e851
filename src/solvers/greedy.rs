//! Greedy 0/1 knapsack heuristic.
//!
//! Items are ordered by value-to-weight ratio, best first, and packed while
//! they fit. An item that does not fit is skipped for good; nothing is split.
//! The result is feasible but not necessarily optimal.
//!
//! Ordering is fully deterministic:
//! - a zero-weight item with positive value has ratio `+inf`; among those,
//!   higher value comes first;
//! - a zero-weight item with zero value has ratio 0;
//! - remaining ties keep input order (the sort is stable).

use std::cmp::Ordering;

use num_traits::AsPrimitive;

use crate::error::Result;
use crate::instance::{Instance, Item};
use crate::solution::GreedySolution;
use crate::traits::{KnapsackSolver, Value};

/// Ratio-ordered greedy solver. Stateless.
///
/// ```
/// use knapsack_dp::{GreedySolver, Instance, KnapsackSolver};
///
/// let weights = [10, 20, 30];
/// let values = [60u32, 100, 120];
/// let instance = Instance::new(&weights, &values, 50).unwrap();
/// let solution = GreedySolver.solve(&instance).unwrap();
/// assert_eq!(solution.max_value, 160);
/// assert_eq!(solution.selected_items, vec![0, 1]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreedySolver;

/// Sort key for one item.
#[derive(Debug, Clone, Copy)]
struct RatioKey {
    ratio: f64,
    /// Orders items sharing an infinite ratio; zero otherwise.
    free_value: f64,
}

impl RatioKey {
    fn of<V: Value>(item: &Item<V>) -> Self {
        let value: f64 = item.value.as_();
        if item.weight == 0 {
            if value > 0.0 {
                RatioKey {
                    ratio: f64::INFINITY,
                    free_value: value,
                }
            } else {
                RatioKey {
                    ratio: 0.0,
                    free_value: 0.0,
                }
            }
        } else {
            RatioKey {
                ratio: value / item.weight as f64,
                free_value: 0.0,
            }
        }
    }

    /// Descending on both fields.
    fn order(&self, other: &Self) -> Ordering {
        other
            .ratio
            .total_cmp(&self.ratio)
            .then_with(|| other.free_value.total_cmp(&self.free_value))
    }
}

/// Items in the order the greedy walk visits them.
pub fn ratio_order<V: Value>(instance: &Instance<'_, V>) -> Vec<Item<V>> {
    let mut keyed: Vec<(RatioKey, Item<V>)> = instance
        .items()
        .map(|item| (RatioKey::of(&item), item))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| a.order(b));
    keyed.into_iter().map(|(_, item)| item).collect()
}

impl<V: Value> KnapsackSolver<V> for GreedySolver {
    type Solution = GreedySolution<V>;

    fn solve(&self, instance: &Instance<'_, V>) -> Result<GreedySolution<V>> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "greedy_solve",
            items = instance.len(),
            capacity = instance.capacity()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut remaining = instance.capacity();
        let mut max_value = V::zero();
        let mut selected_items = Vec::new();

        for item in ratio_order(instance) {
            if item.weight <= remaining {
                selected_items.push(item.index);
                max_value = max_value + item.value;
                remaining -= item.weight;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            max_value = ?max_value,
            selected = selected_items.len(),
            remaining,
            "greedy solve finished"
        );

        Ok(GreedySolution {
            max_value,
            selected_items,
        })
    }
}

/// Validate `weights`/`values`/`capacity` and run the greedy solver.
pub fn solve_greedy<V: Value>(
    weights: &[u64],
    values: &[V],
    capacity: u64,
) -> Result<GreedySolution<V>> {
    let instance = Instance::new(weights, values, capacity)?;
    GreedySolver.solve(&instance)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_of(weights: &[u64], values: &[u32]) -> Vec<usize> {
        let instance = Instance::new(weights, values, 0).unwrap();
        ratio_order(&instance).iter().map(|item| item.index).collect()
    }

    #[test]
    fn picks_by_ratio_and_reports_acceptance_order() {
        // ratios 2.0, 6.0, 4.0
        let solution = solve_greedy(&[5, 10, 30], &[10u32, 60, 120], 40).unwrap();
        assert_eq!(solution.selected_items, vec![1, 2]);
        assert_eq!(solution.max_value, 180);
    }

    #[test]
    fn skipped_items_are_not_revisited_but_later_ones_still_fit() {
        // ratios 5.0, 4.5, 1.0: item 1 does not fit after item 0, item 2 does.
        let solution = solve_greedy(&[4, 4, 2], &[20u32, 18, 2], 6).unwrap();
        assert_eq!(solution.selected_items, vec![0, 2]);
        assert_eq!(solution.max_value, 22);
        assert_eq!(solution.total_weight(&[4, 4, 2]), 6);
    }

    #[test]
    fn equal_ratios_keep_input_order() {
        assert_eq!(order_of(&[2, 1, 4], &[4, 2, 8]), vec![0, 1, 2]);
    }

    #[test]
    fn free_items_come_first_by_value() {
        assert_eq!(order_of(&[3, 0, 0, 1], &[30, 2, 7, 1]), vec![2, 1, 0, 3]);
    }

    #[test]
    fn free_worthless_item_ranks_with_zero_ratio() {
        // item 0: ratio 0 (free, worthless); item 1: ratio 0 (weight 5, value 0)
        // item 2: ratio 1.0
        assert_eq!(order_of(&[0, 5, 2], &[0, 0, 2]), vec![2, 0, 1]);
    }

    #[test]
    fn zero_weight_item_taken_even_at_zero_capacity() {
        let solution = solve_greedy(&[0, 5], &[3u32, 10], 0).unwrap();
        assert_eq!(solution.selected_items, vec![0]);
        assert_eq!(solution.max_value, 3);
    }

    #[test]
    fn empty_instance_selects_nothing() {
        let solution = solve_greedy::<f64>(&[], &[], 3).unwrap();
        assert_eq!(solution.max_value, 0.0);
        assert!(solution.is_empty());
    }
}
