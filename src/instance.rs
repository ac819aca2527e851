//! Validated knapsack input.
//!
//! An [`Instance`] borrows the caller's parallel `weights`/`values` slices
//! together with the capacity. Construction checks the preconditions shared
//! by every solver, so the solvers themselves never re-validate.

use std::cmp::Ordering;

use num_traits::AsPrimitive;

use crate::error::{Result, SolveError};
use crate::traits::Value;

/// One item of an instance, identified by its position in the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item<V> {
    pub index: usize,
    pub weight: u64,
    pub value: V,
}

/// A 0/1 knapsack instance over borrowed input slices.
///
/// Invariants, checked by [`Instance::new`]:
/// - `weights.len() == values.len()`;
/// - every value compares `>=` zero (for floats this also rules out NaN);
/// - every value is finite;
/// - the sum of all values fits `V`.
///
/// Every DP cell and every greedy running total is the sum of a subset of
/// the values, so the last check keeps both solvers free of overflow.
///
/// Weights are unsigned, so negative weights cannot be expressed.
#[derive(Debug, Clone, Copy)]
pub struct Instance<'a, V> {
    weights: &'a [u64],
    values: &'a [V],
    capacity: u64,
}

impl<'a, V: Value> Instance<'a, V> {
    pub fn new(weights: &'a [u64], values: &'a [V], capacity: u64) -> Result<Self> {
        if weights.len() != values.len() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                weights = weights.len(),
                values = values.len(),
                "rejecting instance with mismatched lengths"
            );
            return Err(SolveError::LengthMismatch {
                weights: weights.len(),
                values: values.len(),
            });
        }

        let zero = V::zero();
        if let Some(index) = values.iter().position(|v| {
            matches!(v.partial_cmp(&zero), None | Some(Ordering::Less))
        }) {
            #[cfg(feature = "tracing")]
            tracing::debug!(index, "rejecting instance with a negative value");
            return Err(SolveError::NegativeValue { index });
        }

        if let Some(index) = values.iter().position(|&v| {
            let v: f64 = v.as_();
            !v.is_finite()
        }) {
            #[cfg(feature = "tracing")]
            tracing::debug!(index, "rejecting instance with a non-finite value");
            return Err(SolveError::NonFiniteValue { index });
        }

        if values
            .iter()
            .try_fold(V::zero(), |acc, &v| acc.checked_sum(v))
            .is_none()
        {
            #[cfg(feature = "tracing")]
            tracing::debug!(items = values.len(), "rejecting instance whose values overflow");
            return Err(SolveError::ValueOverflow {
                items: values.len(),
            });
        }

        Ok(Self {
            weights,
            values,
            capacity,
        })
    }

    pub fn weights(&self) -> &'a [u64] {
        self.weights
    }

    pub fn values(&self) -> &'a [V] {
        self.values
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Items in input order.
    pub fn items(&self) -> impl ExactSizeIterator<Item = Item<V>> + 'a {
        self.weights
            .iter()
            .zip(self.values)
            .enumerate()
            .map(|(index, (&weight, &value))| Item {
                index,
                weight,
                value,
            })
    }
}

/// Sum of the weights of the items at `indices`, saturating at `u64::MAX`.
///
/// # Panics
/// Panics if an index is out of bounds for `weights`.
pub fn total_weight(weights: &[u64], indices: &[usize]) -> u64 {
    indices
        .iter()
        .fold(0u64, |acc, &i| acc.saturating_add(weights[i]))
}

/// Sum of the values of the items at `indices`.
///
/// # Panics
/// Panics if an index is out of bounds for `values`.
pub fn total_value<V: Value>(values: &[V], indices: &[usize]) -> V {
    indices.iter().fold(V::zero(), |acc, &i| acc + values[i])
}
