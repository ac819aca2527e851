//! Side-by-side run of the exact and greedy solvers.
//!
//! With the `parallel` feature the two solvers run as a `rayon::join` pair;
//! they share nothing but the borrowed instance, so the results are the same
//! either way.

use num_traits::AsPrimitive;
#[cfg(feature = "parallel")]
use rayon::join;

use crate::error::Result;
use crate::instance::Instance;
use crate::solution::{DpSolution, GreedySolution};
use crate::solvers::dp::DpSolver;
use crate::solvers::greedy::GreedySolver;
use crate::traits::{KnapsackSolver, Value};

/// Both solutions for one instance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(
        serialize = "V: serde::Serialize + Clone",
        deserialize = "V: serde::Deserialize<'de> + Clone"
    ))
)]
pub struct Comparison<V> {
    pub dp: DpSolution<V>,
    pub greedy: GreedySolution<V>,
}

impl<V: Value> Comparison<V> {
    /// How much value the heuristic left on the table; never negative.
    pub fn gap(&self) -> V {
        if self.dp.max_value > self.greedy.max_value {
            self.dp.max_value - self.greedy.max_value
        } else {
            V::zero()
        }
    }

    /// True if the heuristic reached the optimum.
    pub fn greedy_is_optimal(&self) -> bool {
        self.greedy.max_value >= self.dp.max_value
    }

    /// `greedy / dp` as a fraction in `[0, 1]`; 1 when the optimum is 0.
    pub fn greedy_ratio(&self) -> f64 {
        let dp: f64 = self.dp.max_value.as_();
        let greedy: f64 = self.greedy.max_value.as_();
        if dp > 0.0 {
            (greedy / dp).min(1.0)
        } else {
            1.0
        }
    }
}

#[cfg(feature = "parallel")]
fn solve_pair<V: Value>(
    dp: &DpSolver,
    instance: &Instance<'_, V>,
) -> (Result<DpSolution<V>>, Result<GreedySolution<V>>) {
    join(|| dp.solve(instance), || GreedySolver.solve(instance))
}

#[cfg(not(feature = "parallel"))]
fn solve_pair<V: Value>(
    dp: &DpSolver,
    instance: &Instance<'_, V>,
) -> (Result<DpSolution<V>>, Result<GreedySolution<V>>) {
    (dp.solve(instance), GreedySolver.solve(instance))
}

/// Run `dp` and the greedy solver on `instance`.
///
/// Fails if either solver fails; in practice only the DP table limits can.
pub fn compare<V: Value>(dp: &DpSolver, instance: &Instance<'_, V>) -> Result<Comparison<V>> {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!(
        "compare",
        items = instance.len(),
        capacity = instance.capacity()
    );
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let (dp, greedy) = solve_pair(dp, instance);
    Ok(Comparison {
        dp: dp?,
        greedy: greedy?,
    })
}
