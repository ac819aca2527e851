//! Core trait definitions shared by the solvers.
//!
//! - [`Value`] is the numeric bound on item values. Any primitive integer or
//!   float satisfies it, so callers can solve over `u32` profits or `f64`
//!   scores with the same code.
//! - [`KnapsackSolver`] is the seam every strategy implements: it consumes a
//!   validated [`Instance`] and produces that strategy's solution type.

use std::fmt::Debug;
use std::ops::{Add, Sub};

use num_traits::{AsPrimitive, CheckedAdd, Zero};

use crate::error::Result;
use crate::instance::Instance;

/// Numeric type usable as an item value.
///
/// Values are summed along the DP recurrence and compared with `PartialOrd`;
/// the greedy ratio is computed in `f64` through [`AsPrimitive`].
/// Implemented for the primitive integer and float types.
pub trait Value:
    Copy
    + Debug
    + PartialOrd
    + Zero
    + Add<Output = Self>
    + Sub<Output = Self>
    + AsPrimitive<f64>
    + Send
    + Sync
{
    /// `self + rhs`, or `None` if the sum is not representable.
    ///
    /// Floats report `None` once the sum stops being finite.
    fn checked_sum(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_value_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Value for $t {
                #[inline]
                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &rhs)
                }
            }
        )*
    };
}

macro_rules! impl_value_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Value for $t {
                #[inline]
                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    let sum = self + rhs;
                    sum.is_finite().then_some(sum)
                }
            }
        )*
    };
}

impl_value_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_value_float!(f32, f64);

/// A strategy for the 0/1 knapsack problem.
///
/// Implementations must be pure: the same instance always yields the same
/// solution, and nothing outside `self` and the instance is read or written.
pub trait KnapsackSolver<V: Value> {
    /// What this strategy returns on success.
    type Solution;

    /// Solve `instance`.
    ///
    /// Either a complete solution is returned or an error; solvers never
    /// hand back partially built state.
    fn solve(&self, instance: &Instance<'_, V>) -> Result<Self::Solution>;
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn integer_sums_stop_at_the_type_limit() {
        assert_eq!(u32::MAX.checked_sum(0), Some(u32::MAX));
        assert_eq!(u32::MAX.checked_sum(1), None);
        assert_eq!(100i8.checked_sum(27), Some(127));
        assert_eq!(100i8.checked_sum(28), None);
    }

    #[test]
    fn float_sums_must_stay_finite() {
        assert_eq!(1.5f64.checked_sum(2.25), Some(3.75));
        assert_eq!(f64::MAX.checked_sum(f64::MAX), None);
        assert_eq!(f32::INFINITY.checked_sum(0.0), None);
    }
}
