//! Error types for the knapsack solvers.
//!
//! Two families of failure exist: precondition violations in the input
//! (mismatched lengths, negative or infinite values, a value total that
//! overflows its type) and resource exhaustion when the DP
//! table would be too large to build. Neither produces a partial result.

use thiserror::Error;

/// Errors returned by instance validation and by the solvers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SolveError {
    /// `weights` and `values` describe a different number of items.
    #[error("weights and values must have equal length (got {weights} weights and {values} values)")]
    LengthMismatch { weights: usize, values: usize },

    /// A value is below zero, or is not a number at all.
    #[error("value of item {index} is negative or not a number")]
    NegativeValue { index: usize },

    /// A float value is infinite.
    #[error("value of item {index} is not finite")]
    NonFiniteValue { index: usize },

    /// The values of all items together do not fit the value type.
    #[error("sum of the {items} item values overflows the value type")]
    ValueOverflow { items: usize },

    /// `capacity + 1` columns cannot be addressed on this platform.
    #[error("capacity {capacity} is too large to index a table column")]
    CapacityOverflow { capacity: u64 },

    /// The DP table would exceed the configured cell limit.
    #[error("DP table of {rows} x {cols} cells exceeds the limit of {limit} cells")]
    TableTooLarge {
        rows: usize,
        cols: usize,
        limit: usize,
    },

    /// The allocator refused the table buffer.
    #[error("failed to allocate a DP table of {cells} cells")]
    AllocationFailed { cells: usize },
}

impl SolveError {
    /// Returns true if the request failed because the table is too large,
    /// i.e. the caller should reduce the capacity or the item count.
    pub fn is_resource_exhaustion(&self) -> bool {
        matches!(
            self,
            SolveError::CapacityOverflow { .. }
                | SolveError::TableTooLarge { .. }
                | SolveError::AllocationFailed { .. }
        )
    }
}

/// Result type alias for solver operations.
pub type Result<T> = std::result::Result<T, SolveError>;

#[cfg(test)]
mod tests {
    use super::SolveError;

    #[test]
    fn precondition_errors_are_not_resource_errors() {
        let err = SolveError::LengthMismatch {
            weights: 3,
            values: 2,
        };
        assert!(!err.is_resource_exhaustion());
        assert!(!SolveError::NegativeValue { index: 0 }.is_resource_exhaustion());
        assert!(!SolveError::NonFiniteValue { index: 0 }.is_resource_exhaustion());
        assert!(!SolveError::ValueOverflow { items: 2 }.is_resource_exhaustion());
    }

    #[test]
    fn table_errors_are_resource_errors() {
        let err = SolveError::TableTooLarge {
            rows: 10,
            cols: 10,
            limit: 50,
        };
        assert!(err.is_resource_exhaustion());
        assert!(SolveError::CapacityOverflow { capacity: u64::MAX }.is_resource_exhaustion());
        assert!(SolveError::AllocationFailed { cells: 1 }.is_resource_exhaustion());
    }

    #[test]
    fn messages_name_the_offending_numbers() {
        let err = SolveError::LengthMismatch {
            weights: 4,
            values: 3,
        };
        assert_eq!(
            err.to_string(),
            "weights and values must have equal length (got 4 weights and 3 values)"
        );
        let err = SolveError::TableTooLarge {
            rows: 5,
            cols: 101,
            limit: 100,
        };
        assert_eq!(
            err.to_string(),
            "DP table of 5 x 101 cells exceeds the limit of 100 cells"
        );
    }
}
