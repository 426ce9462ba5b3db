//! Error taxonomy for the simulation engines
//!
//! Every error is raised synchronously by the call that violates a contract
//! (construction, `configure`, `reset`/`resize`, or indexed access). Nothing is
//! deferred to `step()`, which cannot fail.

use thiserror::Error;

/// Errors returned by grid and engine operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Grid dimensions must both be at least 1.
    #[error("invalid grid dimensions {rows}x{cols}: both must be positive")]
    InvalidDimension {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// A simulation parameter is outside its valid domain.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name as it appears in the API.
        name: &'static str,
        /// Offending value, formatted for diagnostics.
        value: String,
        /// Constraint that was violated.
        reason: &'static str,
    },

    /// Indexed access outside the grid.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Grid row count.
        rows: usize,
        /// Grid column count.
        cols: usize,
    },

    /// An explicit initial state does not match the declared dimensions.
    #[error(
        "initial state is {found_rows}x{found_cols} but the grid is declared as {expected_rows}x{expected_cols}"
    )]
    DimensionMismatch {
        /// Declared row count.
        expected_rows: usize,
        /// Declared column count.
        expected_cols: usize,
        /// Row count of the supplied state.
        found_rows: usize,
        /// Column count of the first offending row of the supplied state.
        found_cols: usize,
    },
}

impl SimError {
    /// Create an `InvalidParameter` error for a probability outside `[0, 1]`.
    pub fn probability(name: &'static str, value: f64) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
            reason: "must be a probability in [0, 1]",
        }
    }
}

/// Result alias used across the crate.
pub type SimResult<T> = Result<T, SimError>;

/// Check that `value` is a probability, rejecting NaN.
///
/// # Errors
///
/// Returns [`SimError::InvalidParameter`] if `value` is NaN or outside `[0, 1]`.
pub fn check_probability(name: &'static str, value: f64) -> SimResult<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(SimError::probability(name, value))
    }
}
