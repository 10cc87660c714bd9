use thiserror::Error;
use uom::si::f64::{ElectricalResistance, ThermodynamicTemperature};

/// Non-convergence outcomes of the Newton inversion.
///
/// Every variant is a normal, recoverable result: the solver could not
/// verify a temperature against its convergence test and says so, rather
/// than returning a guess. None of these abort the caller.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolveError {
    /// The target resistance is non-finite or not strictly positive, so no
    /// physical temperature can produce it.
    #[error("target resistance is not attainable by a resistive sensor: {target:?}")]
    UnattainableTarget { target: ElectricalResistance },

    /// The polynomial's slope vanished at the current estimate, making the
    /// Newton step a division by (near) zero.
    #[error("derivative vanished near {at:?}; cannot take a Newton step")]
    DegenerateSlope { at: ThermodynamicTemperature },

    /// An intermediate estimate became infinite or NaN.
    #[error("estimate became non-finite after {iters} iterations")]
    NonFinite { iters: usize },

    /// The iteration budget ran out before the step test passed.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Residual `R(t) - target` at the final estimate.
        residual: ElectricalResistance,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
