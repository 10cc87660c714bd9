use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

/// Solver configuration for the Newton inversion.
#[derive(Debug, Clone, Copy)]
pub struct SolveConfig {
    /// Starting estimate for the iteration.
    ///
    /// The default of 0 °C sits at the sensor's base-resistance point and
    /// serves every target near the calibrated range.
    pub initial_guess: ThermodynamicTemperature,

    /// Absolute tolerance on the step between consecutive estimates.
    ///
    /// This is the convergence criterion: the solve succeeds once a step
    /// falls below this threshold.
    pub step_tol: TemperatureInterval,

    /// Maximum iteration count before the solve gives up.
    pub max_iters: usize,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            initial_guess: ThermodynamicTemperature::new::<degree_celsius>(0.0),
            step_tol: TemperatureInterval::new::<delta_kelvin>(1e-6),
            max_iters: 50,
        }
    }
}
