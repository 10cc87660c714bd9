//! Inverse solver: resistance to temperature via Newton iteration.
//!
//! The forward polynomial has no convenient closed-form inverse once the
//! cubic sub-zero correction is in play, so inversion is an explicit Newton
//! iteration on the residual `f(t) = R(t) - target`, using the polynomial's
//! analytic slope. The convergence test and every failure mode are part of
//! the contract here rather than hidden inside a library root-finder; see
//! [`temperature_for`].

mod config;
mod error;

pub use config::SolveConfig;
pub use error::SolveError;

use uom::si::{
    electrical_resistance::ohm,
    f64::{ElectricalResistance, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use super::definition::SensorDefinition;

/// Slope magnitude (Ω/°C) below which a Newton step is considered
/// degenerate. The polynomial's slope only vanishes at a parabola vertex or
/// a cubic stationary point, both far outside every sensor's rated range.
const SLOPE_FLOOR: f64 = 1e-12;

/// Finds the temperature at which the sensor reads `target`.
///
/// Newton iteration starting from `config.initial_guess`: each step
/// evaluates the residual `f(t) = R(t) - target` and the analytic slope
/// `f'(t)`, then advances by `-f(t) / f'(t)`.
///
/// **Convergence test**: the iteration succeeds when the absolute step
/// between consecutive estimates falls below `config.step_tol`, and returns
/// the just-computed estimate. No other path returns a value: an estimate
/// that never passed the step test is never reported as an answer.
///
/// The default 0 °C starting point is adequate for targets near the sensor's
/// calibrated range. Targets far outside it may legitimately fail to
/// converge; that is reported as a [`SolveError`], never as a clamped or
/// partially-converged value.
///
/// # Errors
///
/// - [`SolveError::UnattainableTarget`]: `target` is non-finite or not
///   strictly positive. A resistive sensor cannot read such a value, and the
///   polynomial's unphysical extension is not searched for one.
/// - [`SolveError::DegenerateSlope`]: the slope magnitude fell below a
///   fixed floor, so the Newton step is numerically meaningless.
/// - [`SolveError::NonFinite`]: an intermediate estimate overflowed to
///   infinity or NaN.
/// - [`SolveError::MaxIters`]: the iteration budget ran out before the step
///   test passed; carries the last residual for diagnostics.
pub fn temperature_for(
    definition: &SensorDefinition,
    target: ElectricalResistance,
    config: &SolveConfig,
) -> Result<ThermodynamicTemperature, SolveError> {
    let target_ohms = target.get::<ohm>();
    if !target_ohms.is_finite() || target_ohms <= 0.0 {
        return Err(SolveError::UnattainableTarget { target });
    }

    let step_tol = config.step_tol.get::<delta_kelvin>();
    let mut t = config.initial_guess.get::<degree_celsius>();
    let mut residual = definition.resistance_ohms(t) - target_ohms;

    for iters in 1..=config.max_iters {
        let slope = definition.slope_ohms_per_celsius(t);
        if slope.abs() < SLOPE_FLOOR {
            return Err(SolveError::DegenerateSlope {
                at: ThermodynamicTemperature::new::<degree_celsius>(t),
            });
        }

        let next = t - residual / slope;
        if !next.is_finite() {
            return Err(SolveError::NonFinite { iters });
        }

        if (next - t).abs() < step_tol {
            return Ok(ThermodynamicTemperature::new::<degree_celsius>(next));
        }

        t = next;
        residual = definition.resistance_ohms(t) - target_ohms;
    }

    Err(SolveError::MaxIters {
        residual: ElectricalResistance::new::<ohm>(residual),
        iters: config.max_iters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::rtd::definition::Coefficients;
    use crate::models::rtd::registry::SensorRegistry;

    fn standard() -> SensorRegistry {
        SensorRegistry::standard().expect("standard catalog must build")
    }

    fn celsius(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(t)
    }

    fn ohms(r: f64) -> ElectricalResistance {
        ElectricalResistance::new::<ohm>(r)
    }

    #[test]
    fn pt100_inverts_the_tabulated_point() {
        let registry = standard();
        let pt100 = registry.lookup("PT100").expect("PT100 must be present");

        // 138.506 is the tabulated value rounded to three decimals; the exact
        // R(100 °C) is 138.5055 Ω, and that 0.0005 Ω maps through the
        // ~0.379 Ω/°C slope to ~1.3e-3 °C, so the inversion of the rounded
        // literal lands at 100.0013 °C.
        let solved = temperature_for(pt100, ohms(138.506), &SolveConfig::default())
            .expect("inversion near the calibrated range must converge");
        assert_relative_eq!(solved.get::<degree_celsius>(), 100.0, epsilon = 2e-3);
    }

    #[test]
    fn pt100_inverts_the_exact_forward_value() {
        let registry = standard();
        let pt100 = registry.lookup("PT100").expect("PT100 must be present");

        // Inverting the unrounded forward evaluation recovers the exact
        // temperature to well within the solver's step tolerance.
        let resistance = pt100.resistance_at(celsius(100.0));
        let solved = temperature_for(pt100, resistance, &SolveConfig::default())
            .expect("inversion of an exact forward value must converge");
        assert_relative_eq!(solved.get::<degree_celsius>(), 100.0, epsilon = 1e-6);
    }

    #[test]
    fn platinum_round_trip_over_rated_range() {
        let registry = standard();
        let pt100 = registry.lookup("PT100").expect("PT100 must be present");

        for t in (-200..=850).step_by(10) {
            let t = f64::from(t);
            let resistance = pt100.resistance_at(celsius(t));
            let back = temperature_for(pt100, resistance, &SolveConfig::default())
                .unwrap_or_else(|err| panic!("round trip at {t} °C failed: {err}"));
            assert_relative_eq!(back.get::<degree_celsius>(), t, epsilon = 1e-4);
        }
    }

    #[test]
    fn kty_round_trip_over_rated_range() {
        let registry = standard();
        let kty = registry.lookup("KTY81-110").expect("KTY81-110 must be present");

        for t in (-55..=150).step_by(5) {
            let t = f64::from(t);
            let resistance = kty.resistance_at(celsius(t));
            let back = temperature_for(kty, resistance, &SolveConfig::default())
                .unwrap_or_else(|err| panic!("round trip at {t} °C failed: {err}"));
            assert_relative_eq!(back.get::<degree_celsius>(), t, epsilon = 1e-4);
        }
    }

    #[test]
    fn negative_target_is_unattainable() {
        let registry = standard();
        let pt100 = registry.lookup("PT100").expect("PT100 must be present");

        let result = temperature_for(pt100, ohms(-100.0), &SolveConfig::default());
        assert!(matches!(
            result,
            Err(SolveError::UnattainableTarget { .. })
        ));

        let result = temperature_for(pt100, ohms(f64::NAN), &SolveConfig::default());
        assert!(matches!(
            result,
            Err(SolveError::UnattainableTarget { .. })
        ));
    }

    #[test]
    fn absurd_target_reports_non_convergence() {
        let registry = standard();
        let pt100 = registry.lookup("PT100").expect("PT100 must be present");

        // The PT100 polynomial peaks near 761 Ω; no temperature reads 1 MΩ,
        // so the solver must fail loudly rather than invent an answer.
        let result = temperature_for(pt100, ohms(1e6), &SolveConfig::default());
        match result {
            Err(SolveError::MaxIters { .. } | SolveError::NonFinite { .. }) => {}
            other => panic!("expected non-convergence, got: {other:?}"),
        }
    }

    #[test]
    fn flat_polynomial_reports_degenerate_slope() {
        // A constant-resistance "sensor" has zero slope everywhere; the very
        // first Newton step must be rejected as degenerate.
        let flat = SensorDefinition::new(
            "flat",
            ohms(100.0),
            Coefficients {
                a: 0.0,
                b: 0.0,
                c: 0.0,
            },
        )
        .expect("constant coefficients are structurally valid");

        let result = temperature_for(&flat, ohms(50.0), &SolveConfig::default());
        assert!(matches!(result, Err(SolveError::DegenerateSlope { .. })));
    }

    #[test]
    fn exhausted_budget_reports_max_iters() {
        let registry = standard();
        let pt100 = registry.lookup("PT100").expect("PT100 must be present");

        // One iteration is not enough to cross from 0 °C to 100 °C.
        let config = SolveConfig {
            max_iters: 1,
            ..SolveConfig::default()
        };
        let result = temperature_for(pt100, ohms(138.506), &config);
        assert!(matches!(result, Err(SolveError::MaxIters { iters: 1, .. })));
    }

    #[test]
    fn custom_initial_guess_is_honored() {
        let registry = standard();
        let pt100 = registry.lookup("PT100").expect("PT100 must be present");

        // Starting right next to the answer converges immediately.
        let config = SolveConfig {
            initial_guess: celsius(99.9),
            ..SolveConfig::default()
        };
        // Same rounded-target offset as in `pt100_inverts_the_tabulated_point`:
        // the exact root of R(t) = 138.506 Ω sits at 100.0013 °C.
        let solved = temperature_for(pt100, ohms(138.506), &config)
            .expect("a near-root guess must converge");
        assert_relative_eq!(solved.get::<degree_celsius>(), 100.0, epsilon = 2e-3);
    }
}
