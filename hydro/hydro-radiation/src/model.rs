//! The public radiation-damping force model.

use std::io::Write;

use hydro_force::{Commands, ForceModel};
use hydro_types::{BodyStates, Dof, Environment, Point3, Wrench};

use crate::builder::RetardationBuilder;
use crate::config::RadiationConfig;
use crate::convolution::ConvolutionEngine;
use crate::debug_dump;
use crate::source::FrequencyDomainSource;
use crate::Result;

/// Radiation damping following the Cummins formulation.
///
/// Constructed once from a frequency-domain coefficient source and the
/// validated [`RadiationConfig`]; immutable afterwards. Every evaluation
/// computes the six window-averaged velocities over `tau max`, convolves the
/// mean-removed histories against the retardation kernels, applies the
/// forward-speed correction if configured, and returns the wrench at the
/// configured calculation point in the body frame.
///
/// Commands are unused: radiation damping is purely a function of motion
/// history.
#[derive(Debug)]
pub struct RadiationDampingForceModel {
    body_name: String,
    calculation_point: Point3<f64>,
    engine: ConvolutionEngine,
}

impl RadiationDampingForceModel {
    /// The discriminator under which this model appears in configuration.
    pub const MODEL_NAME: &'static str = "radiation damping";

    /// Build the model; diagnostic tables (if enabled) go to stderr.
    pub fn new(
        source: &dyn FrequencyDomainSource,
        config: &RadiationConfig,
        body_name: impl Into<String>,
    ) -> Result<Self> {
        Self::with_diagnostic_sink(source, config, body_name, &mut std::io::stderr())
    }

    /// Build the model with an explicit diagnostic sink.
    ///
    /// Builds all 36 damping kernels, plus the 36 added-mass kernels if and
    /// only if forward-speed correction is configured. Construction is the
    /// expensive step by design: per-step evaluation never re-fits anything.
    pub fn with_diagnostic_sink(
        source: &dyn FrequencyDomainSource,
        config: &RadiationConfig,
        body_name: impl Into<String>,
        sink: &mut dyn Write,
    ) -> Result<Self> {
        config.validate()?;

        let reference_speed = source.reference_forward_speed();
        if config.forward_speed_correction && reference_speed.abs() > 1e-3 {
            tracing::warn!(
                reference_speed,
                "forward speed correction is enabled but the coefficient database was computed \
                 at non-zero forward speed; the correction assumes zero-speed radiation data"
            );
        }

        let builder = RetardationBuilder::new(
            config.convolution_quadrature,
            config.cos_transform_quadrature,
        );
        let engine = ConvolutionEngine::new(
            source,
            builder,
            config.omega_min,
            config.omega_max,
            config.tau_min,
            config.tau_max,
            config.forward_speed_correction,
        )?;

        if config.output_br_and_k {
            tracing::warn!("dumping Br and K diagnostic tables; this is expensive");
            let taus = RetardationBuilder::regular_intervals(
                config.tau_min,
                config.tau_max,
                config.discretization_points,
            );
            debug_dump::dump_tables(sink, &engine, source.angular_frequencies(), &taus)?;
        }

        Ok(Self {
            body_name: body_name.into(),
            calculation_point: config.calculation_point,
            engine,
        })
    }

    /// The six velocity averages over the kernel support window.
    ///
    /// Recomputed every evaluation, never cached across calls: the window
    /// slides with the history.
    fn average_velocities(&self, states: &BodyStates) -> [f64; 6] {
        std::array::from_fn(|i| states.velocity(Dof::ALL[i]).average(self.engine.tau_max()))
    }
}

impl ForceModel for RadiationDampingForceModel {
    fn name(&self) -> &str {
        Self::MODEL_NAME
    }

    fn body_name(&self) -> &str {
        &self.body_name
    }

    fn history_span(&self) -> f64 {
        self.engine.tau_max()
    }

    fn get_force(
        &self,
        states: &BodyStates,
        _t: f64,
        _env: &Environment,
        _commands: &Commands,
    ) -> hydro_force::Result<Wrench> {
        let averages = self.average_velocities(states);
        let mut components = -self.engine.radiation_force(states, &averages);
        if self.engine.has_forward_speed_correction() {
            components += self.engine.forward_speed_term(states, &averages);
        }
        Ok(Wrench::from_vector(
            self.calculation_point,
            self.body_name.clone(),
            components,
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::config::RadiationConfig;
    use crate::source::TabulatedSource;
    use approx::assert_relative_eq;
    use hydro_quadrature::Quadrature;
    use hydro_types::{Matrix6, Vector6};

    const TAU_MIN: f64 = 0.2094395;
    const TAU_MAX: f64 = 10.0;
    const OMEGA_MAX: f64 = 30.0;

    fn config() -> RadiationConfig {
        RadiationConfig {
            cos_transform_quadrature: Quadrature::Simpson,
            convolution_quadrature: Quadrature::Simpson,
            discretization_points: 50,
            omega_min: 0.0,
            omega_max: OMEGA_MAX,
            tau_min: TAU_MIN,
            tau_max: TAU_MAX,
            output_br_and_k: false,
            calculation_point: Point3::origin(),
            forward_speed_correction: false,
        }
    }

    /// Diagonal-only source with constant damping `c` on every diagonal
    /// pair.
    fn diagonal_source(c: f64) -> TabulatedSource {
        let omegas = RetardationBuilder::regular_intervals(0.0, 40.0, 100);
        let n = omegas.len();
        let mut source = TabulatedSource::new(omegas).unwrap();
        for d in 0..6 {
            source = source.with_damping(d, d, vec![c; n]).unwrap();
        }
        source
    }

    /// Fully populated source: `Br(i, j) = 10(i+1) + (j+1)`, constant in ω.
    fn full_source() -> TabulatedSource {
        let omegas = RetardationBuilder::regular_intervals(0.0, 40.0, 100);
        let n = omegas.len();
        let mut source = TabulatedSource::new(omegas).unwrap();
        for i in 0..6 {
            for j in 0..6 {
                let c = 10.0 * (i + 1) as f64 + (j + 1) as f64;
                source = source.with_damping(i, j, vec![c; n]).unwrap();
            }
        }
        source
    }

    /// Record `value` on all six DOFs at time `t`.
    fn record_all(states: &mut BodyStates, t: f64, value: f64) {
        states.record(t, [value; 6]).unwrap();
    }

    /// Record a sinusoid of period `T` on all six DOFs over `periods`
    /// periods with `steps_per_period` samples per period; returns the end
    /// time.
    fn record_sine(
        states: &mut BodyStates,
        t_start: f64,
        period: f64,
        periods: u32,
        steps_per_period: u32,
        offset: f64,
    ) -> f64 {
        let t_end = f64::from(periods).mul_add(period, t_start);
        let steps = periods * steps_per_period;
        let dt = (t_end - t_start) / f64::from(steps);
        for i in 0..=steps {
            let t = dt.mul_add(f64::from(i), t_start);
            let value = offset + (2.0 * std::f64::consts::PI * (t - t_start) / period).sin();
            record_all(states, t, value);
        }
        t_end
    }

    /// Analytic kernel of a constant damping `c` over `[0, OMEGA_MAX]`.
    fn analytic_kernel(c: f64, tau: f64) -> f64 {
        std::f64::consts::FRAC_2_PI * c * (OMEGA_MAX * tau).sin() / tau
    }

    #[test]
    fn model_identity() {
        let model =
            RadiationDampingForceModel::new(&diagonal_source(100.0), &config(), "hull").unwrap();
        assert_eq!(model.name(), "radiation damping");
        assert_eq!(model.body_name(), "hull");
        assert_eq!(model.frame(), "hull");
    }

    #[test]
    fn model_declares_its_history_requirement() {
        let model =
            RadiationDampingForceModel::new(&diagonal_source(100.0), &config(), "hull").unwrap();
        assert_eq!(model.history_span(), TAU_MAX);
    }

    #[test]
    fn sinusoidal_history_matches_reference_quadrature() {
        let c = 1000.0;
        let model =
            RadiationDampingForceModel::new(&diagonal_source(c), &config(), "hull").unwrap();

        let mut states = BodyStates::new("hull", 100.0);
        let period = 10.0;
        let t_end = record_sine(&mut states, 0.0, period, 10, 100, 0.0);

        // At the end of a whole number of periods the lagged history reads
        // sin(-2πτ/T), so the expected force per DOF is
        //   -∫ K(τ)·sin(-2πτ/T) dτ
        // over the convolution support, here evaluated with an independent
        // adaptive rule against the analytic kernel.
        let expected = Quadrature::GaussKronrod.integrate(
            |tau| analytic_kernel(c, tau) * (2.0 * std::f64::consts::PI * tau / period).sin(),
            TAU_MIN,
            TAU_MAX,
            1e-10,
        );

        let wrench = model
            .get_force(&states, t_end, &Environment::default(), &Commands::empty())
            .unwrap();
        let v = wrench.to_vector();

        // Same data and same code path on every DOF.
        for k in 1..6 {
            assert_eq!(v[k], v[0]);
        }
        for k in 0..6 {
            assert_relative_eq!(v[k], expected, max_relative = 5e-2);
        }
    }

    #[test]
    fn constant_velocity_yields_zero_force() {
        let model =
            RadiationDampingForceModel::new(&diagonal_source(1000.0), &config(), "hull").unwrap();
        let mut states = BodyStates::new("hull", 100.0);
        let velocity = 7.341;
        record_all(&mut states, 0.0, velocity);
        record_all(&mut states, 100.0, velocity);

        let wrench = model
            .get_force(&states, 100.0, &Environment::default(), &Commands::empty())
            .unwrap();
        // Zero to quadrature tolerance: the model only reacts to velocity
        // changes relative to the mean.
        for k in 0..6 {
            assert!(wrench.to_vector()[k].abs() < 1e-6);
        }
    }

    #[test]
    fn velocity_offset_does_not_change_the_force() {
        let model =
            RadiationDampingForceModel::new(&diagonal_source(1000.0), &config(), "hull").unwrap();
        let env = Environment::default();

        let mut plain = BodyStates::new("hull", 100.0);
        let t_end = record_sine(&mut plain, 0.0, 10.0, 10, 100, 0.0);
        let mut offset = BodyStates::new("hull", 100.0);
        record_sine(&mut offset, 0.0, 10.0, 10, 100, 38.2);

        let f_plain = model
            .get_force(&plain, t_end, &env, &Commands::empty())
            .unwrap()
            .to_vector();
        let f_offset = model
            .get_force(&offset, t_end, &env, &Commands::empty())
            .unwrap()
            .to_vector();
        for k in 0..6 {
            assert_relative_eq!(f_plain[k], f_offset[k], max_relative = 5e-2);
        }
    }

    #[test]
    fn short_history_yields_exactly_zero_force() {
        let model =
            RadiationDampingForceModel::new(&diagonal_source(1000.0), &config(), "hull").unwrap();
        let mut states = BodyStates::new("hull", 100.0);
        record_all(&mut states, 0.0, 1.0);
        record_all(&mut states, TAU_MIN * 0.5, -1.0);

        let wrench = model
            .get_force(&states, 1.0, &Environment::default(), &Commands::empty())
            .unwrap();
        for k in 0..6 {
            assert_eq!(wrench.to_vector()[k], 0.0);
        }
    }

    #[test]
    fn matrix_product_assembles_rows_against_columns() {
        let mut cfg = config();
        cfg.convolution_quadrature = Quadrature::Rectangle;
        let model = RadiationDampingForceModel::new(&full_source(), &cfg, "hull").unwrap();

        // A pulse placed exactly on one node of the rectangle rule's fixed
        // grid, with a distinct amplitude per DOF.
        let h = (TAU_MAX - TAU_MIN) / 100.0;
        let tau0 = h.mul_add(50.0, TAU_MIN);
        let pulse_time = TAU_MAX - tau0;
        let eps = 1e-6;

        let mut states = BodyStates::new("hull", 100.0);
        let amplitudes = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        states.record(0.0, [0.0; 6]).unwrap();
        states.record(pulse_time - eps, [0.0; 6]).unwrap();
        states.record(pulse_time, amplitudes).unwrap();
        states.record(pulse_time + eps, [0.0; 6]).unwrap();
        states.record(TAU_MAX, [0.0; 6]).unwrap();

        let wrench = model
            .get_force(&states, TAU_MAX, &Environment::default(), &Commands::empty())
            .unwrap();
        let v = wrench.to_vector();

        // One node of the left-endpoint sum sees the pulse, so
        //   F_i = -h · k1(τ0) · Σ_j c_ij · v_j,  c_ij = 10(i+1) + (j+1),
        // where k1 is the unit-damping kernel.
        let k1 = analytic_kernel(1.0, tau0);
        for i in 0..6 {
            let coupled: f64 = (0..6)
                .map(|j| (10.0 * (i + 1) as f64 + (j + 1) as f64) * amplitudes[j])
                .sum();
            let expected = -h * k1 * coupled;
            assert_relative_eq!(v[i], expected, max_relative = 1e-2);
        }
    }

    #[test]
    fn forward_speed_correction_with_zero_coupling_data_is_inert() {
        // Ma ≡ 0 and A ≡ 0 make every Ka kernel zero, so enabling the
        // correction must not change the force.
        let source = diagonal_source(1000.0).with_asymptotic_added_mass(Matrix6::zeros());
        let plain = RadiationDampingForceModel::new(&source, &config(), "hull").unwrap();
        let mut cfg = config();
        cfg.forward_speed_correction = true;
        let corrected = RadiationDampingForceModel::new(&source, &cfg, "hull").unwrap();

        let mut states = BodyStates::new("hull", 100.0);
        let t_end = record_sine(&mut states, 0.0, 10.0, 10, 100, 0.5);

        let env = Environment::default();
        let f_plain = plain
            .get_force(&states, t_end, &env, &Commands::empty())
            .unwrap()
            .to_vector();
        let f_corrected = corrected
            .get_force(&states, t_end, &env, &Commands::empty())
            .unwrap()
            .to_vector();
        assert_eq!(f_plain, f_corrected);
    }

    #[test]
    fn forward_speed_outer_term_reaches_the_wrench() {
        // Zero damping everywhere: the whole force is A·Ls(Ū)·(v - v̄).
        let omegas = RetardationBuilder::regular_intervals(0.0, 40.0, 100);
        let asymptotic = Matrix6::from_fn(|i, j| 100.0 + i as f64 - 2.0 * j as f64);
        let source = TabulatedSource::new(omegas)
            .unwrap()
            .with_asymptotic_added_mass(asymptotic);
        let mut cfg = config();
        cfg.forward_speed_correction = true;
        let model = RadiationDampingForceModel::new(&source, &cfg, "hull").unwrap();

        // Constant for 20 s, then a final jump: the average barely moves,
        // the oscillation velocity is the jump.
        let mut states = BodyStates::new("hull", 100.0);
        states.record(0.0, [2.0, 1.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
        states.record(20.0, [2.0, 1.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
        states.record(20.001, [2.5, 1.0, 0.0, 0.0, 0.0, 0.3]).unwrap();

        let wrench = model
            .get_force(&states, 20.001, &Environment::default(), &Commands::empty())
            .unwrap();

        let averages: [f64; 6] = std::array::from_fn(|i| {
            states.velocity(Dof::ALL[i]).average(TAU_MAX)
        });
        let oscillation = Vector6::from_fn(|i, _| {
            states.velocity(Dof::ALL[i]).latest().unwrap() - averages[i]
        });
        // The jump also perturbs the window averages by ~1e-5, which leaks a
        // small residual through the corrected yaw column; the outer term
        // dominates by four orders of magnitude.
        let expected = asymptotic * ConvolutionEngine::ls_matrix(&averages) * oscillation;
        for k in 0..6 {
            assert_relative_eq!(wrench.to_vector()[k], expected[k], max_relative = 1e-3);
        }
    }

    #[test]
    fn diagnostic_tables_are_dumped_only_when_requested() {
        let source = diagonal_source(100.0);

        let mut sink = Vec::new();
        let mut cfg = config();
        cfg.discretization_points = 5;
        RadiationDampingForceModel::with_diagnostic_sink(&source, &cfg, "hull", &mut sink).unwrap();
        assert!(sink.is_empty());

        cfg.output_br_and_k = true;
        RadiationDampingForceModel::with_diagnostic_sink(&source, &cfg, "hull", &mut sink).unwrap();
        let text = String::from_utf8(sink).unwrap();
        assert!(text.contains("omega,Br_11,Br_12"));
        assert!(text.contains("tau,K_11,K_12"));
        assert!(text.contains("Br_66"));
        // One row per frequency sample plus one per tau sample, plus
        // headers and titles.
        assert!(text.lines().count() > 100);
    }
}
