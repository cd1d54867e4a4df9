//! Construction of retardation functions from frequency-domain data.

use hydro_quadrature::Quadrature;

use crate::interpolator::LinearInterpolator;
use crate::Result;

/// Quadrature tolerance used for kernel construction.
///
/// Fixed here rather than configurable: the adaptive rules converge well
/// below it on real damping curves, and exposing it per model would only
/// invite inconsistent retardation tables between force models.
pub const DEFAULT_TOLERANCE: f64 = 1e-3;

/// Builds retardation (impulse-response) kernels and evaluates the
/// per-step convolution.
///
/// Holds the two independently configurable quadrature choices: one for the
/// `Br(ω) → K(τ)` cosine transform (oscillatory integrand, Filon-friendly),
/// one for the time-domain convolution (sampled integrand, where a plain
/// fixed-grid rule is the usual choice).
#[derive(Debug, Clone, Copy)]
pub struct RetardationBuilder {
    convolution_rule: Quadrature,
    cos_transform_rule: Quadrature,
}

impl RetardationBuilder {
    /// Create a builder with the two quadrature choices.
    #[must_use]
    pub fn new(convolution_rule: Quadrature, cos_transform_rule: Quadrature) -> Self {
        Self {
            convolution_rule,
            cos_transform_rule,
        }
    }

    /// The rule used for time-domain convolution.
    #[must_use]
    pub fn convolution_rule(&self) -> Quadrature {
        self.convolution_rule
    }

    /// The rule used for the cosine transform.
    #[must_use]
    pub fn cos_transform_rule(&self) -> Quadrature {
        self.cos_transform_rule
    }

    /// Build a continuous interpolant over tabulated `(ω, value)` samples.
    pub fn build_interpolator(&self, omegas: &[f64], values: &[f64]) -> Result<LinearInterpolator> {
        LinearInterpolator::new(omegas.to_vec(), values.to_vec())
    }

    /// `n` evenly spaced samples from `first` to `last`, inclusive.
    ///
    /// Used for the diagnostic `K(τ)` tabulation, not for the convolution.
    #[must_use]
    pub fn regular_intervals(first: f64, last: f64, n: usize) -> Vec<f64> {
        match n {
            0 => Vec::new(),
            1 => vec![first],
            _ => {
                let step = (last - first) / (n - 1) as f64;
                (0..n)
                    .map(|k| {
                        if k == n - 1 {
                            last
                        } else {
                            step.mul_add(k as f64, first)
                        }
                    })
                    .collect()
            }
        }
    }

    /// `n` geometrically spaced samples from `first` to `last`, inclusive:
    /// dense near `first`, sparse near `last`.
    ///
    /// This is the natural grid for tabulating frequency-domain data whose
    /// structure concentrates at low frequency. A non-positive `first` is
    /// handled by spacing `1 + (x - first)` geometrically instead.
    #[must_use]
    pub fn exponential_intervals(first: f64, last: f64, n: usize) -> Vec<f64> {
        match n {
            0 => Vec::new(),
            1 => vec![first],
            _ => {
                let (shift, lo) = if first > 0.0 {
                    (0.0, first)
                } else {
                    (1.0 - first, 1.0)
                };
                let hi = last + shift;
                let ratio = (hi / lo).powf(1.0 / (n - 1) as f64);
                let mut x = lo;
                (0..n)
                    .map(|k| {
                        if k == 0 {
                            first
                        } else if k == n - 1 {
                            last
                        } else {
                            x *= ratio;
                            x - shift
                        }
                    })
                    .collect()
            }
        }
    }

    /// Build the retardation kernel of a damping table:
    ///
    /// ```text
    /// K(τ) = (2/π) ∫_{ω_min}^{ω_max} Br(ω) cos(ωτ) dω
    /// ```
    ///
    /// The kernel is evaluated lazily per `τ` with the cos-transform rule,
    /// so it can be queried at whatever nodes the convolution rule picks.
    #[must_use]
    pub fn build_retardation_function(
        &self,
        table: LinearInterpolator,
        omega_min: f64,
        omega_max: f64,
        tolerance: f64,
    ) -> RetardationKernel {
        self.build_retardation_function_less_offset(table, 0.0, omega_min, omega_max, tolerance)
    }

    /// Build a retardation kernel with a constant `offset` subtracted from
    /// the table **before** transforming.
    ///
    /// This is how the added-mass kernel removes the asymptotic added mass:
    /// the transform sees `Ma(ω) - A∞`, which decays to zero at high
    /// frequency as the cosine transform requires.
    #[must_use]
    pub fn build_retardation_function_less_offset(
        &self,
        table: LinearInterpolator,
        offset: f64,
        omega_min: f64,
        omega_max: f64,
        tolerance: f64,
    ) -> RetardationKernel {
        RetardationKernel {
            table,
            offset,
            rule: self.cos_transform_rule,
            omega_min,
            omega_max,
            tolerance,
        }
    }

    /// The convolution `∫_{τ_min}^{τ_max} h(τ)·k(τ) dτ` with the
    /// convolution rule.
    pub fn convolution<H, K>(&self, h: H, kernel: K, tau_min: f64, tau_max: f64, tol: f64) -> f64
    where
        H: Fn(f64) -> f64,
        K: Fn(f64) -> f64,
    {
        self.convolution_rule
            .integrate(|tau| h(tau) * kernel(tau), tau_min, tau_max, tol)
    }
}

/// A retardation (impulse-response) function for one DOF pair.
///
/// A lightweight struct owning its interpolated frequency table; evaluation
/// runs the cosine transform at the queried `τ`. Immutable after
/// construction: a pure function of the tabulated data, the quadrature
/// choice and the transform bounds.
#[derive(Debug, Clone)]
pub struct RetardationKernel {
    table: LinearInterpolator,
    offset: f64,
    rule: Quadrature,
    omega_min: f64,
    omega_max: f64,
    tolerance: f64,
}

impl RetardationKernel {
    /// `K(τ)`.
    #[must_use]
    pub fn evaluate(&self, tau: f64) -> f64 {
        let table = &self.table;
        let offset = self.offset;
        std::f64::consts::FRAC_2_PI
            * self.rule.cosine_transform(
                |omega| table.value_at(omega) - offset,
                self.omega_min,
                self.omega_max,
                tau,
                self.tolerance,
            )
    }

    /// The (offset-corrected) frequency-domain function being transformed.
    ///
    /// For damping kernels this is `Br(ω)` itself; used by the diagnostic
    /// tables.
    #[must_use]
    pub fn source_at(&self, omega: f64) -> f64 {
        self.table.value_at(omega) - self.offset
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn builder(rule: Quadrature) -> RetardationBuilder {
        RetardationBuilder::new(Quadrature::Simpson, rule)
    }

    #[test]
    fn regular_intervals_cover_the_range() {
        let taus = RetardationBuilder::regular_intervals(2.0, 10.0, 5);
        assert_eq!(taus, vec![2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(RetardationBuilder::regular_intervals(0.0, 1.0, 1), vec![0.0]);
        assert!(RetardationBuilder::regular_intervals(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn exponential_intervals_are_increasing_and_front_loaded() {
        let omegas = RetardationBuilder::exponential_intervals(0.01, 40.0, 100);
        assert_eq!(omegas.len(), 100);
        assert_eq!(omegas[0], 0.01);
        assert_eq!(omegas[99], 40.0);
        assert!(omegas.windows(2).all(|w| w[1] > w[0]));
        // Dense near the start, sparse near the end.
        let first_gap = omegas[1] - omegas[0];
        let last_gap = omegas[99] - omegas[98];
        assert!(first_gap < last_gap / 10.0);
    }

    #[test]
    fn exponential_intervals_handle_zero_start() {
        let omegas = RetardationBuilder::exponential_intervals(0.0, 30.0, 50);
        assert_eq!(omegas[0], 0.0);
        assert_eq!(omegas[49], 30.0);
        assert!(omegas.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn kernel_round_trip_against_analytic_pair() {
        // Br(ω) = e^{-ω} has the closed-form kernel
        // K(τ) = (2/π) / (1 + τ²) over ω ∈ [0, ∞); the tail beyond 40 rad/s
        // is ~1e-17. Two different quadrature choices on the same input must
        // both reproduce it.
        let omegas = RetardationBuilder::exponential_intervals(0.01, 40.0, 300);
        let br: Vec<f64> = omegas.iter().map(|&w| (-w).exp()).collect();

        for rule in [Quadrature::Simpson, Quadrature::ClenshawCurtis] {
            let b = builder(rule);
            let table = b.build_interpolator(&omegas, &br).unwrap();
            let kernel = b.build_retardation_function(table, 0.0, 40.0, DEFAULT_TOLERANCE);
            for tau in RetardationBuilder::regular_intervals(0.0, 3.0, 7) {
                let exact = std::f64::consts::FRAC_2_PI / (1.0 + tau * tau);
                let got = kernel.evaluate(tau);
                assert!(
                    ((got - exact) / exact).abs() < 0.02,
                    "{rule} at tau={tau}: got {got}, want {exact}"
                );
            }
        }
    }

    #[test]
    fn zero_damping_gives_zero_kernel() {
        let omegas = RetardationBuilder::regular_intervals(0.0, 30.0, 50);
        let br = vec![0.0; 50];
        for rule in Quadrature::ALL {
            let b = builder(rule);
            let table = b.build_interpolator(&omegas, &br).unwrap();
            let kernel = b.build_retardation_function(table, 0.0, 30.0, DEFAULT_TOLERANCE);
            for tau in [0.0, 0.5, 5.0] {
                let got = kernel.evaluate(tau);
                assert!(got.is_finite());
                assert_eq!(got, 0.0);
            }
        }
    }

    #[test]
    fn offset_is_removed_before_transforming() {
        // A constant table with a matching offset transforms to exactly the
        // zero kernel, whatever tau.
        let omegas = RetardationBuilder::regular_intervals(0.0, 10.0, 20);
        let ma = vec![1234.5; 20];
        let b = builder(Quadrature::Simpson);
        let table = b.build_interpolator(&omegas, &ma).unwrap();
        let kernel =
            b.build_retardation_function_less_offset(table, 1234.5, 0.0, 10.0, DEFAULT_TOLERANCE);
        assert_eq!(kernel.source_at(3.0), 0.0);
        assert_eq!(kernel.evaluate(1.0), 0.0);
    }

    #[test]
    fn interpolator_errors_pass_through() {
        let b = builder(Quadrature::Simpson);
        assert!(b.build_interpolator(&[0.0, 1.0], &[1.0]).is_err());
        assert!(b.build_interpolator(&[1.0, 0.5], &[1.0, 2.0]).is_err());
    }

    #[test]
    fn convolution_uses_the_convolution_rule() {
        let b = RetardationBuilder::new(Quadrature::Simpson, Quadrature::Filon);
        // ∫₀¹ τ·(1-τ) dτ = 1/6.
        let got = b.convolution(|tau| tau, |tau| 1.0 - tau, 0.0, 1.0, 1e-6);
        assert_relative_eq!(got, 1.0 / 6.0, epsilon = 1e-9);
    }
}
