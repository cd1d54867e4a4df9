//! Per-step convolution of retardation kernels against velocity history.

use hydro_types::{BodyStates, Dof, Matrix6, Vector6, VelocityHistory};

use crate::builder::{RetardationBuilder, RetardationKernel, DEFAULT_TOLERANCE};
use crate::source::FrequencyDomainSource;
use crate::Result;

/// Evaluates the radiation-damping convolution over all 36 DOF pairs.
///
/// All kernels are built once at construction from the frequency-domain
/// source; per-step evaluation only queries them at the integration nodes
/// the convolution rule picks. With forward-speed correction enabled the
/// added-mass kernels `Ka` are built as well and the roll/pitch/yaw columns
/// are corrected with the velocity coupling of the Cummins formulation.
#[derive(Debug)]
pub struct ConvolutionEngine {
    builder: RetardationBuilder,
    /// Damping kernels `Kb(i, j)`, row-major.
    kb: Vec<RetardationKernel>,
    /// Added-mass kernels `Ka(i, j)`, built only for forward-speed runs.
    ka: Option<Vec<RetardationKernel>>,
    /// Asymptotic added-mass matrix `A`.
    asymptotic: Matrix6<f64>,
    tau_min: f64,
    tau_max: f64,
    tolerance: f64,
}

impl ConvolutionEngine {
    /// Build all kernels from a frequency-domain source.
    pub fn new(
        source: &dyn FrequencyDomainSource,
        builder: RetardationBuilder,
        omega_min: f64,
        omega_max: f64,
        tau_min: f64,
        tau_max: f64,
        forward_speed_correction: bool,
    ) -> Result<Self> {
        let omegas = source.angular_frequencies();
        let asymptotic = source.asymptotic_added_mass();

        let mut kb = Vec::with_capacity(36);
        for i in 0..6 {
            for j in 0..6 {
                let table = builder.build_interpolator(omegas, source.radiation_damping_coeff(i, j))?;
                kb.push(builder.build_retardation_function(
                    table,
                    omega_min,
                    omega_max,
                    DEFAULT_TOLERANCE,
                ));
            }
        }

        let ka = if forward_speed_correction {
            let mut kernels = Vec::with_capacity(36);
            for i in 0..6 {
                for j in 0..6 {
                    let table = builder.build_interpolator(omegas, source.added_mass_coeff(i, j))?;
                    kernels.push(builder.build_retardation_function_less_offset(
                        table,
                        asymptotic[(i, j)],
                        omega_min,
                        omega_max,
                        DEFAULT_TOLERANCE,
                    ));
                }
            }
            Some(kernels)
        } else {
            None
        };

        Ok(Self {
            builder,
            kb,
            ka,
            asymptotic,
            tau_min,
            tau_max,
            tolerance: DEFAULT_TOLERANCE,
        })
    }

    /// Whether the forward-speed coupling kernels were built.
    #[must_use]
    pub fn has_forward_speed_correction(&self) -> bool {
        self.ka.is_some()
    }

    /// Lower convolution bound (s).
    #[must_use]
    pub fn tau_min(&self) -> f64 {
        self.tau_min
    }

    /// Upper convolution bound (s).
    #[must_use]
    pub fn tau_max(&self) -> f64 {
        self.tau_max
    }

    /// The damping kernel of one DOF pair (diagnostic tables).
    pub(crate) fn damping_kernel(&self, i: usize, j: usize) -> &RetardationKernel {
        &self.kb[i * 6 + j]
    }

    /// Convolution of one DOF pair against the mean-removed velocity
    /// history of DOF `j`.
    ///
    /// A history shorter than `tau_min` contributes exactly zero: it cannot
    /// resolve the kernel's near field, and contributing noise would be
    /// worse than contributing nothing. Otherwise the upper bound clamps to
    /// the available history, so a freshly started simulation degrades
    /// gracefully instead of failing (the documented startup transient).
    #[must_use]
    pub fn convolve(
        &self,
        i: usize,
        j: usize,
        history: &VelocityHistory,
        average_j: f64,
        ubar: &[f64; 6],
    ) -> f64 {
        if history.duration() < self.tau_min {
            return 0.0;
        }
        let upper = self.tau_max.min(history.duration());
        let kernel = self.corrected_kernel(i, j, ubar);
        self.builder.convolution(
            |tau| history.value_at_lag(tau) - average_j,
            |tau| kernel.evaluate(tau),
            self.tau_min,
            upper,
            self.tolerance,
        )
    }

    /// The convolution summed over columns: `ret[i] = Σ_j convolve(i, j)`.
    ///
    /// This is the radiation force before negation; retardation forces
    /// oppose motion, so the model negates it when assembling the wrench.
    #[must_use]
    pub fn radiation_force(&self, states: &BodyStates, averages: &[f64; 6]) -> Vector6<f64> {
        let mut ret = Vector6::zeros();
        for i in 0..6 {
            for (j, dof) in Dof::ALL.iter().enumerate() {
                ret[i] += self.convolve(i, j, states.velocity(*dof), averages[j], averages);
            }
        }
        ret
    }

    /// The outer forward-speed correction term `A · Ls(Ū) · (v - v̄)`.
    ///
    /// `Ls` is built from the *average* surge/sway velocities while the
    /// multiplied velocities are instantaneous-minus-average; the asymmetry
    /// is part of the formulation being reproduced, not an accident.
    #[must_use]
    pub fn forward_speed_term(&self, states: &BodyStates, averages: &[f64; 6]) -> Vector6<f64> {
        let oscillation = Vector6::from_fn(|i, _| {
            states.velocity(Dof::ALL[i]).latest().unwrap_or(0.0) - averages[i]
        });
        self.asymptotic * Self::ls_matrix(averages) * oscillation
    }

    /// The skew velocity-coupling operator `Ls(Ū)`.
    ///
    /// Nonzero entries: `Ls[1,5] = U`, `Ls[2,4] = -U`, `Ls[0,5] = -V`,
    /// `Ls[2,3] = V`, with `U`, `V` the average surge and sway velocities.
    #[must_use]
    pub fn ls_matrix(ubar: &[f64; 6]) -> Matrix6<f64> {
        let mut ls = Matrix6::zeros();
        ls[(1, 5)] = ubar[0];
        ls[(2, 4)] = -ubar[0];
        ls[(0, 5)] = -ubar[1];
        ls[(2, 3)] = ubar[1];
        ls
    }

    /// The kernel for pair `(i, j)`, forward-speed corrected when enabled.
    ///
    /// Columns 0..3 always use `Kb` unmodified; with correction enabled the
    /// roll/pitch/yaw columns couple in scalar multiples of the `Ka`
    /// kernels of the translational columns:
    ///
    /// ```text
    /// K(i,3) = Kb(i,3) + V·Ka(i,2)
    /// K(i,4) = Kb(i,4) - U·Ka(i,2)
    /// K(i,5) = Kb(i,5) + U·Ka(i,1) - V·Ka(i,0)
    /// ```
    fn corrected_kernel(&self, i: usize, j: usize, ubar: &[f64; 6]) -> KernelExpr<'_> {
        let base = &self.kb[i * 6 + j];
        let Some(ka) = &self.ka else {
            return KernelExpr::base_only(base);
        };
        let u = ubar[0];
        let v = ubar[1];
        match j {
            3 => KernelExpr::with_terms(base, Some((v, &ka[i * 6 + 2])), None),
            4 => KernelExpr::with_terms(base, Some((-u, &ka[i * 6 + 2])), None),
            5 => KernelExpr::with_terms(base, Some((u, &ka[i * 6 + 1])), Some((-v, &ka[i * 6]))),
            _ => KernelExpr::base_only(base),
        }
    }
}

/// A damping kernel plus up to two scalar multiples of coupling kernels.
///
/// Borrow-based so forward-speed correction never clones or boxes kernels
/// on the per-step path.
struct KernelExpr<'a> {
    base: &'a RetardationKernel,
    terms: [Option<(f64, &'a RetardationKernel)>; 2],
}

impl<'a> KernelExpr<'a> {
    fn base_only(base: &'a RetardationKernel) -> Self {
        Self {
            base,
            terms: [None, None],
        }
    }

    fn with_terms(
        base: &'a RetardationKernel,
        first: Option<(f64, &'a RetardationKernel)>,
        second: Option<(f64, &'a RetardationKernel)>,
    ) -> Self {
        Self {
            base,
            terms: [first, second],
        }
    }

    fn evaluate(&self, tau: f64) -> f64 {
        let mut value = self.base.evaluate(tau);
        for (scale, kernel) in self.terms.iter().flatten() {
            value += scale * kernel.evaluate(tau);
        }
        value
    }
}
