//! Frequency-domain coefficient sources.

use nalgebra::Matrix6;

use crate::error::RadiationError;
use crate::Result;

/// A database of frequency-domain hydrodynamic coefficients.
///
/// Potential-flow solvers export added mass `Ma(ω)` and radiation damping
/// `Br(ω)` per DOF pair, tabulated over a common angular-frequency grid.
/// The file-format backends (binary/text HDB, ASCII PRECAL) live outside
/// this crate; anything satisfying this interface can feed the model.
pub trait FrequencyDomainSource {
    /// The common angular-frequency grid (rad/s), strictly increasing.
    fn angular_frequencies(&self) -> &[f64];

    /// Radiation damping `Br(i, j)` tabulated over the frequency grid.
    fn radiation_damping_coeff(&self, i: usize, j: usize) -> &[f64];

    /// Added mass `Ma(i, j)` tabulated over the frequency grid.
    fn added_mass_coeff(&self, i: usize, j: usize) -> &[f64];

    /// The asymptotic (infinite-frequency) added-mass matrix.
    fn asymptotic_added_mass(&self) -> Matrix6<f64>;

    /// Forward speed (m/s) the radiation data was computed at.
    ///
    /// Zero for most seakeeping databases; the forward-speed correction
    /// assumes it is zero and warns otherwise.
    fn reference_forward_speed(&self) -> f64 {
        0.0
    }
}

/// An in-memory, table-backed coefficient source.
///
/// Used by tests and by callers that already hold the coefficient tables
/// (e.g. a cosimulation peer streaming them over the wire). DOF pairs never
/// set read as zero.
///
/// # Example
///
/// ```
/// use hydro_radiation::{FrequencyDomainSource, TabulatedSource};
///
/// let source = TabulatedSource::new(vec![0.5, 1.0, 2.0])
///     .unwrap()
///     .with_damping(2, 2, vec![1e4, 2e4, 1.5e4])
///     .unwrap();
/// assert_eq!(source.radiation_damping_coeff(2, 2)[1], 2e4);
/// assert_eq!(source.radiation_damping_coeff(0, 0), &[0.0, 0.0, 0.0]);
/// ```
#[derive(Debug, Clone)]
pub struct TabulatedSource {
    omegas: Vec<f64>,
    damping: Vec<Vec<f64>>,
    added_mass: Vec<Vec<f64>>,
    asymptotic: Matrix6<f64>,
    forward_speed: f64,
}

impl TabulatedSource {
    /// Create a source over the given frequency grid, all coefficients zero.
    ///
    /// Fails if the grid has fewer than two points or is not strictly
    /// increasing.
    pub fn new(omegas: Vec<f64>) -> Result<Self> {
        if omegas.len() < 2 {
            return Err(RadiationError::TooFewSamples { n: omegas.len() });
        }
        if let Some(index) = omegas.windows(2).position(|w| w[1] <= w[0]) {
            return Err(RadiationError::NotStrictlyIncreasing { index: index + 1 });
        }
        let zeros = vec![0.0; omegas.len()];
        Ok(Self {
            omegas,
            damping: vec![zeros.clone(); 36],
            added_mass: vec![zeros; 36],
            asymptotic: Matrix6::zeros(),
            forward_speed: 0.0,
        })
    }

    /// Set the radiation damping table for one DOF pair.
    pub fn with_damping(mut self, i: usize, j: usize, values: Vec<f64>) -> Result<Self> {
        let slot = pair_index(i, j)?;
        self.check_len(&values)?;
        self.damping[slot] = values;
        Ok(self)
    }

    /// Set the added-mass table for one DOF pair.
    pub fn with_added_mass(mut self, i: usize, j: usize, values: Vec<f64>) -> Result<Self> {
        let slot = pair_index(i, j)?;
        self.check_len(&values)?;
        self.added_mass[slot] = values;
        Ok(self)
    }

    /// Set the asymptotic added-mass matrix.
    #[must_use]
    pub fn with_asymptotic_added_mass(mut self, matrix: Matrix6<f64>) -> Self {
        self.asymptotic = matrix;
        self
    }

    /// Set the forward speed the data was computed at.
    #[must_use]
    pub fn with_forward_speed(mut self, forward_speed: f64) -> Self {
        self.forward_speed = forward_speed;
        self
    }

    fn check_len(&self, values: &[f64]) -> Result<()> {
        if values.len() != self.omegas.len() {
            return Err(RadiationError::TableSizeMismatch {
                omegas: self.omegas.len(),
                values: values.len(),
            });
        }
        Ok(())
    }
}

fn pair_index(i: usize, j: usize) -> Result<usize> {
    if i < 6 && j < 6 {
        Ok(i * 6 + j)
    } else {
        Err(RadiationError::DofOutOfRange { i, j })
    }
}

impl FrequencyDomainSource for TabulatedSource {
    fn angular_frequencies(&self) -> &[f64] {
        &self.omegas
    }

    fn radiation_damping_coeff(&self, i: usize, j: usize) -> &[f64] {
        &self.damping[i * 6 + j]
    }

    fn added_mass_coeff(&self, i: usize, j: usize) -> &[f64] {
        &self.added_mass[i * 6 + j]
    }

    fn asymptotic_added_mass(&self) -> Matrix6<f64> {
        self.asymptotic
    }

    fn reference_forward_speed(&self) -> f64 {
        self.forward_speed
    }
}
