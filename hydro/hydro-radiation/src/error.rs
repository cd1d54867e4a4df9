//! Error types for radiation-damping construction and configuration.

use thiserror::Error;

/// Errors that can occur while configuring or building the radiation-damping
/// model.
///
/// All of these are raised at parse/construction time; a constructed model
/// never produces them during a running simulation.
#[derive(Debug, Error)]
pub enum RadiationError {
    /// A frequency table and its value table have different lengths.
    #[error("frequency table mismatch: {omegas} frequencies but {values} values")]
    TableSizeMismatch {
        /// Number of tabulated frequencies.
        omegas: usize,
        /// Number of tabulated values.
        values: usize,
    },

    /// Tabulated abscissae are not strictly increasing.
    #[error("tabulated frequencies must be strictly increasing (violated at index {index})")]
    NotStrictlyIncreasing {
        /// Index of the first offending sample.
        index: usize,
    },

    /// A table needs at least two samples to interpolate.
    #[error("at least 2 samples are required, got {n}")]
    TooFewSamples {
        /// Number of samples supplied.
        n: usize,
    },

    /// Both coefficient sources were specified at once.
    #[error("both 'hdb' and 'raodb' keys are set; exactly one coefficient source is required")]
    AmbiguousSource,

    /// No coefficient source was specified.
    #[error("neither 'hdb' nor 'raodb' key is set; exactly one coefficient source is required")]
    MissingSource,

    /// `tau min` must be strictly below `tau max`.
    #[error("invalid retardation bounds: tau min ({tau_min}) must be less than tau max ({tau_max})")]
    InvalidTauBounds {
        /// Configured lower bound (s).
        tau_min: f64,
        /// Configured upper bound (s).
        tau_max: f64,
    },

    /// `omega min` must be strictly below `omega max`.
    #[error(
        "invalid transform bounds: omega min ({omega_min}) must be less than omega max ({omega_max})"
    )]
    InvalidOmegaBounds {
        /// Configured lower bound (rad/s).
        omega_min: f64,
        /// Configured upper bound (rad/s).
        omega_max: f64,
    },

    /// A DOF index outside 0..6 was used.
    #[error("DOF index out of range: ({i}, {j})")]
    DofOutOfRange {
        /// Row index.
        i: usize,
        /// Column index.
        j: usize,
    },

    /// An unknown quadrature name was configured.
    #[error(transparent)]
    Quadrature(#[from] hydro_quadrature::QuadratureError),

    /// A unit-bearing value used an unrecognized unit.
    #[error(transparent)]
    Unit(#[from] hydro_types::TypesError),

    /// The YAML fragment itself is malformed.
    #[error("malformed radiation damping configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Writing the diagnostic CSV tables failed.
    #[error("diagnostic dump failed: {0}")]
    Dump(#[from] std::io::Error),
}
