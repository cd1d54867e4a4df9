//! YAML configuration fragment for the radiation-damping model.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use hydro_quadrature::Quadrature;
use hydro_types::{Point3, UnitValue};

use crate::error::RadiationError;
use crate::Result;

/// Validated configuration of the radiation-damping model.
///
/// Parsed once from YAML and immutable afterwards; the model is a pure
/// function of this plus the coefficient source.
#[derive(Debug, Clone, PartialEq)]
pub struct RadiationConfig {
    /// Quadrature rule for the `Br(ω) → K(τ)` cosine transform.
    pub cos_transform_quadrature: Quadrature,

    /// Quadrature rule for the time-domain convolution.
    pub convolution_quadrature: Quadrature,

    /// Number of `τ` samples in the diagnostic retardation tabulation.
    pub discretization_points: usize,

    /// Lower bound of the cosine transform (rad/s).
    pub omega_min: f64,

    /// Upper bound of the cosine transform (rad/s).
    pub omega_max: f64,

    /// Lower bound of the convolution integral (s).
    pub tau_min: f64,

    /// Upper bound of the convolution integral (s); also the amount of
    /// velocity history the model asks the driver to retain.
    pub tau_max: f64,

    /// Dump the `Br(ω)` and `K(τ)` CSV tables at construction.
    pub output_br_and_k: bool,

    /// Where the coefficient tables were computed, in the body frame (m).
    pub calculation_point: Point3<f64>,

    /// Apply the forward-speed velocity-coupling correction.
    pub forward_speed_correction: bool,
}

impl RadiationConfig {
    /// Check the numeric invariants.
    pub fn validate(&self) -> Result<()> {
        if !(self.tau_min < self.tau_max) {
            return Err(RadiationError::InvalidTauBounds {
                tau_min: self.tau_min,
                tau_max: self.tau_max,
            });
        }
        if !(self.omega_min < self.omega_max) {
            return Err(RadiationError::InvalidOmegaBounds {
                omega_min: self.omega_min,
                omega_max: self.omega_max,
            });
        }
        if self.discretization_points < 2 {
            return Err(RadiationError::TooFewSamples {
                n: self.discretization_points,
            });
        }
        Ok(())
    }
}

/// The coefficient database a configuration references.
///
/// Loading and parsing the file is the format backend's job (HDB and PRECAL
/// readers live outside this crate); this just records which file, in which
/// format, the user pointed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoefficientFile {
    /// A binary/text HDB database (`hdb` key).
    Hdb(PathBuf),
    /// An ASCII PRECAL_R database (`raodb` key).
    Precal(PathBuf),
}

impl CoefficientFile {
    /// The referenced path.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Hdb(p) | Self::Precal(p) => p,
        }
    }
}

/// Everything `parse` extracts from the YAML fragment.
#[derive(Debug, Clone)]
pub struct RadiationInput {
    /// The validated model configuration.
    pub config: RadiationConfig,
    /// The coefficient database to load.
    pub file: CoefficientFile,
}

/// Raw serde image of the YAML fragment, before unit normalization.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    hdb: Option<PathBuf>,
    #[serde(default)]
    raodb: Option<PathBuf>,
    #[serde(rename = "type of quadrature for cos transform")]
    cos_transform: Quadrature,
    #[serde(rename = "type of quadrature for convolution")]
    convolution: Quadrature,
    #[serde(rename = "nb of points for retardation function discretization")]
    discretization_points: usize,
    #[serde(rename = "omega min")]
    omega_min: UnitValue,
    #[serde(rename = "omega max")]
    omega_max: UnitValue,
    #[serde(rename = "tau min")]
    tau_min: UnitValue,
    #[serde(rename = "tau max")]
    tau_max: UnitValue,
    #[serde(rename = "output Br and K")]
    output_br_and_k: bool,
    #[serde(rename = "calculation point in body frame")]
    calculation_point: RawPoint,
    #[serde(rename = "forward speed correction", default)]
    forward_speed_correction: bool,
}

#[derive(Debug, Deserialize)]
struct RawPoint {
    x: UnitValue,
    y: UnitValue,
    z: UnitValue,
}

/// Parse the model's YAML fragment.
///
/// Fails if the fragment is malformed, if a unit or quadrature name is
/// unknown, if the numeric invariants do not hold, or if the coefficient
/// source is ambiguous (both `hdb` and `raodb`) or missing (neither).
pub fn parse(yaml: &str) -> Result<RadiationInput> {
    let raw: RawConfig = serde_yaml::from_str(yaml)?;

    let file = match (raw.hdb, raw.raodb) {
        (Some(_), Some(_)) => return Err(RadiationError::AmbiguousSource),
        (None, None) => return Err(RadiationError::MissingSource),
        (Some(path), None) => CoefficientFile::Hdb(path),
        (None, Some(path)) => CoefficientFile::Precal(path),
    };

    let config = RadiationConfig {
        cos_transform_quadrature: raw.cos_transform,
        convolution_quadrature: raw.convolution,
        discretization_points: raw.discretization_points,
        omega_min: raw.omega_min.to_si()?,
        omega_max: raw.omega_max.to_si()?,
        tau_min: raw.tau_min.to_si()?,
        tau_max: raw.tau_max.to_si()?,
        output_br_and_k: raw.output_br_and_k,
        calculation_point: Point3::new(
            raw.calculation_point.x.to_si()?,
            raw.calculation_point.y.to_si()?,
            raw.calculation_point.z.to_si()?,
        ),
        forward_speed_correction: raw.forward_speed_correction,
    };
    config.validate()?;

    Ok(RadiationInput { config, file })
}
