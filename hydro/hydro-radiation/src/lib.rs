//! Radiation-damping force model for the hydroforge vessel dynamics
//! simulator.
//!
//! Waves radiated by an oscillating hull carry energy away; in the time
//! domain (Cummins formulation) that loss appears as a convolution of the
//! vessel's velocity history against retardation functions `K(τ)` obtained
//! by cosine-transforming the frequency-domain radiation damping `Br(ω)`:
//!
//! ```text
//! K(τ)  = (2/π) ∫ Br(ω) cos(ωτ) dω
//! F(t)  = -∫ K(τ) · (v(t-τ) - v̄) dτ        (per DOF pair, summed over columns)
//! ```
//!
//! This crate provides:
//!
//! - [`FrequencyDomainSource`] - the interface to HDB/PRECAL-style
//!   coefficient databases, plus the in-memory [`TabulatedSource`]
//! - [`RetardationBuilder`] / [`RetardationKernel`] - frequency-to-time
//!   kernel construction with a selectable quadrature rule
//! - [`ConvolutionEngine`] - the per-step evaluation over all 36 DOF pairs,
//!   including the optional forward-speed coupling correction
//! - [`RadiationDampingForceModel`] - the public force model, behind the
//!   generic `hydro-force` contract
//! - [`RadiationConfig`] / [`parse`] - the YAML configuration fragment
//!
//! # Startup transient
//!
//! The convolution's upper bound is clamped to the available history length,
//! and a history shorter than `tau min` contributes exactly zero. Radiation
//! forces are therefore systematically biased toward zero until `tau max`
//! seconds of history accumulate; this is a deliberate cold-start policy,
//! not an error.

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(clippy::missing_const_for_fn, clippy::missing_errors_doc)]

mod builder;
mod config;
mod convolution;
mod debug_dump;
mod error;
mod interpolator;
mod model;
mod source;

pub use builder::{RetardationBuilder, RetardationKernel, DEFAULT_TOLERANCE};
pub use config::{parse, CoefficientFile, RadiationConfig, RadiationInput};
pub use convolution::ConvolutionEngine;
pub use error::RadiationError;
pub use interpolator::LinearInterpolator;
pub use model::RadiationDampingForceModel;
pub use source::{FrequencyDomainSource, TabulatedSource};

/// Result type for radiation-damping operations.
pub type Result<T> = std::result::Result<T, RadiationError>;
