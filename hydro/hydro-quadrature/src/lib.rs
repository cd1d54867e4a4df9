//! Numerical quadrature for the hydroforge vessel dynamics simulator.
//!
//! This crate provides the definite-integration layer used to build
//! retardation (impulse-response) functions from frequency-domain
//! hydrodynamic coefficients and to evaluate the per-step convolution
//! integrals:
//!
//! - [`Quadrature`] - the selectable rule set (gauss-kronrod, rectangle,
//!   simpson, trapezoidal, burcher, clenshaw-curtis, filon)
//! - [`Quadrature::integrate`] - definite integral of an arbitrary integrand
//! - [`Quadrature::cosine_transform`] - `∫ f(ω)·cos(ωτ) dω`, with
//!   oscillation-aware rules (Filon, Burcher) that treat the cosine factor
//!   analytically
//!
//! # Rule selection
//!
//! The cosine transform's integrand oscillates with period `2π/τ`; for large
//! `τ` a blind composite rule needs a very fine grid to resolve it, which is
//! exactly what Filon's method avoids. The convolution integrand, on the
//! other hand, is a sampled velocity history (smooth at the sample scale),
//! so the cheap fixed-grid rules are the usual choice there.
//!
//! # Example
//!
//! ```
//! use hydro_quadrature::Quadrature;
//!
//! let rule: Quadrature = "simpson".parse().unwrap();
//! let integral = rule.integrate(|x| x * x, 0.0, 1.0, 1e-6);
//! assert!((integral - 1.0 / 3.0).abs() < 1e-6);
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(clippy::missing_const_for_fn)]

mod cosine;
mod error;
mod rules;

pub use error::QuadratureError;
pub use rules::Quadrature;

/// Result type for quadrature operations.
pub type Result<T> = std::result::Result<T, QuadratureError>;
