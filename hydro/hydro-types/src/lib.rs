//! Core types for vessel dynamics simulation.
//!
//! This crate provides the foundational types shared by every force model in
//! the hydroforge stack:
//!
//! - [`Dof`] - The six degrees of freedom of a rigid vessel
//! - [`Wrench`] - A force/moment pair tagged with application point and frame
//! - [`VelocityHistory`] - Rolling record of one velocity component over time
//! - [`BodyStates`] - A body's six velocity histories plus identity
//! - [`Environment`] - Ambient conditions shared by the force catalogue
//! - [`UnitValue`] - The `{value, unit}` convention used by YAML inputs
//!
//! # Design Philosophy
//!
//! These types are **pure data**. They have no hydrodynamics in them; they are
//! the common language between:
//!
//! - Force models (radiation damping, hydrostatics, maneuvering, ...)
//! - The ODE stepper that integrates the equations of motion
//! - Observers that log force components and derived quantities
//!
//! # Conventions
//!
//! DOFs are indexed 0..5 as surge(u), sway(v), heave(w), roll(p), pitch(q),
//! yaw(r), in the body frame, following the usual seakeeping convention.
//!
//! # Example
//!
//! ```
//! use hydro_types::{BodyStates, Dof};
//!
//! let mut states = BodyStates::new("hull", 100.0);
//! states.record(0.0, [1.0, 0.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
//! states.record(1.0, [1.2, 0.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
//!
//! let u = states.velocity(Dof::Surge);
//! assert!((u.duration() - 1.0).abs() < 1e-12);
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,  // Many methods can't be const due to nalgebra
    clippy::missing_errors_doc,    // Error docs added where non-obvious
)]

mod body;
mod dof;
mod environment;
mod error;
mod history;
mod units;
mod wrench;

pub use body::{BodyStates, StateSnapshot};
pub use dof::Dof;
pub use environment::Environment;
pub use error::TypesError;
pub use history::VelocityHistory;
pub use units::{decode, UnitValue};
pub use wrench::Wrench;

// Re-export the math types used in public signatures
pub use nalgebra::{Matrix6, Point3, Vector3, Vector6};

/// Result type for operations on core types.
pub type Result<T> = std::result::Result<T, TypesError>;
