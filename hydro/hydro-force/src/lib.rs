//! The generic force-model contract of the hydroforge simulator.
//!
//! Every environmental and hydrodynamic force obeys the same contract:
//!
//! - [`ForceModel`] - the trait a concrete force implements: identity
//!   bookkeeping (model name, body name, reference frame), declared command
//!   names, how much velocity history it needs retained, and the actual
//!   [`get_force`](ForceModel::get_force) evaluation.
//! - [`ForceEvaluator`] - the memoizing wrapper the simulation driver calls.
//!   A single timestep may query the same force twice (once for logging,
//!   once for the derivative); the evaluator returns the cached wrench when
//!   the `(time, state)` pair is bit-identical to the previous call, so an
//!   expensive model is never recomputed just because an observer peeked.
//! - [`CommandSource`] / [`Commands`] - retrieval of named control inputs
//!   (rudder angle, propeller rpm, ...) at evaluation time.
//! - [`Observer`] - the sink force models publish diagnostic scalars to.
//!
//! # Example
//!
//! ```
//! use hydro_force::{CommandMap, ForceEvaluator, ForceModel, Commands, Result};
//! use hydro_types::{BodyStates, Environment, Wrench};
//! use nalgebra::{Point3, Vector3};
//!
//! struct ConstantThrust;
//!
//! impl ForceModel for ConstantThrust {
//!     fn name(&self) -> &str { "constant thrust" }
//!     fn body_name(&self) -> &str { "hull" }
//!     fn get_force(
//!         &self,
//!         _states: &BodyStates,
//!         _t: f64,
//!         _env: &Environment,
//!         _commands: &Commands,
//!     ) -> Result<Wrench> {
//!         Ok(Wrench::from_parts(
//!             Point3::origin(),
//!             "hull",
//!             Vector3::new(1000.0, 0.0, 0.0),
//!             Vector3::zeros(),
//!         ))
//!     }
//! }
//!
//! let mut evaluator = ForceEvaluator::new(ConstantThrust);
//! let mut states = BodyStates::new("hull", 10.0);
//! states.record(0.0, [0.0; 6]).unwrap();
//! let wrench = evaluator
//!     .evaluate(&states, 0.0, &Environment::default(), &CommandMap::default())
//!     .unwrap();
//! assert!((wrench.force[0] - 1000.0).abs() < 1e-12);
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(clippy::missing_const_for_fn, clippy::missing_errors_doc)]

mod command;
mod error;
mod model;
mod observer;

pub use command::{CommandMap, CommandSource, Commands};
pub use error::ForceError;
pub use model::{ForceEvaluator, ForceModel};
pub use observer::{CollectingObserver, Observer};

/// Result type for force-model operations.
pub type Result<T> = std::result::Result<T, ForceError>;
