//! Force/moment carrier for the force-summation step.

use nalgebra::{Point3, Vector3, Vector6};
use serde::{Deserialize, Serialize};

/// A combined force and moment, tagged with its point of application and the
/// reference frame its components are expressed in.
///
/// Every force model returns one of these; the body's summation step adds
/// them after transporting them to a common point.
///
/// # Units
///
/// - Force: Newtons (N)
/// - Moment: Newton-meters (N·m)
///
/// # Example
///
/// ```
/// use hydro_types::Wrench;
/// use nalgebra::{Point3, Vector3};
///
/// let w = Wrench::from_parts(
///     Point3::origin(),
///     "hull",
///     Vector3::new(0.0, 0.0, -10.0),
///     Vector3::zeros(),
/// );
/// assert!((w.to_vector()[2] + 10.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wrench {
    /// Point of application, in `frame` coordinates.
    pub point: Point3<f64>,

    /// Name of the reference frame the components are expressed in.
    pub frame: String,

    /// Force components (N).
    pub force: Vector3<f64>,

    /// Moment components about `point` (N·m).
    pub torque: Vector3<f64>,
}

impl Wrench {
    /// Create a zero wrench at the given point and frame.
    #[must_use]
    pub fn zero(point: Point3<f64>, frame: impl Into<String>) -> Self {
        Self {
            point,
            frame: frame.into(),
            force: Vector3::zeros(),
            torque: Vector3::zeros(),
        }
    }

    /// Create a wrench from explicit force and torque vectors.
    #[must_use]
    pub fn from_parts(
        point: Point3<f64>,
        frame: impl Into<String>,
        force: Vector3<f64>,
        torque: Vector3<f64>,
    ) -> Self {
        Self {
            point,
            frame: frame.into(),
            force,
            torque,
        }
    }

    /// Create a wrench from a 6-vector: rows 0..3 are force, rows 3..6 moment.
    #[must_use]
    pub fn from_vector(point: Point3<f64>, frame: impl Into<String>, v: Vector6<f64>) -> Self {
        Self {
            point,
            frame: frame.into(),
            force: Vector3::new(v[0], v[1], v[2]),
            torque: Vector3::new(v[3], v[4], v[5]),
        }
    }

    /// The wrench as a 6-vector (force rows 0..3, moment rows 3..6).
    #[must_use]
    pub fn to_vector(&self) -> Vector6<f64> {
        Vector6::new(
            self.force[0],
            self.force[1],
            self.force[2],
            self.torque[0],
            self.torque[1],
            self.torque[2],
        )
    }

    /// Magnitude of the force component.
    #[must_use]
    pub fn force_magnitude(&self) -> f64 {
        self.force.norm()
    }

    /// Magnitude of the moment component.
    #[must_use]
    pub fn torque_magnitude(&self) -> f64 {
        self.torque.norm()
    }

    /// Accumulate another wrench expressed at the same point and frame.
    ///
    /// Adding wrenches expressed elsewhere requires transporting them first;
    /// that is the summation step's job, not this type's.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        debug_assert_eq!(self.frame, other.frame);
        Self {
            point: self.point,
            frame: self.frame.clone(),
            force: self.force + other.force,
            torque: self.torque + other.torque,
        }
    }
}
