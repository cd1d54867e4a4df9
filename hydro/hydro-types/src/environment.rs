//! Ambient conditions shared by the force catalogue.

use serde::{Deserialize, Serialize};

/// Ambient environmental conditions.
///
/// Passed to every force model; hydrostatic and polar models read the fluid
/// properties, radiation damping ignores them entirely (it is a pure function
/// of motion history).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    /// Water density (kg/m³).
    pub water_density: f64,

    /// Air density (kg/m³).
    pub air_density: f64,

    /// Acceleration due to gravity (m/s²).
    pub gravity: f64,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            water_density: 1025.0,
            air_density: 1.225,
            gravity: 9.81,
        }
    }
}
