//! Decoding of the `{value, unit}` convention used by YAML inputs.
//!
//! Unit-bearing numbers arrive as a value plus a unit string and are
//! normalized to SI base units (m, s, rad) before reaching any numerical
//! code. Only the units this simulator's inputs actually use are recognized;
//! anything else is rejected rather than silently passed through.

use serde::{Deserialize, Serialize};

use crate::error::TypesError;
use crate::Result;

/// A number tagged with the unit it was written in.
///
/// # Example
///
/// ```
/// use hydro_types::UnitValue;
///
/// let uv: UnitValue = serde_yaml::from_str("{value: 180, unit: deg}").unwrap();
/// assert!((uv.to_si().unwrap() - std::f64::consts::PI).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitValue {
    /// The numeric value, in `unit`.
    pub value: f64,
    /// The unit the value is expressed in.
    pub unit: String,
}

impl UnitValue {
    /// The value converted to SI base units.
    pub fn to_si(&self) -> Result<f64> {
        decode(self.value, &self.unit)
    }
}

/// Convert `value` expressed in `unit` to SI base units.
///
/// Recognized units: `-`/`1` (dimensionless), `m`, `cm`, `mm`, `s`, `ms`,
/// `rad`, `deg`, `rad/s`, `deg/s`, `m/s`.
pub fn decode(value: f64, unit: &str) -> Result<f64> {
    let factor = match unit.trim() {
        "-" | "1" | "" => 1.0,
        "m" | "s" | "rad" | "rad/s" | "m/s" => 1.0,
        "cm" => 1e-2,
        "mm" => 1e-3,
        "ms" => 1e-3,
        "deg" => std::f64::consts::PI / 180.0,
        "deg/s" => std::f64::consts::PI / 180.0,
        other => return Err(TypesError::unknown_unit(other)),
    };
    Ok(value * factor)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn si_units_pass_through() {
        assert_eq!(decode(3.5, "m").unwrap(), 3.5);
        assert_eq!(decode(3.5, "s").unwrap(), 3.5);
        assert_eq!(decode(3.5, "rad/s").unwrap(), 3.5);
        assert_eq!(decode(3.5, "-").unwrap(), 3.5);
    }

    #[test]
    fn scaled_units_convert() {
        assert_relative_eq!(decode(250.0, "cm").unwrap(), 2.5);
        assert_relative_eq!(decode(90.0, "deg").unwrap(), std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(decode(500.0, "ms").unwrap(), 0.5);
    }

    #[test]
    fn unknown_unit_is_rejected_by_name() {
        let err = decode(1.0, "furlong/fortnight").unwrap_err();
        assert!(err.to_string().contains("furlong/fortnight"));
    }

    #[test]
    fn yaml_round_trip() {
        let uv: UnitValue = serde_yaml::from_str("{value: 30, unit: rad/s}").unwrap();
        assert_eq!(uv.value, 30.0);
        assert_eq!(uv.unit, "rad/s");
        assert_eq!(uv.to_si().unwrap(), 30.0);
    }
}
