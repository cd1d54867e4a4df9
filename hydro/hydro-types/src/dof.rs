//! Degree-of-freedom indexing.

use serde::{Deserialize, Serialize};

/// One of the six degrees of freedom of a rigid vessel.
///
/// Indexed 0..5 in the order surge, sway, heave, roll, pitch, yaw; the
/// lowercase axis names follow the seakeeping convention (u, v, w for the
/// linear velocities, p, q, r for the angular rates).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dof {
    /// Translation along the body x axis (velocity `u`).
    Surge,
    /// Translation along the body y axis (velocity `v`).
    Sway,
    /// Translation along the body z axis (velocity `w`).
    Heave,
    /// Rotation about the body x axis (rate `p`).
    Roll,
    /// Rotation about the body y axis (rate `q`).
    Pitch,
    /// Rotation about the body z axis (rate `r`).
    Yaw,
}

impl Dof {
    /// All six DOFs in index order.
    pub const ALL: [Self; 6] = [
        Self::Surge,
        Self::Sway,
        Self::Heave,
        Self::Roll,
        Self::Pitch,
        Self::Yaw,
    ];

    /// Index of this DOF in 6-vectors and 6x6 matrices.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Surge => 0,
            Self::Sway => 1,
            Self::Heave => 2,
            Self::Roll => 3,
            Self::Pitch => 4,
            Self::Yaw => 5,
        }
    }

    /// The DOF with the given index, if `index < 6`.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Surge),
            1 => Some(Self::Sway),
            2 => Some(Self::Heave),
            3 => Some(Self::Roll),
            4 => Some(Self::Pitch),
            5 => Some(Self::Yaw),
            _ => None,
        }
    }

    /// Conventional velocity-component name (`u`, `v`, `w`, `p`, `q`, `r`).
    #[must_use]
    pub const fn axis_name(self) -> &'static str {
        match self {
            Self::Surge => "u",
            Self::Sway => "v",
            Self::Heave => "w",
            Self::Roll => "p",
            Self::Pitch => "q",
            Self::Yaw => "r",
        }
    }

    /// True for the three rotational DOFs.
    #[must_use]
    pub const fn is_rotation(self) -> bool {
        matches!(self, Self::Roll | Self::Pitch | Self::Yaw)
    }
}

impl std::fmt::Display for Dof {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.axis_name())
    }
}
