//! Per-body state: identity plus the six velocity histories.

use crate::{Dof, VelocityHistory};
use crate::Result;

/// Everything a force model may read about a body: its name and the rolling
/// history of each of its six velocity components.
///
/// The solver is the sole writer (one [`record`](Self::record) per accepted
/// step); force models hold a shared reference and only read.
#[derive(Debug, Clone)]
pub struct BodyStates {
    /// Body name; also the name of the body-fixed reference frame.
    pub name: String,

    /// Velocity histories, indexed by [`Dof`].
    histories: [VelocityHistory; 6],
}

impl BodyStates {
    /// Create a body whose histories retain `max_span` seconds.
    ///
    /// The span should be at least the largest `history_span()` of the force
    /// models attached to this body.
    #[must_use]
    pub fn new(name: impl Into<String>, max_span: f64) -> Self {
        Self {
            name: name.into(),
            histories: std::array::from_fn(|_| VelocityHistory::new(max_span)),
        }
    }

    /// The history of one velocity component.
    #[must_use]
    pub fn velocity(&self, dof: Dof) -> &VelocityHistory {
        &self.histories[dof.index()]
    }

    /// Record all six velocity components at time `t`.
    ///
    /// Components are ordered `[u, v, w, p, q, r]`.
    pub fn record(&mut self, t: f64, velocities: [f64; 6]) -> Result<()> {
        for (history, value) in self.histories.iter_mut().zip(velocities) {
            history.record(t, value)?;
        }
        Ok(())
    }

    /// The newest recorded velocity components, `[u, v, w, p, q, r]`.
    ///
    /// Zero for components never recorded.
    #[must_use]
    pub fn current_velocities(&self) -> [f64; 6] {
        std::array::from_fn(|i| self.histories[i].latest().unwrap_or(0.0))
    }

    /// Bitwise snapshot of the current state, for memoization.
    ///
    /// Captures the newest velocity of each DOF plus the held history span;
    /// together with the evaluation time this identifies a step's state.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            span_bits: self.histories[0].duration().to_bits(),
            velocity_bits: std::array::from_fn(|i| {
                self.histories[i].latest().unwrap_or(0.0).to_bits()
            }),
        }
    }
}

/// Bitwise image of a body's current state.
///
/// Two snapshots compare equal if and only if every stored float is
/// bit-identical; the memoization layer uses this to decide whether a cached
/// wrench is still valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateSnapshot {
    span_bits: u64,
    velocity_bits: [u64; 6],
}
