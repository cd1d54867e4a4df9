//! Retrieval of named control inputs at evaluation time.

use std::collections::HashMap;

/// A live source of control inputs (rudder angle, propeller rpm, ...).
///
/// Keys follow the `"<model name>(<command name>)"` convention, so two
/// models can declare a command with the same short name without clashing.
pub trait CommandSource {
    /// The value of `key` at time `t`, if the source knows it.
    fn get(&self, key: &str, t: f64) -> Option<f64>;
}

/// A plain map-backed command source.
///
/// Real simulations drive this from a command schedule or a cosimulation
/// peer; tests and tools fill it directly.
#[derive(Debug, Clone, Default)]
pub struct CommandMap {
    values: HashMap<String, f64>,
}

impl CommandMap {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a command value under its full `"model(command)"` key.
    pub fn set(&mut self, key: impl Into<String>, value: f64) {
        self.values.insert(key.into(), value);
    }
}

impl CommandSource for CommandMap {
    fn get(&self, key: &str, _t: f64) -> Option<f64> {
        self.values.get(key).copied()
    }
}

/// The commands a model declared, resolved for one evaluation.
#[derive(Debug, Clone, Default)]
pub struct Commands {
    values: HashMap<String, f64>,
}

impl Commands {
    /// An empty command set (for models that declare none).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The resolved value of a command, by its short name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Number of resolved commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if no commands were resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn insert(&mut self, name: String, value: f64) {
        self.values.insert(name, value);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn map_source_round_trip() {
        let mut source = CommandMap::new();
        source.set("propeller(rpm)", 120.0);
        assert_eq!(source.get("propeller(rpm)", 0.0), Some(120.0));
        assert_eq!(source.get("propeller(pitch)", 0.0), None);
    }

    #[test]
    fn commands_lookup_by_short_name() {
        let mut commands = Commands::empty();
        commands.insert("rpm".into(), 120.0);
        assert_eq!(commands.get("rpm"), Some(120.0));
        assert_eq!(commands.len(), 1);
        assert!(!commands.is_empty());
    }
}
