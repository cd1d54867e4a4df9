//! Error types for quadrature selection.

use thiserror::Error;

/// Errors that can occur when selecting a quadrature rule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuadratureError {
    /// The rule name is not one of the supported quadrature schemes.
    #[error(
        "unknown quadrature type: '{name}'. Should be one of 'gauss-kronrod', 'rectangle', \
         'simpson', 'trapezoidal', 'burcher', 'clenshaw-curtis' or 'filon'."
    )]
    UnknownRule {
        /// The unrecognized name.
        name: String,
    },
}

impl QuadratureError {
    /// Create an unknown-rule error.
    #[must_use]
    pub fn unknown_rule(name: impl Into<String>) -> Self {
        Self::UnknownRule { name: name.into() }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_bad_input_and_the_allowed_set() {
        let err = QuadratureError::unknown_rule("monte-carlo");
        let msg = err.to_string();
        assert!(msg.contains("monte-carlo"));
        assert!(msg.contains("gauss-kronrod"));
        assert!(msg.contains("filon"));
    }
}
