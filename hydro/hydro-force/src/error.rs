//! Error types for force-model evaluation.

use thiserror::Error;

/// Errors that can occur while evaluating a force model.
#[derive(Debug, Error)]
pub enum ForceError {
    /// A declared command is not registered in the live command source.
    #[error(
        "unable to retrieve command '{command}' for '{model}': the command is not registered \
         in the command source. Check that the file containing the commands was supplied to \
         the simulator and that the command exists in that file."
    )]
    MissingCommand {
        /// Name of the missing command.
        command: String,
        /// Name of the force model that declared it.
        model: String,
    },

    /// The concrete model's evaluation failed.
    #[error("force model '{model}' failed: {source}")]
    Evaluation {
        /// Name of the failing force model.
        model: String,
        /// The underlying error, propagated unchanged.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ForceError {
    /// Create a missing-command error.
    #[must_use]
    pub fn missing_command(command: impl Into<String>, model: impl Into<String>) -> Self {
        Self::MissingCommand {
            command: command.into(),
            model: model.into(),
        }
    }

    /// Wrap a concrete model's error.
    #[must_use]
    pub fn evaluation(
        model: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Evaluation {
            model: model.into(),
            source: Box::new(source),
        }
    }
}
