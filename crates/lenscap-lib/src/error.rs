use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the capacity model library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a capacity input or sweep axis is outside its valid domain,
    /// including the degenerate mix whose average cycle time resolves to zero.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// Raised when a named mix entry does not match any catalog recipe.
    #[error("unknown recipe name: {name}{}", format_suggestions(.suggestions))]
    UnknownRecipe {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when the same recipe is named more than once in a mix.
    #[error("recipe {name} appears more than once in the product mix")]
    DuplicateMixEntry { name: String },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the configuration file")]
    ConfigDirUnavailable,

    /// Raised when a configuration file is not valid JSON for [`crate::ModelConfig`].
    #[error("failed to parse configuration at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV export errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidInput {
            message: message.into(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
