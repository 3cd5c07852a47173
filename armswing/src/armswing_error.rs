use thiserror::Error;

/// Errors raised while setting up arm-swing locomotion. Nothing in here is ever raised by a per-frame update.
#[derive(Error, Debug)]
pub enum ArmSwingError {
    /// A configuration value can't be used
    #[error("Invalid configuration for `{field}`: {reason}")]
    InvalidConfig {
        /// Name of the offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
    /// A configuration file couldn't be parsed
    #[error("The configuration could not be parsed")]
    ConfigParse(#[from] serde_json::Error),
    /// The logger couldn't be installed
    #[error("A logger has already been installed")]
    LoggerAlreadySet(#[from] log::SetLoggerError),
    #[allow(missing_docs)]
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[allow(missing_docs)]
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ArmSwingError {
    pub(crate) fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        ArmSwingError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}
