//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        CliError::Application(e.into())
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Application(e) => match e {
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::Domain(DomainError::IndexOutOfRange { .. }) => {
                    crate::exitcode::USAGE
                }
                ApplicationError::Domain(DomainError::UnknownNode(_)) => crate::exitcode::SOFTWARE,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_index_out_of_range_when_mapping_then_usage_exit_code() {
        let err: CliError = DomainError::IndexOutOfRange { index: 7, len: 4 }.into();
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
        assert_eq!(
            err.to_string(),
            "child index 7 out of range (node has 4 children)"
        );
    }

    #[test]
    fn given_unknown_node_when_mapping_then_software_exit_code() {
        let mut catalog = crate::domain::Catalog::new();
        let node = catalog.insert(crate::domain::MusicComponent::song("s"));
        let err: CliError = DomainError::UnknownNode(node).into();
        assert_eq!(err.exit_code(), crate::exitcode::SOFTWARE);
    }

    #[test]
    fn given_config_error_when_mapping_then_config_exit_code() {
        let err = CliError::Application(ApplicationError::Config {
            message: "bad".into(),
        });
        assert_eq!(err.exit_code(), crate::exitcode::CONFIG);
    }
}
