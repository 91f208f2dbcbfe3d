//! CLI-specific error types and mappings.
//!
//! This module provides the error type for the CLI adapter and maps core
//! errors to exit codes and user-facing messages.

use specfit_core::{CatalogError, CheckError, ConfigError, RegistryError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A comparison could not be produced; displays the explanation shown in
    /// place of the report.
    #[error("{}", .0.user_message())]
    Check(CheckError),

    /// The catalog rejected a maintenance request.
    #[error("Catalog error: {0}")]
    Catalog(CatalogError),

    /// The catalog file or schema could not be created.
    #[error("Catalog setup failed: {0}")]
    Setup(String),

    /// The requested title is not in the registry.
    #[error("Unknown title '{0}'. Run `specfit titles` to see what can be checked.")]
    UnknownTitle(String),

    /// Malformed input data (import files, title registries).
    #[error("Invalid data: {0}")]
    Data(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit code 1 is reserved for a report with failing dimensions.
    /// Errors use codes from sysexits.h.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Check(CheckError::Catalog(e)) | Self::Catalog(e) => catalog_exit_code(e),
            Self::Check(CheckError::Probe(_)) => 71, // EX_OSERR
            Self::Check(CheckError::Validation(_)) | Self::Data(_) => 65, // EX_DATAERR
            Self::Setup(_) => 73,                    // EX_CANTCREAT
            Self::UnknownTitle(_) => 64,             // EX_USAGE
            Self::Io(_) => 74,                       // EX_IOERR
            Self::Config(_) => 78,                   // EX_CONFIG
        }
    }
}

const fn catalog_exit_code(err: &CatalogError) -> u8 {
    match err {
        CatalogError::NotFound { .. } => 66,  // EX_NOINPUT
        CatalogError::Malformed(_) => 65,     // EX_DATAERR
        CatalogError::Unavailable(_) => 69,   // EX_UNAVAILABLE
        CatalogError::Configuration(_) => 78, // EX_CONFIG
    }
}

impl From<CheckError> for CliError {
    fn from(err: CheckError) -> Self {
        Self::Check(err)
    }
}

impl From<CatalogError> for CliError {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err)
    }
}

impl From<RegistryError> for CliError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::UnknownTitle(name) => Self::UnknownTitle(name),
            RegistryError::Read { .. } => Self::Io(err.to_string()),
            other => Self::Data(other.to_string()),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Data(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use specfit_core::{ProbeError, ProfileKind};

    use super::*;

    #[test]
    fn test_check_error_displays_user_message() {
        let err = CliError::from(CheckError::Catalog(CatalogError::NotFound {
            application_id: 12,
            kind: ProfileKind::Minimum,
        }));
        assert_eq!(err.to_string(), "No data available for this title.");
        assert_eq!(err.exit_code(), 66);

        let err = CliError::from(CheckError::Probe(ProbeError::Cpu("no cpufreq".into())));
        assert_eq!(err.to_string(), "Could not determine system specs.");
        assert_eq!(err.exit_code(), 71);

        let err = CliError::from(CheckError::Catalog(CatalogError::Malformed("cpu_cores".into())));
        assert_eq!(
            err.to_string(),
            "The stored requirements for this title are invalid."
        );
        assert_eq!(err.exit_code(), 65);
    }

    #[test]
    fn test_exit_codes_never_collide_with_failed_report() {
        let errors = [
            CliError::from(CatalogError::Unavailable("down".into())),
            CliError::Setup("read-only filesystem".into()),
            CliError::UnknownTitle("Doom".into()),
            CliError::Data("bad json".into()),
            CliError::Io("missing".into()),
            CliError::Config("bad driver".into()),
        ];
        for err in errors {
            assert_ne!(err.exit_code(), 0);
            assert_ne!(err.exit_code(), 1);
        }
    }

    #[test]
    fn test_registry_errors_map_by_kind() {
        assert!(matches!(
            CliError::from(RegistryError::UnknownTitle("Doom".into())),
            CliError::UnknownTitle(_)
        ));
        assert!(matches!(
            CliError::from(RegistryError::DuplicateId(5)),
            CliError::Data(_)
        ));
    }
}
