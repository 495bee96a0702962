//! Exit codes for the GraphQL CLI.
//!
//! Distinct exit codes let scripts and CI systems tell failure modes apart.

/// Exit codes used by the CLI.
///
/// 0 indicates success and non-zero values indicate different types of
/// failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every export stage succeeded
    Success = 0,
    /// At least one export stage failed
    ExportError = 1,
    /// Configuration error (invalid config file or schema pattern)
    ConfigError = 2,
    /// Schema sources could not be parsed or a schema hook failed
    SchemaError = 3,
    /// I/O error (file read failure)
    IoError = 4,
}

impl ExitCode {
    /// Exit the process with this exit code.
    pub fn exit(self) -> ! {
        tracing::debug!(code = %self, "Exiting");
        std::process::exit(self as i32)
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::ExportError => write!(f, "export error"),
            Self::ConfigError => write!(f, "configuration error"),
            Self::SchemaError => write!(f, "schema error"),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}
