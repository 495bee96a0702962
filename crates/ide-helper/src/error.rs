use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExportError>;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Invalid definition for directive {class_name}: {message}")]
    InvalidDirectiveDefinition { class_name: String, message: String },

    #[error("Failed to read stub file {}: {source}", path.display())]
    ReadStub {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove {}: {source}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
