use thiserror::Error;

pub type Result<T> = std::result::Result<T, DirectiveError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectiveError {
    #[error("No mock resolver registered for key '{key}'")]
    MissingMockResolver { key: String },

    #[error("Field '{field}' is not annotated with @{directive}")]
    NotAttached {
        directive: &'static str,
        field: String,
    },

    #[error("Invalid argument '{argument}' on @{directive}: {message}")]
    InvalidArgument {
        directive: &'static str,
        argument: String,
        message: String,
    },
}
