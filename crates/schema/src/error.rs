use thiserror::Error;

pub type Result<T> = std::result::Result<T, SchemaError>;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Failed to parse schema source {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    #[error("Invalid GraphQL name '{name}': {message}")]
    InvalidName { name: String, message: String },

    #[error("Definition is not a type definition: {0}")]
    NotATypeDefinition(String),
}
