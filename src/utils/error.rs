use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input '{path}' cannot be opened: {source}")]
    InputOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Validation error: {field}: {reason}")]
    Validation { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, TallyError>;
