use crate::ExerciseID;

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error("resource not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("resource not found: {0}")]
    ResourceNotFound(String),
    #[error("resource is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),
    #[error(transparent)]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

impl From<ReadError> for LoadError {
    fn from(value: ReadError) -> Self {
        match value {
            ReadError::NotFound(name) => LoadError::ResourceNotFound(name),
            ReadError::Other(other) => LoadError::Storage(other),
        }
    }
}

/// Reason for skipping a single data row.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("expected at least {expected} fields, found {0}", expected = crate::record::MIN_FIELDS)]
    TooFewFields(usize),
    #[error("invalid id \"{0}\"")]
    InvalidId(String),
    #[error("duplicate id {0}")]
    DuplicateId(ExerciseID),
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("invalid settings: {0}")]
    Invalid(#[from] serde_json::Error),
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("exercise catalog already initialized")]
pub struct AlreadyInitialized;
