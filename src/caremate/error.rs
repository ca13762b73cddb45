use crate::model::ListKind;
use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CareMateError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("No {list} entry with id {id}")]
    ItemNotFound { list: ListKind, id: String },

    #[error("Unknown common allergy: {0}")]
    UnknownCatalogEntry(String),

    #[error("Step {0} does not exist")]
    InvalidStep(usize),

    #[error("Render error: {0}")]
    Render(#[from] minijinja::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Export failed: {0}")]
    Sink(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, CareMateError>;
