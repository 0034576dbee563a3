use thiserror::Error;

use crate::models::ValidationError;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("BSON serialization error: {0}")]
    BsonSerialization(#[from] bson::ser::Error),

    #[error("Invalid thought ID: {0}")]
    InvalidObjectId(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("{0}")]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, StoreError>;
