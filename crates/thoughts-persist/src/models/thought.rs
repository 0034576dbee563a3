use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum message length in characters, after trimming.
pub const MESSAGE_MIN_LEN: usize = 5;
/// Maximum message length in characters, after trimming.
pub const MESSAGE_MAX_LEN: usize = 140;

/// A happy thought as stored in the `thoughts` collection.
///
/// Field names follow the wire format: `_id`, `createdAt` and `__v` are
/// carried verbatim into API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thought {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub message: String,
    pub hearts: i64,
    #[serde(rename = "createdAt", with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "__v", default)]
    pub version: i32,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("message must be at least {MESSAGE_MIN_LEN} characters, got {len}")]
    MessageTooShort { len: usize },

    #[error("message must be at most {MESSAGE_MAX_LEN} characters, got {len}")]
    MessageTooLong { len: usize },
}

impl Thought {
    /// Build a new thought from a raw message.
    ///
    /// Trims surrounding whitespace and enforces the [5, 140] character
    /// bounds before the document ever reaches the store. Creation defaults
    /// are applied here: zero hearts, current timestamp, version 0.
    pub fn new(message: &str) -> Result<Self, ValidationError> {
        let message = message.trim();
        let len = message.chars().count();

        if len < MESSAGE_MIN_LEN {
            return Err(ValidationError::MessageTooShort { len });
        }
        if len > MESSAGE_MAX_LEN {
            return Err(ValidationError::MessageTooLong { len });
        }

        Ok(Self {
            id: ObjectId::new(),
            message: message.to_string(),
            hearts: 0,
            created_at: Utc::now(),
            version: 0,
        })
    }
}
