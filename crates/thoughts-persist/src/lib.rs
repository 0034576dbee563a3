pub mod client;
pub mod error;
pub mod models;
pub mod repository;
pub mod store;

pub use client::MongoThoughtStore;
pub use error::StoreError;
pub use models::{Thought, ValidationError, MESSAGE_MAX_LEN, MESSAGE_MIN_LEN};
pub use repository::ThoughtRepository;
pub use store::ThoughtStore;
