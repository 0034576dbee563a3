use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use mongodb::{Client, Database};

use crate::error::{Result, StoreError};
use crate::models::Thought;
use crate::repository::ThoughtRepository;
use crate::store::ThoughtStore;

pub struct MongoThoughtStore {
    database: Database,
    thoughts: ThoughtRepository,
}

impl MongoThoughtStore {
    /// Connect to MongoDB and create the store.
    ///
    /// When the connection string names a database in its path that one is
    /// used, otherwise `fallback_db`. The driver connects lazily, so this
    /// succeeds even while the server is down; `is_connected` reports the
    /// live state.
    pub async fn connect(mongo_url: &str, fallback_db: &str) -> Result<Self> {
        let client = Client::with_uri_str(mongo_url)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(fallback_db));
        let thoughts = ThoughtRepository::new(&database);

        Ok(Self { database, thoughts })
    }
}

#[async_trait]
impl ThoughtStore for MongoThoughtStore {
    async fn is_connected(&self) -> bool {
        match self.database.run_command(doc! { "ping": 1 }).await {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(error = %e, "store ping failed");
                false
            }
        }
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Thought>> {
        self.thoughts.list_recent(limit).await
    }

    async fn create(&self, message: &str) -> Result<Thought> {
        let thought = Thought::new(message)?;
        self.thoughts.insert(&thought).await?;
        Ok(thought)
    }

    async fn like(&self, thought_id: &str) -> Result<Option<Thought>> {
        let object_id = ObjectId::parse_str(thought_id)
            .map_err(|e| StoreError::InvalidObjectId(e.to_string()))?;

        self.thoughts.inc_hearts(object_id).await
    }
}
