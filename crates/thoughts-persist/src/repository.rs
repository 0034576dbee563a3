use bson::{doc, oid::ObjectId};
use futures::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use crate::error::Result;
use crate::models::Thought;

const COLLECTION_NAME: &str = "thoughts";

#[derive(Clone)]
pub struct ThoughtRepository {
    collection: Collection<Thought>,
}

impl ThoughtRepository {
    pub fn new(database: &Database) -> Self {
        let collection = database.collection(COLLECTION_NAME);
        Self { collection }
    }

    /// Insert a fully built thought document.
    pub async fn insert(&self, thought: &Thought) -> Result<()> {
        self.collection.insert_one(thought).await?;
        Ok(())
    }

    /// Fetch the newest thoughts, most recent first.
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<Thought>> {
        let thoughts = self
            .collection
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .limit(limit)
            .await?
            .try_collect()
            .await?;
        Ok(thoughts)
    }

    /// Atomically add one heart, returning the document as it was before
    /// the increment. `None` when no thought matches the id.
    pub async fn inc_hearts(&self, thought_id: ObjectId) -> Result<Option<Thought>> {
        let previous = self
            .collection
            .find_one_and_update(
                doc! { "_id": thought_id },
                doc! { "$inc": { "hearts": 1 } },
            )
            .return_document(ReturnDocument::Before)
            .await?;
        Ok(previous)
    }
}
