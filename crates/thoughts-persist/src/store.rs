use async_trait::async_trait;

use crate::error::Result;
use crate::models::Thought;

/// Store operations backing the HTTP layer.
///
/// Handlers receive this as an injected dependency instead of reaching for
/// a global connection handle, and the connection state is an explicit
/// capability query rather than ambient state.
#[async_trait]
pub trait ThoughtStore: Send + Sync {
    /// Whether the store is reachable right now. Evaluated freshly on every
    /// call; the HTTP gate asks once per request.
    async fn is_connected(&self) -> bool;

    /// Newest thoughts first, at most `limit` of them.
    async fn list_recent(&self, limit: i64) -> Result<Vec<Thought>>;

    /// Validate and persist a new thought, returning it with its assigned
    /// id and timestamp.
    async fn create(&self, message: &str) -> Result<Thought>;

    /// Add one heart to the thought with the given id. Returns the
    /// document as it was before the increment, or `None` if no thought
    /// matches.
    async fn like(&self, thought_id: &str) -> Result<Option<Thought>>;
}
