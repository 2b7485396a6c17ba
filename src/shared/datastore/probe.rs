use async_trait::async_trait;

/// Answers whether the datastore can serve a request right now.
#[async_trait]
pub trait DatastoreProbe: Send + Sync {
    async fn is_available(&self) -> bool;
}
