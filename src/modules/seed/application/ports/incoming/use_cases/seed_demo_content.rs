use async_trait::async_trait;

use crate::modules::seed::application::domain::seed_report::{SeedCollection, SeedReport};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeedDemoContentError {
    #[error("Seeding {collection} failed: {reason}")]
    StoreFailed {
        collection: SeedCollection,
        reason: String,
    },
}

/// Fills every empty demo collection. Collections that already hold rows are left alone.
#[async_trait]
pub trait SeedDemoContentUseCase: Send + Sync {
    async fn execute(&self) -> Result<SeedReport, SeedDemoContentError>;
}
