use async_trait::async_trait;
use tracing::{debug, info};

use crate::modules::seed::application::{
    domain::{
        demo_dataset::{demo_certifications, demo_experiences, demo_projects, demo_skills},
        seed_report::{SeedCollection, SeedReport},
    },
    ports::incoming::use_cases::{SeedDemoContentError, SeedDemoContentUseCase},
    ports::outgoing::{SeedStore, SeedStoreError},
};

#[derive(Clone)]
pub struct SeedDemoContentService<S>
where
    S: SeedStore + Send + Sync,
{
    store: S,
}

impl<S> SeedDemoContentService<S>
where
    S: SeedStore + Send + Sync,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    async fn seed(&self, collection: SeedCollection) -> Result<u64, SeedStoreError> {
        let existing = self.store.count(collection).await?;
        if existing > 0 {
            debug!("{} already holds {} rows, skipping", collection, existing);
            return Ok(0);
        }

        info!("Populating {} demo data", collection);
        let inserted = match collection {
            SeedCollection::Skills => self.store.insert_skills(demo_skills()).await?,
            SeedCollection::Experiences => {
                self.store.insert_experiences(demo_experiences()).await?
            }
            SeedCollection::Projects => self.store.insert_projects(demo_projects()).await?,
            SeedCollection::Certifications => {
                self.store
                    .insert_certifications(demo_certifications())
                    .await?
            }
        };
        info!("{} demo data populated ({} rows)", collection, inserted);

        Ok(inserted)
    }
}

#[async_trait]
impl<S> SeedDemoContentUseCase for SeedDemoContentService<S>
where
    S: SeedStore + Send + Sync,
{
    async fn execute(&self) -> Result<SeedReport, SeedDemoContentError> {
        let mut report = SeedReport::default();

        for collection in SeedCollection::ALL {
            let inserted =
                self.seed(collection)
                    .await
                    .map_err(|e| SeedDemoContentError::StoreFailed {
                        collection,
                        reason: e.to_string(),
                    })?;
            report.record(collection, inserted);
        }

        if report.total() > 0 {
            info!("Demo data populated: {} records", report.total());
        } else {
            info!("Demo data already present, nothing to seed");
        }

        Ok(report)
    }
}
