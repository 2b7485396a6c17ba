use std::future::Future;
use std::sync::Arc;

use serde::Serialize;

use crate::shared::content::FallbackContent;
use crate::shared::datastore::DatastoreProbe;

/// Where a read response was served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    Static,
    Database,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    pub source: ContentSource,
    pub data: T,
}

impl<T> Resolved<T> {
    pub fn from_static(data: T) -> Self {
        Self {
            source: ContentSource::Static,
            data,
        }
    }

    pub fn from_database(data: T) -> Self {
        Self {
            source: ContentSource::Database,
            data,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        Resolved {
            source: self.source,
            data: f(self.data),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Resolver
// ──────────────────────────────────────────────────────────
//

/// Chooses between live records and a resource's static payload.
///
/// Availability is asked of the probe on every call. When the datastore is
/// unreachable the loader is never invoked.
#[derive(Clone)]
pub struct ContentResolver {
    probe: Arc<dyn DatastoreProbe>,
}

impl ContentResolver {
    pub fn new(probe: Arc<dyn DatastoreProbe>) -> Self {
        Self { probe }
    }

    pub async fn is_available(&self) -> bool {
        self.probe.is_available().await
    }

    /// `Ok(None)` from the loader means "connected, nothing stored" and maps to
    /// the fallback's empty payload.
    pub async fn resolve<F, L, Fut, E>(
        &self,
        fallback: &F,
        load: L,
    ) -> Result<Resolved<F::Payload>, E>
    where
        F: FallbackContent + ?Sized,
        L: FnOnce() -> Fut,
        Fut: Future<Output = Result<Option<F::Payload>, E>>,
    {
        if !self.is_available().await {
            return Ok(Resolved::from_static(fallback.offline()));
        }

        match load().await? {
            Some(payload) => Ok(Resolved::from_database(payload)),
            None => Ok(Resolved::from_static(fallback.empty())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct FixedProbe(bool);

    #[async_trait]
    impl DatastoreProbe for FixedProbe {
        async fn is_available(&self) -> bool {
            self.0
        }
    }

    struct Greeting;

    impl FallbackContent for Greeting {
        type Payload = String;

        fn offline(&self) -> String {
            "offline".to_string()
        }

        fn empty(&self) -> String {
            "empty".to_string()
        }
    }

    fn resolver(available: bool) -> ContentResolver {
        ContentResolver::new(Arc::new(FixedProbe(available)))
    }

    #[tokio::test]
    async fn offline_serves_static_without_calling_loader() {
        let called = AtomicBool::new(false);
        let called_ref = &called;

        let result: Result<_, String> = resolver(false)
            .resolve(&Greeting, move || async move {
                called_ref.store(true, Ordering::SeqCst);
                Ok(Some("stored".to_string()))
            })
            .await;

        assert_eq!(result.unwrap(), Resolved::from_static("offline".to_string()));
        assert!(!called.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn connected_without_rows_serves_empty_fallback() {
        let result: Result<_, String> = resolver(true).resolve(&Greeting, || async { Ok(None) }).await;

        let resolved = result.unwrap();
        assert_eq!(resolved.source, ContentSource::Static);
        assert_eq!(resolved.data, "empty");
    }

    #[tokio::test]
    async fn connected_with_rows_serves_database() {
        let result: Result<_, String> = resolver(true)
            .resolve(&Greeting, || async { Ok(Some("stored".to_string())) })
            .await;

        assert_eq!(result.unwrap(), Resolved::from_database("stored".to_string()));
    }

    #[tokio::test]
    async fn loader_error_is_propagated() {
        let result = resolver(true)
            .resolve(&Greeting, || async { Err::<Option<String>, _>("boom") })
            .await;

        assert_eq!(result, Err("boom"));
    }

    #[test]
    fn source_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(ContentSource::Database).unwrap(),
            serde_json::json!("database")
        );
    }
}
