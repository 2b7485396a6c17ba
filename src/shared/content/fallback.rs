/// Literal content served when the datastore cannot answer.
pub trait FallbackContent: Send + Sync {
    type Payload;

    /// Payload used while the datastore is unreachable.
    fn offline(&self) -> Self::Payload;

    /// Payload used when the datastore is reachable but holds nothing.
    fn empty(&self) -> Self::Payload {
        self.offline()
    }
}
