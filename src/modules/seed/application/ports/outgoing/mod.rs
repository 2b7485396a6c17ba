mod seed_store;

pub use seed_store::{SeedStore, SeedStoreError};
