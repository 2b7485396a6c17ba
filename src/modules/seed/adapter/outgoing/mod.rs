mod seed_store_postgres;

pub use seed_store_postgres::SeedStorePostgres;
