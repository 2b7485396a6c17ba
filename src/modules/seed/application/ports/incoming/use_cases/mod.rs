mod seed_demo_content;

pub use seed_demo_content::{SeedDemoContentError, SeedDemoContentUseCase};
