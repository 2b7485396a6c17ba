mod seed_demo_content_service;

pub use seed_demo_content_service::SeedDemoContentService;
