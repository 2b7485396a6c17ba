pub mod demo_dataset;
pub mod seed_report;
