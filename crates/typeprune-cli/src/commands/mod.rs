pub mod prune;
pub mod report;
pub mod run_common;
pub mod schema_loader;
