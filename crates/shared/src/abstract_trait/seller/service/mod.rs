pub mod analytics;
pub mod command;
pub mod query;
