use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No data for the requested computation")]
    NoData,
}
