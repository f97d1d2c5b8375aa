mod analytics;
mod command;
mod query;

pub use self::analytics::SellerAnalyticsService;
pub use self::command::SellerCommandService;
pub use self::query::SellerQueryService;
