mod command;
mod query;
mod stats;

pub use self::command::TransactionCommandService;
pub use self::query::TransactionQueryService;
pub use self::stats::TransactionStatsService;
