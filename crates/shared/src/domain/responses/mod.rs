mod analytics;
mod api;
mod seller;
mod transaction;

pub use self::analytics::{
    ProductiveIntervalResponse, SalesStatisticsResponse, SellerTotalAmountResponse,
};
pub use self::api::ApiResponse;
pub use self::seller::SellerResponse;
pub use self::transaction::TransactionResponse;
