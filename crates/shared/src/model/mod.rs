pub mod seller;
pub mod transaction;
