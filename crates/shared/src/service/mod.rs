pub mod seed;
pub mod seller;
pub mod transaction;
