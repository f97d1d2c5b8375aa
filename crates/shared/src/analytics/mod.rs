//! Pure computations behind the seller analytics endpoints.
//!
//! Everything here works on collections already loaded from storage and
//! keeps no state between calls.

pub mod aggregate;
pub mod histogram;
pub mod period;
pub mod window;

pub use self::aggregate::{
    SellerTotal, most_productive, rank_seller_totals, sum_amounts, sum_amounts_in_period,
};
pub use self::histogram::{DailyActivity, build_daily_activity};
pub use self::period::Period;
pub use self::window::{ProductiveInterval, compute_productive_interval, most_productive_interval};
