mod analytics;
mod seller;
mod transaction;

pub use self::analytics::{LowPerformanceQuery, PeriodQuery};
pub use self::seller::{CreateSellerRequest, UpdateSellerRequest};
pub use self::transaction::{CreateTransactionRequest, UpdateTransactionRequest};

use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;
use validator::ValidationError;

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

pub(crate) fn positive_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if *amount <= Decimal::ZERO {
        return Err(ValidationError::new("positive"));
    }
    Ok(())
}

pub(crate) fn non_negative_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ValidationError::new("range"));
    }
    Ok(())
}

pub(crate) fn not_in_future(moment: &NaiveDateTime) -> Result<(), ValidationError> {
    if *moment > Local::now().naive_local() {
        return Err(ValidationError::new("future"));
    }
    Ok(())
}
