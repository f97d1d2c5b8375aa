use crate::{
    analytics::histogram::{DailyActivity, build_daily_activity},
    errors::AnalyticsError,
    model::transaction::TransactionModel,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Busiest run of active days found for a seller. `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductiveInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Finds the run of `days` consecutive active dates with the most transactions.
///
/// Slots are the active dates in ascending order, so a window covers `days`
/// dates that had sales, however far apart they are on the calendar. Calendar
/// gaps never count as empty slots. When the seller has `days` or fewer
/// active dates, the whole observed range is returned. On equal totals the
/// earliest window wins.
pub fn most_productive_interval(
    activity: &DailyActivity,
    days: i64,
) -> Result<ProductiveInterval, AnalyticsError> {
    if days < 1 {
        return Err(AnalyticsError::InvalidArgument(format!(
            "days must be positive, got {days}"
        )));
    }

    let dates: Vec<NaiveDate> = activity.keys().copied().collect();
    let (Some(&first), Some(&last)) = (dates.first(), dates.last()) else {
        return Err(AnalyticsError::NoData);
    };

    let window = usize::try_from(days).unwrap_or(usize::MAX);
    if dates.len() <= window {
        return Ok(ProductiveInterval {
            start: first,
            end: last,
        });
    }

    let counts: Vec<u64> = activity.values().map(|&count| u64::from(count)).collect();

    let mut current: u64 = counts[..window].iter().sum();
    let mut best = current;
    let mut best_start = 0;

    for entering in window..counts.len() {
        current = current - counts[entering - window] + counts[entering];

        if current > best {
            best = current;
            best_start = entering - window + 1;
        }
    }

    Ok(ProductiveInterval {
        start: dates[best_start],
        end: dates[best_start + window - 1],
    })
}

/// Histogram plus window search over one seller's transactions.
pub fn compute_productive_interval(
    transactions: &[TransactionModel],
    days: i64,
) -> Result<ProductiveInterval, AnalyticsError> {
    let activity = build_daily_activity(transactions);
    most_productive_interval(&activity, days)
}
