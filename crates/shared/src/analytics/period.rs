use crate::errors::AnalyticsError;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

/// Inclusive date-time range used to filter transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl Period {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, AnalyticsError> {
        if start > end {
            return Err(AnalyticsError::InvalidArgument(format!(
                "period start {start} is after end {end}"
            )));
        }

        Ok(Self { start, end })
    }

    /// Everything recorded from 1900-01-01 up to `now`.
    pub fn all_time(now: NaiveDateTime) -> Self {
        let floor = NaiveDate::from_ymd_opt(1900, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or(now);

        Self {
            start: floor.min(now),
            end: now,
        }
    }

    /// The `days` days leading up to `now`.
    pub fn last_days(now: NaiveDateTime, days: i64) -> Result<Self, AnalyticsError> {
        if days < 1 {
            return Err(AnalyticsError::InvalidArgument(format!(
                "days must be positive, got {days}"
            )));
        }

        let start = TimeDelta::try_days(days)
            .and_then(|span| now.checked_sub_signed(span))
            .ok_or_else(|| {
                AnalyticsError::InvalidArgument(format!("{days} days is out of range"))
            })?;

        Ok(Self { start, end: now })
    }

    /// Both bounds make a period, no bounds mean "unbounded", a single bound
    /// is rejected.
    pub fn from_bounds(
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    ) -> Result<Option<Self>, AnalyticsError> {
        match (start, end) {
            (Some(start), Some(end)) => Self::new(start, end).map(Some),
            (None, None) => Ok(None),
            _ => Err(AnalyticsError::InvalidArgument(
                "start_date and end_date must be given together".to_string(),
            )),
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn contains(&self, moment: NaiveDateTime) -> bool {
        self.start <= moment && moment <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::fixtures::at;

    #[test]
    fn rejects_reversed_bounds() {
        let err = Period::new(at(3, 0), at(1, 0)).unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidArgument(_)));
    }

    #[test]
    fn bounds_are_inclusive() {
        let period = Period::new(at(1, 0), at(3, 0)).unwrap();

        assert!(period.contains(at(1, 0)));
        assert!(period.contains(at(3, 0)));
        assert!(!period.contains(at(3, 1)));
        assert!(!period.contains(at(0, 23)));
    }

    #[test]
    fn single_instant_is_a_valid_period() {
        let period = Period::new(at(2, 5), at(2, 5)).unwrap();
        assert!(period.contains(at(2, 5)));
    }

    #[test]
    fn last_days_ends_now() {
        let now = at(10, 12);
        let period = Period::last_days(now, 3).unwrap();

        assert_eq!(period.end(), now);
        assert_eq!(period.start(), at(7, 12));
    }

    #[test]
    fn last_days_rejects_non_positive() {
        assert!(Period::last_days(at(10, 12), 0).is_err());
        assert!(Period::last_days(at(10, 12), -4).is_err());
    }

    #[test]
    fn from_bounds_needs_both_or_neither() {
        assert_eq!(Period::from_bounds(None, None).unwrap(), None);
        assert!(Period::from_bounds(Some(at(1, 0)), None).is_err());
        assert!(Period::from_bounds(None, Some(at(1, 0))).is_err());
        assert!(
            Period::from_bounds(Some(at(1, 0)), Some(at(2, 0)))
                .unwrap()
                .is_some()
        );
    }

    #[test]
    fn all_time_starts_in_1900() {
        let period = Period::all_time(at(0, 0));
        assert_eq!(period.start().date(), NaiveDate::from_ymd_opt(1900, 1, 1).unwrap());
    }
}
