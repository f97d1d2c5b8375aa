use crate::model::transaction::TransactionModel;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Transaction count per calendar day. Days without sales have no entry.
pub type DailyActivity = BTreeMap<NaiveDate, u32>;

/// Counts transactions per calendar day, ignoring time of day, amount and
/// payment type.
pub fn build_daily_activity<'a, I>(transactions: I) -> DailyActivity
where
    I: IntoIterator<Item = &'a TransactionModel>,
{
    let mut activity = DailyActivity::new();

    for transaction in transactions {
        *activity
            .entry(transaction.transaction_date.date())
            .or_insert(0) += 1;
    }

    activity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        analytics::fixtures::{at, day, sale},
        model::transaction::PaymentType,
    };

    #[test]
    fn empty_input_gives_empty_histogram() {
        let none: Vec<TransactionModel> = Vec::new();
        let activity = build_daily_activity(&none);
        assert!(activity.is_empty());
    }

    #[test]
    fn truncates_time_of_day() {
        let transactions = vec![
            sale(1, "10.00", at(0, 0)),
            sale(1, "20.00", at(0, 23)),
            sale(1, "5.00", at(2, 12)),
        ];

        let activity = build_daily_activity(&transactions);

        assert_eq!(activity.len(), 2);
        assert_eq!(activity[&day(0)], 2);
        assert_eq!(activity[&day(2)], 1);
        assert!(!activity.contains_key(&day(1)));
    }

    #[test]
    fn counts_every_payment_type_and_amount() {
        let mut cash = sale(1, "0.01", at(4, 9));
        cash.payment_type = PaymentType::Cash;
        let transactions = vec![sale(1, "1000000.00", at(4, 10)), cash];

        let activity = build_daily_activity(&transactions);

        assert_eq!(activity[&day(4)], 2);
    }

    #[test]
    fn keys_come_out_in_calendar_order() {
        let transactions = vec![
            sale(1, "1.00", at(8, 1)),
            sale(1, "1.00", at(1, 1)),
            sale(1, "1.00", at(5, 1)),
        ];

        let dates: Vec<_> = build_daily_activity(&transactions).into_keys().collect();

        assert_eq!(dates, vec![day(1), day(5), day(8)]);
    }
}
