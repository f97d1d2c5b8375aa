use crate::{analytics::period::Period, model::transaction::TransactionModel};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerTotal {
    pub seller_id: i64,
    pub total_amount: Decimal,
}

/// Exact decimal sum; zero for no transactions.
pub fn sum_amounts<'a, I>(transactions: I) -> Decimal
where
    I: IntoIterator<Item = &'a TransactionModel>,
{
    transactions
        .into_iter()
        .map(|transaction| transaction.amount)
        .sum()
}

pub fn sum_amounts_in_period(transactions: &[TransactionModel], period: &Period) -> Decimal {
    sum_amounts(
        transactions
            .iter()
            .filter(|transaction| period.contains(transaction.transaction_date)),
    )
}

/// Groups `(seller_id, amount)` pairs by seller and orders the totals from
/// largest to smallest. Equal totals are ordered by ascending seller id.
pub fn rank_seller_totals<I>(amounts: I) -> Vec<SellerTotal>
where
    I: IntoIterator<Item = (i64, Decimal)>,
{
    let mut totals: BTreeMap<i64, Decimal> = BTreeMap::new();

    for (seller_id, amount) in amounts {
        *totals.entry(seller_id).or_insert(Decimal::ZERO) += amount;
    }

    let mut ranking: Vec<SellerTotal> = totals
        .into_iter()
        .map(|(seller_id, total_amount)| SellerTotal {
            seller_id,
            total_amount,
        })
        .collect();

    // stable: ids stay ascending within a tie
    ranking.sort_by(|a, b| b.total_amount.cmp(&a.total_amount));

    ranking
}

pub fn most_productive(ranking: &[SellerTotal]) -> Option<SellerTotal> {
    ranking.first().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::fixtures::{at, sale};

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    #[test]
    fn sum_of_nothing_is_zero() {
        assert_eq!(sum_amounts(&Vec::<TransactionModel>::new()), Decimal::ZERO);
    }

    #[test]
    fn sum_has_no_rounding_drift() {
        let transactions = vec![
            sale(1, "0.10", at(0, 1)),
            sale(1, "0.20", at(0, 2)),
            sale(1, "0.30", at(0, 3)),
        ];

        assert_eq!(sum_amounts(&transactions), dec("0.60"));
    }

    #[test]
    fn period_sum_only_counts_inside_transactions() {
        let transactions = vec![
            sale(1, "100.00", at(0, 9)),
            sale(1, "50.25", at(2, 9)),
            sale(1, "10.00", at(5, 9)),
        ];
        let period = Period::new(at(1, 0), at(5, 9)).unwrap();

        assert_eq!(sum_amounts_in_period(&transactions, &period), dec("60.25"));
    }

    #[test]
    fn period_sum_without_matches_is_zero() {
        let transactions = vec![sale(1, "100.00", at(0, 9))];
        let period = Period::new(at(3, 0), at(4, 0)).unwrap();

        assert_eq!(sum_amounts_in_period(&transactions, &period), Decimal::ZERO);
    }

    #[test]
    fn ranks_sellers_by_total_descending() {
        let ranking = rank_seller_totals(vec![
            (2, dec("150.00")),
            (1, dec("300.00")),
            (2, dec("50.00")),
        ]);

        assert_eq!(
            ranking,
            vec![
                SellerTotal {
                    seller_id: 1,
                    total_amount: dec("300.00"),
                },
                SellerTotal {
                    seller_id: 2,
                    total_amount: dec("200.00"),
                },
            ]
        );
        assert_eq!(most_productive(&ranking).map(|top| top.seller_id), Some(1));
    }

    #[test]
    fn ties_are_ordered_by_seller_id() {
        let ranking = rank_seller_totals(vec![
            (9, dec("10.00")),
            (4, dec("10.0")),
            (7, dec("25.00")),
        ]);

        let ids: Vec<i64> = ranking.iter().map(|total| total.seller_id).collect();
        assert_eq!(ids, vec![7, 4, 9]);
    }

    #[test]
    fn empty_ranking_has_no_top_seller() {
        let ranking = rank_seller_totals(Vec::new());

        assert!(ranking.is_empty());
        assert_eq!(most_productive(&ranking), None);
    }
}
