use quickcheck_macros::quickcheck;
use rust_decimal::Decimal;
use shared::analytics::rank_seller_totals;
use std::collections::{BTreeMap, BTreeSet};

/// Five sellers and cent amounts, so ties and repeated sellers are common.
fn amounts(entries: &[(u8, u32)]) -> Vec<(i64, Decimal)> {
    entries
        .iter()
        .map(|&(seller, cents)| (i64::from(seller % 5) + 1, Decimal::new(i64::from(cents), 2)))
        .collect()
}

#[quickcheck]
fn ranking_never_increases(entries: Vec<(u8, u32)>) -> bool {
    let ranking = rank_seller_totals(amounts(&entries));

    ranking.windows(2).all(|pair| {
        pair[0].total_amount > pair[1].total_amount
            || (pair[0].total_amount == pair[1].total_amount
                && pair[0].seller_id < pair[1].seller_id)
    })
}

#[quickcheck]
fn every_seller_is_ranked_once(entries: Vec<(u8, u32)>) -> bool {
    let rows = amounts(&entries);
    let expected: BTreeSet<i64> = rows.iter().map(|(seller_id, _)| *seller_id).collect();

    let ranking = rank_seller_totals(rows);
    let ranked: BTreeSet<i64> = ranking.iter().map(|total| total.seller_id).collect();

    ranked.len() == ranking.len() && ranked == expected
}

#[quickcheck]
fn totals_are_exact_sums(entries: Vec<(u8, u32)>) -> bool {
    let rows = amounts(&entries);
    let mut expected: BTreeMap<i64, Decimal> = BTreeMap::new();
    for (seller_id, amount) in &rows {
        *expected.entry(*seller_id).or_default() += *amount;
    }

    rank_seller_totals(rows)
        .iter()
        .all(|total| expected.get(&total.seller_id) == Some(&total.total_amount))
}
