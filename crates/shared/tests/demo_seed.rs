mod common;

use chrono::Local;
use common::{MemoryStore, day, dec};
use shared::{
    abstract_trait::{
        seller::{
            repository::{command::DynSellerCommandRepository, query::DynSellerQueryRepository},
            service::{command::DynSellerCommandService, query::DynSellerQueryService},
        },
        transaction::{
            repository::{
                command::DynTransactionCommandRepository, query::DynTransactionQueryRepository,
                stats::DynTransactionStatsRepository,
            },
            service::{command::DynTransactionCommandService, stats::TransactionStatsServiceTrait},
        },
    },
    domain::requests::PeriodQuery,
    service::{
        seed::DemoSeeder,
        seller::{SellerCommandService, SellerQueryService},
        transaction::{TransactionCommandService, TransactionStatsService},
    },
};
use std::sync::Arc;

fn seeder(store: &MemoryStore) -> DemoSeeder {
    let seller_repo: DynSellerQueryRepository = Arc::new(store.clone());
    let seller_writes: DynSellerCommandRepository = Arc::new(store.clone());
    let sale_writes: DynTransactionCommandRepository = Arc::new(store.clone());

    let seller_query: DynSellerQueryService =
        Arc::new(SellerQueryService::new(seller_repo.clone()));
    let seller_command: DynSellerCommandService =
        Arc::new(SellerCommandService::new(seller_writes));
    let transaction_command: DynTransactionCommandService =
        Arc::new(TransactionCommandService::new(sale_writes, seller_repo));

    DemoSeeder::new(seller_query, seller_command, transaction_command)
}

#[tokio::test]
async fn empty_store_gets_demo_sellers_and_sales() {
    let store = MemoryStore::new();

    let written = seeder(&store)
        .run(Local::now().naive_local())
        .await
        .unwrap();

    assert_eq!(written, 8);
    assert_eq!(store.transaction_count(), 8);

    let transactions: DynTransactionQueryRepository = Arc::new(store.clone());
    let sums: DynTransactionStatsRepository = Arc::new(store.clone());
    let sellers: DynSellerQueryRepository = Arc::new(store.clone());
    let total = TransactionStatsService::new(transactions, sums, sellers)
        .total_amount(1, &PeriodQuery::default())
        .await
        .unwrap();

    assert_eq!(total.data.total_amount, dec("1152.00"));
}

#[tokio::test]
async fn seeding_twice_writes_nothing_the_second_time() {
    let store = MemoryStore::new();
    let seeder = seeder(&store);

    seeder.run(Local::now().naive_local()).await.unwrap();
    let again = seeder.run(Local::now().naive_local()).await.unwrap();

    assert_eq!(again, 0);
    assert_eq!(store.transaction_count(), 8);
}

#[tokio::test]
async fn existing_sellers_are_left_alone() {
    let store = MemoryStore::new();
    store.seller(1, "Anna").sale(1, "10.00", day(2024, 3, 1));

    let written = seeder(&store)
        .run(Local::now().naive_local())
        .await
        .unwrap();

    assert_eq!(written, 0);
    assert_eq!(store.transaction_count(), 1);
}
