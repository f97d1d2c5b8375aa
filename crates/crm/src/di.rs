use shared::{
    abstract_trait::{
        seller::{
            repository::{command::DynSellerCommandRepository, query::DynSellerQueryRepository},
            service::{
                analytics::DynSellerAnalyticsService, command::DynSellerCommandService,
                query::DynSellerQueryService,
            },
        },
        transaction::{
            repository::{
                command::DynTransactionCommandRepository, query::DynTransactionQueryRepository,
                stats::DynTransactionStatsRepository,
            },
            service::{
                command::DynTransactionCommandService, query::DynTransactionQueryService,
                stats::DynTransactionStatsService,
            },
        },
    },
    config::ConnectionPool,
    repository::{
        seller::{command::SellerCommandRepository, query::SellerQueryRepository},
        transaction::{
            command::TransactionCommandRepository, query::TransactionQueryRepository,
            stats::TransactionStatsRepository,
        },
    },
    service::{
        seller::{SellerAnalyticsService, SellerCommandService, SellerQueryService},
        transaction::{TransactionCommandService, TransactionQueryService, TransactionStatsService},
    },
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct SellerDeps {
    pub query: DynSellerQueryService,
    pub command: DynSellerCommandService,
    pub analytics: DynSellerAnalyticsService,
}

impl SellerDeps {
    pub fn new(
        seller_query: DynSellerQueryRepository,
        transaction_query: DynTransactionQueryRepository,
        db: ConnectionPool,
    ) -> Self {
        let command_repo =
            Arc::new(SellerCommandRepository::new(db)) as DynSellerCommandRepository;

        let query =
            Arc::new(SellerQueryService::new(seller_query.clone())) as DynSellerQueryService;
        let command = Arc::new(SellerCommandService::new(command_repo)) as DynSellerCommandService;
        let analytics = Arc::new(SellerAnalyticsService::new(seller_query, transaction_query))
            as DynSellerAnalyticsService;

        Self {
            query,
            command,
            analytics,
        }
    }
}

#[derive(Clone)]
pub struct TransactionDeps {
    pub query: DynTransactionQueryService,
    pub command: DynTransactionCommandService,
    pub stats: DynTransactionStatsService,
}

impl TransactionDeps {
    pub fn new(
        seller_query: DynSellerQueryRepository,
        transaction_query: DynTransactionQueryRepository,
        db: ConnectionPool,
    ) -> Self {
        let command_repo = Arc::new(TransactionCommandRepository::new(db.clone()))
            as DynTransactionCommandRepository;
        let stats_repo =
            Arc::new(TransactionStatsRepository::new(db)) as DynTransactionStatsRepository;

        let query = Arc::new(TransactionQueryService::new(
            transaction_query.clone(),
            seller_query.clone(),
        )) as DynTransactionQueryService;
        let command = Arc::new(TransactionCommandService::new(
            command_repo,
            seller_query.clone(),
        )) as DynTransactionCommandService;
        let stats = Arc::new(TransactionStatsService::new(
            transaction_query,
            stats_repo,
            seller_query,
        )) as DynTransactionStatsService;

        Self {
            query,
            command,
            stats,
        }
    }
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub seller: SellerDeps,
    pub transaction: TransactionDeps,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("seller", &"SellerDeps")
            .field("transaction", &"TransactionDeps")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(db: ConnectionPool) -> Self {
        let seller_query =
            Arc::new(SellerQueryRepository::new(db.clone())) as DynSellerQueryRepository;
        let transaction_query =
            Arc::new(TransactionQueryRepository::new(db.clone())) as DynTransactionQueryRepository;

        Self {
            seller: SellerDeps::new(seller_query.clone(), transaction_query.clone(), db.clone()),
            transaction: TransactionDeps::new(seller_query, transaction_query, db),
        }
    }
}
