use crate::{
    abstract_trait::{
        seller::service::{command::DynSellerCommandService, query::DynSellerQueryService},
        transaction::service::command::DynTransactionCommandService,
    },
    domain::requests::{CreateSellerRequest, CreateTransactionRequest},
    errors::ServiceError,
    model::transaction::PaymentType,
};
use chrono::{NaiveDateTime, TimeDelta};
use rust_decimal::Decimal;
use tracing::{error, info};

const DEMO_SELLERS: [(&str, &str); 3] = [
    ("Ivan Ivanov", "ivan@example.com"),
    ("Maria Petrova", "maria@example.com"),
    ("Petr Sidorov", "petr@example.com"),
];

/// (seller index, amount in cents, payment type, hours before now)
const DEMO_SALES: [(usize, i64, PaymentType, i64); 8] = [
    (0, 15000, PaymentType::Card, 10 * 24),
    (0, 25050, PaymentType::Cash, 5 * 24),
    (0, 25050, PaymentType::Cash, 30 * 24),
    (0, 25050, PaymentType::Cash, 31 * 24),
    (0, 25050, PaymentType::Cash, 32 * 24),
    (1, 7525, PaymentType::Card, 3 * 24),
    (1, 30000, PaymentType::Card, 24),
    (2, 4550, PaymentType::Cash, 2),
];

/// Fills an empty database with a few sellers and sales for local runs.
pub struct DemoSeeder {
    seller_query: DynSellerQueryService,
    seller_command: DynSellerCommandService,
    transaction_command: DynTransactionCommandService,
}

impl DemoSeeder {
    pub fn new(
        seller_query: DynSellerQueryService,
        seller_command: DynSellerCommandService,
        transaction_command: DynTransactionCommandService,
    ) -> Self {
        Self {
            seller_query,
            seller_command,
            transaction_command,
        }
    }

    /// Seeds relative to `now` and returns how many sales were written.
    /// Does nothing when any seller already exists.
    pub async fn run(&self, now: NaiveDateTime) -> Result<usize, ServiceError> {
        let existing = self
            .seller_query
            .find_all()
            .await
            .inspect_err(|e| error!("❌ Failed to check existing sellers: {e:?}"))?
            .data;

        if !existing.is_empty() {
            info!("🌱 {} sellers present, skipping demo data", existing.len());
            return Ok(0);
        }

        let mut seller_ids = Vec::with_capacity(DEMO_SELLERS.len());
        for (name, contact) in DEMO_SELLERS {
            let req = CreateSellerRequest {
                name: name.to_string(),
                contact_info: Some(contact.to_string()),
            };
            let created = self.seller_command.create(&req).await?;
            seller_ids.push(created.data.id);
        }

        for (index, cents, payment_type, hours_ago) in DEMO_SALES {
            let req = CreateTransactionRequest {
                seller_id: seller_ids[index],
                amount: Decimal::new(cents, 2),
                payment_type,
                transaction_date: Some(now - TimeDelta::hours(hours_ago)),
            };
            self.transaction_command.create(&req).await?;
        }

        info!(
            "🌱 Seeded {} sellers and {} sales",
            seller_ids.len(),
            DEMO_SALES.len()
        );

        Ok(DEMO_SALES.len())
    }
}
