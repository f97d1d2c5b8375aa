#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Local, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use shared::{
    abstract_trait::{
        seller::repository::{
            command::SellerCommandRepositoryTrait, query::SellerQueryRepositoryTrait,
        },
        transaction::repository::{
            command::TransactionCommandRepositoryTrait, query::TransactionQueryRepositoryTrait,
            stats::TransactionStatsRepositoryTrait,
        },
    },
    analytics::{Period, sum_amounts, sum_amounts_in_period},
    domain::requests::{
        CreateSellerRequest, CreateTransactionRequest, UpdateSellerRequest,
        UpdateTransactionRequest,
    },
    errors::RepositoryError,
    model::{
        seller::SellerModel,
        transaction::{PaymentType, SellerAmountModel, TransactionModel},
    },
};
use std::sync::{Arc, Mutex};

pub fn day(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub fn dec(value: &str) -> Decimal {
    value.parse().unwrap()
}

#[derive(Default)]
struct Tables {
    sellers: Vec<SellerModel>,
    transactions: Vec<TransactionModel>,
}

/// Shared in-memory tables standing in for Postgres in service tests.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seller(&self, id: i64, name: &str) -> &Self {
        self.tables.lock().unwrap().sellers.push(SellerModel {
            id,
            name: name.to_string(),
            contact_info: None,
            registration_date: day(2024, 1, 1),
        });
        self
    }

    pub fn sale(&self, seller_id: i64, amount: &str, when: NaiveDateTime) -> &Self {
        let mut tables = self.tables.lock().unwrap();
        let id = tables.transactions.len() as i64 + 1;
        let seller_name = tables
            .sellers
            .iter()
            .find(|seller| seller.id == seller_id)
            .map(|seller| seller.name.clone())
            .unwrap_or_default();

        tables.transactions.push(TransactionModel {
            id,
            seller_id,
            seller_name,
            amount: dec(amount),
            payment_type: PaymentType::Cash,
            transaction_date: when,
        });
        drop(tables);
        self
    }

    pub fn transaction_count(&self) -> usize {
        self.tables.lock().unwrap().transactions.len()
    }
}

#[async_trait]
impl SellerQueryRepositoryTrait for MemoryStore {
    async fn find_all(&self) -> Result<Vec<SellerModel>, RepositoryError> {
        Ok(self.tables.lock().unwrap().sellers.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<SellerModel>, RepositoryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.sellers.iter().find(|seller| seller.id == id).cloned())
    }

    async fn exists(&self, id: i64) -> Result<bool, RepositoryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.sellers.iter().any(|seller| seller.id == id))
    }

    async fn find_with_total_less_than(
        &self,
        limit: Decimal,
        period: Option<&Period>,
    ) -> Result<Vec<SellerModel>, RepositoryError> {
        let tables = self.tables.lock().unwrap();
        let mut below: Vec<SellerModel> = tables
            .sellers
            .iter()
            .filter(|seller| {
                let sales: Vec<TransactionModel> = tables
                    .transactions
                    .iter()
                    .filter(|tx| tx.seller_id == seller.id)
                    .cloned()
                    .collect();
                let total = match period {
                    Some(period) => sum_amounts_in_period(&sales, period),
                    None => sum_amounts(&sales),
                };
                total < limit
            })
            .cloned()
            .collect();
        below.sort_by_key(|seller| seller.id);
        Ok(below)
    }
}

#[async_trait]
impl SellerCommandRepositoryTrait for MemoryStore {
    async fn create(&self, req: &CreateSellerRequest) -> Result<SellerModel, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        let id = tables.sellers.iter().map(|seller| seller.id).max().unwrap_or(0) + 1;
        let seller = SellerModel {
            id,
            name: req.name.trim().to_string(),
            contact_info: req.contact_info.clone(),
            registration_date: Local::now().naive_local(),
        };
        tables.sellers.push(seller.clone());
        Ok(seller)
    }

    async fn update(
        &self,
        id: i64,
        req: &UpdateSellerRequest,
    ) -> Result<SellerModel, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        let seller = tables
            .sellers
            .iter_mut()
            .find(|seller| seller.id == id)
            .ok_or(RepositoryError::NotFound)?;
        seller.name = req.name.trim().to_string();
        seller.contact_info = req.contact_info.clone();
        Ok(seller.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.transactions.iter().any(|tx| tx.seller_id == id) {
            return Err(RepositoryError::ForeignKey(
                "seller still has transactions".to_string(),
            ));
        }
        let before = tables.sellers.len();
        tables.sellers.retain(|seller| seller.id != id);
        if tables.sellers.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl TransactionQueryRepositoryTrait for MemoryStore {
    async fn find_all(&self) -> Result<Vec<TransactionModel>, RepositoryError> {
        Ok(self.tables.lock().unwrap().transactions.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TransactionModel>, RepositoryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.transactions.iter().find(|tx| tx.id == id).cloned())
    }

    async fn find_by_seller(
        &self,
        seller_id: i64,
    ) -> Result<Vec<TransactionModel>, RepositoryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .transactions
            .iter()
            .filter(|tx| tx.seller_id == seller_id)
            .cloned()
            .collect())
    }

    async fn find_by_seller_in_period(
        &self,
        seller_id: i64,
        period: &Period,
    ) -> Result<Vec<TransactionModel>, RepositoryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .transactions
            .iter()
            .filter(|tx| tx.seller_id == seller_id && period.contains(tx.transaction_date))
            .cloned()
            .collect())
    }

    async fn find_amounts_in_period(
        &self,
        period: &Period,
    ) -> Result<Vec<SellerAmountModel>, RepositoryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .transactions
            .iter()
            .filter(|tx| period.contains(tx.transaction_date))
            .map(|tx| SellerAmountModel {
                seller_id: tx.seller_id,
                amount: tx.amount,
            })
            .collect())
    }
}

#[async_trait]
impl TransactionStatsRepositoryTrait for MemoryStore {
    async fn total_amount_by_seller(&self, seller_id: i64) -> Result<Decimal, RepositoryError> {
        let sales = self.find_by_seller(seller_id).await?;
        Ok(sum_amounts(&sales))
    }

    async fn total_amount_by_seller_in_period(
        &self,
        seller_id: i64,
        period: &Period,
    ) -> Result<Decimal, RepositoryError> {
        let sales = self.find_by_seller(seller_id).await?;
        Ok(sum_amounts_in_period(&sales, period))
    }
}

#[async_trait]
impl TransactionCommandRepositoryTrait for MemoryStore {
    async fn create(
        &self,
        req: &CreateTransactionRequest,
    ) -> Result<TransactionModel, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        let seller_name = tables
            .sellers
            .iter()
            .find(|seller| seller.id == req.seller_id)
            .map(|seller| seller.name.clone())
            .ok_or_else(|| RepositoryError::ForeignKey("unknown seller".to_string()))?;
        let transaction = TransactionModel {
            id: tables.transactions.len() as i64 + 1,
            seller_id: req.seller_id,
            seller_name,
            amount: req.amount,
            payment_type: req.payment_type,
            transaction_date: req
                .transaction_date
                .unwrap_or_else(|| Local::now().naive_local()),
        };
        tables.transactions.push(transaction.clone());
        Ok(transaction)
    }

    async fn update(
        &self,
        id: i64,
        req: &UpdateTransactionRequest,
    ) -> Result<TransactionModel, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        let seller_name = tables
            .sellers
            .iter()
            .find(|seller| seller.id == req.seller_id)
            .map(|seller| seller.name.clone())
            .ok_or_else(|| RepositoryError::ForeignKey("unknown seller".to_string()))?;
        let transaction = tables
            .transactions
            .iter_mut()
            .find(|tx| tx.id == id)
            .ok_or(RepositoryError::NotFound)?;
        transaction.seller_id = req.seller_id;
        transaction.seller_name = seller_name;
        transaction.amount = req.amount;
        transaction.payment_type = req.payment_type;
        Ok(transaction.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.transactions.len();
        tables.transactions.retain(|tx| tx.id != id);
        if tables.transactions.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
