use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SellerModel {
    pub id: i64,
    pub name: String,
    pub contact_info: Option<String>,
    pub registration_date: NaiveDateTime,
}
