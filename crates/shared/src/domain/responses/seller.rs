use crate::model::seller::SellerModel;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SellerResponse {
    pub id: i64,
    pub name: String,
    pub contact_info: Option<String>,
    pub registration_date: NaiveDateTime,
}

impl From<SellerModel> for SellerResponse {
    fn from(model: SellerModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            contact_info: model.contact_info,
            registration_date: model.registration_date,
        }
    }
}
