use crate::domain::requests::not_blank;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Validate, ToSchema, Clone)]
pub struct CreateSellerRequest {
    #[validate(
        length(min = 1, max = 100, message = "seller name must be 1 to 100 characters"),
        custom(function = "not_blank", message = "seller name is mandatory")
    )]
    pub name: String,

    #[validate(length(max = 255, message = "contact info must be less than 255 characters"))]
    #[serde(default)]
    pub contact_info: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Validate, ToSchema, Clone)]
pub struct UpdateSellerRequest {
    #[validate(
        length(min = 1, max = 100, message = "seller name must be 1 to 100 characters"),
        custom(function = "not_blank", message = "seller name is mandatory")
    )]
    pub name: String,

    #[validate(length(max = 255, message = "contact info must be less than 255 characters"))]
    #[serde(default)]
    pub contact_info: Option<String>,
}
