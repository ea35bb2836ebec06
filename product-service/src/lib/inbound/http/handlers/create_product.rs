use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::ProductData;
use crate::domain::product::models::CreateProductCommand;
use crate::domain::product::models::ProductName;
use crate::domain::product::ports::ProductServicePort;
use crate::inbound::http::router::AppState;
use crate::product::errors::ProductNameError;

pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<CreateProductRequest>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    state
        .product_service
        .create_product(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref product| ApiSuccess::new(StatusCode::CREATED, product.into()))
}

/// HTTP request body for creating a product (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateProductRequest {
    name: String,
    #[serde(default)]
    description: Option<String>,
    price: f64,
    #[serde(default)]
    is_available: bool,
    #[serde(default)]
    added_on: Option<NaiveDate>,
}

impl CreateProductRequest {
    fn try_into_command(self) -> Result<CreateProductCommand, ProductNameError> {
        let name = ProductName::new(self.name)?;
        Ok(CreateProductCommand {
            name,
            description: self.description,
            price: self.price,
            is_available: self.is_available,
            added_on: self.added_on,
        })
    }
}

impl From<ProductNameError> for ApiError {
    fn from(err: ProductNameError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
