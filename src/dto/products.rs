use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Payload for both create and full replacement.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, Validate)]
pub struct ProductRequest {
    #[validate(length(min = 3, max = 100, message = "must be between 3 and 100 characters"))]
    #[schema(min_length = 3, max_length = 100, example = "Split end repair")]
    pub name: String,

    #[validate(length(min = 10, max = 250, message = "must be between 10 and 250 characters"))]
    #[schema(min_length = 10, max_length = 250, example = "Leaves your curls with repaired ends")]
    pub description: String,

    #[validate(custom(function = "positive_price"))]
    #[schema(value_type = f64, example = 10.5)]
    pub price: Decimal,

    pub available: bool,

    #[validate(length(min = 3, max = 100, message = "must be between 3 and 100 characters"))]
    #[schema(min_length = 3, max_length = 100, example = "Supplier X")]
    pub supplier: String,
}

fn positive_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price > Decimal::ZERO {
        return Ok(());
    }
    Err(ValidationError::new("greater_than").with_message("must be greater than 0".into()))
}
