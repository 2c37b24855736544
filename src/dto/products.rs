use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{error::AppError, models::NewProduct, response::FieldErrors};

/// Create/replace body. Members are optional on the wire so that every missing
/// member is reported by [`ProductPayload::validate`] instead of failing the parse.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ProductPayload {
    /// Ignored; ids are assigned by the store.
    pub id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<f64>, example = 1.5)]
    pub price: Option<Decimal>,
}

impl ProductPayload {
    pub fn validate(self) -> Result<NewProduct, AppError> {
        let mut errors = FieldErrors::new();

        let name = required_text(&mut errors, "name", self.name);
        let description = required_text(&mut errors, "description", self.description);
        let price = match self.price {
            None => {
                push(&mut errors, "price", "The price field is required.");
                None
            }
            Some(price) => match check_price(price) {
                Ok(price) => Some(price),
                Err(message) => {
                    push(&mut errors, "price", message);
                    None
                }
            },
        };

        match (name, description, price) {
            (Some(name), Some(description), Some(price)) if errors.is_empty() => Ok(NewProduct {
                name,
                description,
                price,
            }),
            _ => Err(AppError::Validation(errors)),
        }
    }
}

/// Digits kept after the decimal point by the `price` column.
pub const PRICE_SCALE: u32 = 2;

/// Rejects negative prices and prices the store would have to round.
pub fn check_price(price: Decimal) -> Result<Decimal, &'static str> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err("The price field must not be negative.");
    }
    if price.normalize().scale() > PRICE_SCALE {
        return Err("The price field must have at most 2 decimal places.");
    }
    Ok(price)
}

fn required_text(errors: &mut FieldErrors, field: &str, value: Option<String>) -> Option<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Some(text),
        _ => {
            push(errors, field, format!("The {field} field is required."));
            None
        }
    }
}

fn push(errors: &mut FieldErrors, field: &str, message: impl Into<String>) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.into());
}
