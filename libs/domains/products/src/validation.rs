//! Product validation.
//!
//! Field rules live on [`ProductInput`] as `validator` attributes. This module
//! flattens the resulting [`validator::ValidationErrors`] into the ordered
//! message list returned to clients and turns a valid input into a
//! [`NewProduct`].

use validator::{Validate, ValidationError};

use crate::error::{ProductError, ProductResult};
use crate::models::{NewProduct, ProductInput};

pub const NAME_REQUIRED: &str = "Product name is required and must be a non-empty string";
pub const PRICE_POSITIVE: &str = "Price must be a positive number";
pub const DESCRIPTION_REQUIRED: &str =
    "Product description is required and must be a non-empty string";

/// Order in which field messages are reported
const FIELD_ORDER: [(&str, &str); 3] = [
    ("name", NAME_REQUIRED),
    ("price", PRICE_POSITIVE),
    ("description", DESCRIPTION_REQUIRED),
];

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Every rule is checked; one message per failing field, in field order.
///
/// An empty list means the input is valid.
pub fn validate_product(input: &ProductInput) -> Vec<String> {
    let Err(errors) = input.validate() else {
        return Vec::new();
    };

    let fields = errors.field_errors();
    FIELD_ORDER
        .iter()
        .filter(|(field, _)| fields.contains_key(*field))
        .map(|(_, message)| (*message).to_string())
        .collect()
}

/// Validates and trims an input into a store candidate
pub fn to_new_product(input: ProductInput) -> ProductResult<NewProduct> {
    let errors = validate_product(&input);
    if !errors.is_empty() {
        return Err(ProductError::Validation(errors));
    }

    match input {
        ProductInput {
            name: Some(name),
            price: Some(price),
            description: Some(description),
        } => Ok(NewProduct::new(name.trim(), price, description.trim())),
        // Unreachable once validation passed
        _ => Err(ProductError::Internal(
            "validated product input is missing a field".to_string(),
        )),
    }
}
