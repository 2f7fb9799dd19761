//! Cart Data

use thiserror::Error;

use crate::domain::carts::models::{LineItem, OwnerId, Sku};

/// New Cart Data
///
/// Every field is optional so that missing data is reported by
/// [`CartDraft::validate`] rather than by the decoder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartDraft {
    pub owner_id: Option<OwnerId>,
    pub subtotal: Option<f64>,
    pub products: Option<Vec<ProductDraft>>,
}

/// Line Item Data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub sku: Option<Sku>,
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub unit_price: Option<f64>,
}

/// Validated cart creation data.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCart {
    pub owner_id: OwnerId,
    pub subtotal: f64,
    pub items: Vec<LineItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("user id is required")]
    MissingOwner,

    #[error("a products list is required")]
    MissingProducts,

    #[error("product {index} is missing {field}")]
    MissingField { index: usize, field: &'static str },

    #[error("exactly one product is expected, found {found}")]
    ExpectedSingleProduct { found: usize },

    #[error("{0}")]
    Malformed(String),
}

impl CartDraft {
    /// Check the owner and, when present, the product list.
    ///
    /// # Errors
    ///
    /// Returns the first problem found in the draft.
    pub fn validate(self) -> Result<NewCart, ValidationError> {
        let owner_id = self.owner_id.ok_or(ValidationError::MissingOwner)?;

        let items = match self.products {
            Some(products) => validate_products(products)?,
            None => Vec::new(),
        };

        Ok(NewCart {
            owner_id,
            subtotal: self.subtotal.unwrap_or_default(),
            items,
        })
    }
}

impl ProductDraft {
    fn validate(self, index: usize) -> Result<LineItem, ValidationError> {
        let missing = |field| ValidationError::MissingField { index, field };

        Ok(LineItem {
            sku: self.sku.ok_or_else(|| missing("sku"))?,
            name: self.name.ok_or_else(|| missing("name"))?,
            quantity: self.quantity.ok_or_else(|| missing("quantity"))?,
            unit_price: self.unit_price.ok_or_else(|| missing("unitprice"))?,
        })
    }
}

/// Validate a batch of products. Either every product is complete or the
/// whole batch is rejected.
///
/// # Errors
///
/// Returns [`ValidationError::MissingField`] for the first incomplete product.
pub fn validate_products(products: Vec<ProductDraft>) -> Result<Vec<LineItem>, ValidationError> {
    products
        .into_iter()
        .enumerate()
        .map(|(index, product)| product.validate(index))
        .collect()
}

/// Validate a payload that must contain exactly one product.
///
/// # Errors
///
/// Returns [`ValidationError::MissingProducts`] when no list was given,
/// [`ValidationError::ExpectedSingleProduct`] for any other length, or the
/// first missing field.
pub fn validate_single_product(
    products: Option<Vec<ProductDraft>>,
) -> Result<LineItem, ValidationError> {
    let products = products.ok_or(ValidationError::MissingProducts)?;

    if products.len() != 1 {
        return Err(ValidationError::ExpectedSingleProduct {
            found: products.len(),
        });
    }

    let mut items = validate_products(products)?;

    items.pop().ok_or(ValidationError::ExpectedSingleProduct { found: 0 })
}
