//! Carts service errors.

use thiserror::Error;

use crate::{
    domain::carts::{
        data::ValidationError,
        models::{CartId, OwnerId, Sku},
    },
    store::StoreError,
};

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("Shopping Cart with id: {0} was not found")]
    CartNotFound(CartId),

    #[error("Shopping Cart under user id: {0} was not found")]
    OwnerNotFound(OwnerId),

    #[error("Product with sku: {sku} was not found in shopping cart {cart}")]
    ItemNotFound { cart: CartId, sku: Sku },

    #[error("Product with name: {0} was not found")]
    ProductNameNotFound(String),

    #[error("Shopping Cart for uid {0} already exists")]
    AlreadyExists(OwnerId),

    #[error("Data is not valid: user id {0:?} is not an integer")]
    InvalidOwner(String),

    #[error("Data is not valid: {0}")]
    Validation(#[from] ValidationError),

    #[error("storage error")]
    Store(#[from] StoreError),
}
