//! Delete Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use shopcart_app::domain::carts::models::{CartId, Sku};

use crate::{carts::errors::into_api_error, errors::ApiError, extensions::*, state::State};

/// Delete Cart Item Handler
///
/// Removes the first item with the SKU. Missing carts and items are not
/// errors.
#[endpoint(
    tags("carts"),
    summary = "Remove Cart Item",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Item removed"),
    ),
)]
#[tracing::instrument(
    name = "carts.items.delete",
    skip(cart, sku, depot),
    fields(cart_id = tracing::field::Empty, sku = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<i64>,
    sku: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let cart = CartId::from_i64(cart.into_inner());
    let sku = Sku::from_i64(sku.into_inner());

    let span = tracing::Span::current();

    span.record("cart_id", tracing::field::display(cart));
    span.record("sku", tracing::field::display(sku));

    state
        .app
        .carts
        .remove_item(cart, sku)
        .await
        .map_err(into_api_error)?;

    Ok(StatusCode::NO_CONTENT)
}
