//! Delete Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use shopcart_app::domain::carts::models::CartId;

use crate::{carts::errors::into_api_error, errors::ApiError, extensions::*, state::State};

/// Delete Cart Handler
///
/// Succeeds whether or not the cart exists.
#[endpoint(
    tags("carts"),
    summary = "Delete Cart",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Cart deleted"),
    ),
)]
#[tracing::instrument(
    name = "carts.delete",
    skip(cart, depot),
    fields(cart_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let cart = CartId::from_i64(cart.into_inner());

    tracing::Span::current().record("cart_id", tracing::field::display(cart));

    state
        .app
        .carts
        .delete_cart(cart)
        .await
        .map_err(into_api_error)?;

    Ok(StatusCode::NO_CONTENT)
}
