//! Cart Subtotal Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use shopcart_app::domain::carts::models::CartId;

use crate::{
    carts::{errors::into_api_error, models::CartResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Cart Subtotal Handler
///
/// Recalculates the subtotal from the cart's items and stores it.
#[endpoint(tags("carts"), summary = "Recalculate Cart Subtotal")]
#[tracing::instrument(name = "carts.subtotal", skip(cart, depot), err)]
pub(crate) async fn handler(
    cart: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cart = state
        .app
        .carts
        .recompute_subtotal(CartId::from_i64(cart.into_inner()))
        .await
        .map_err(into_api_error)?;

    Ok(Json(cart.into()))
}
