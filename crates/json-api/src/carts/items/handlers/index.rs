//! Cart Item Index Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{PathParam, QueryParam},
    prelude::*,
};

use shopcart_app::domain::carts::models::CartId;

use crate::{
    carts::{errors::into_api_error, models::ItemsResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Cart Item Index Handler
///
/// Returns the items of a cart. With `name`, returns the first item whose
/// name matches case-insensitively; the value may be wrapped in double
/// quotes.
#[endpoint(tags("carts"), summary = "List Cart Items")]
pub(crate) async fn handler(
    cart: PathParam<i64>,
    name: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ItemsResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let listing = state
        .app
        .carts
        .list_items(CartId::from_i64(cart.into_inner()), name.into_inner())
        .await
        .map_err(into_api_error)?;

    Ok(Json(listing.into()))
}
