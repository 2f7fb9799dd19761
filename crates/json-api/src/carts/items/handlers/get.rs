//! Get Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use shopcart_app::domain::carts::models::{CartId, Sku};

use crate::{
    carts::{errors::into_api_error, models::LineItemResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Get Cart Item Handler
#[endpoint(tags("carts"), summary = "Get Cart Item")]
pub(crate) async fn handler(
    cart: PathParam<i64>,
    sku: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<LineItemResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let item = state
        .app
        .carts
        .get_item(
            CartId::from_i64(cart.into_inner()),
            Sku::from_i64(sku.into_inner()),
        )
        .await
        .map_err(into_api_error)?;

    Ok(Json(item.into()))
}
