//! Cart Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    carts::{errors::into_api_error, models::CartsResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Cart Index Handler
///
/// Returns every cart, or only the cart owned by `uid` when given.
#[endpoint(tags("carts"), summary = "List Carts")]
pub(crate) async fn handler(
    uid: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<CartsResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let listing = state
        .app
        .carts
        .list_carts(uid.into_inner())
        .await
        .map_err(into_api_error)?;

    Ok(Json(listing.into()))
}
