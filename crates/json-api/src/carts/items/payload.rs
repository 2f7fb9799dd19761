//! Products payload decoding

use salvo::prelude::Request;

use shopcart_app::domain::carts::{CartsService, models::CartId};

use crate::{
    carts::{
        errors::{into_api_error, invalid_payload},
        models::ProductsRequest,
    },
    errors::ApiError,
    extensions::*,
};

/// Decode a products body for `cart`. A missing cart is reported ahead of a
/// malformed body, matching the order the service applies to field errors.
pub(crate) async fn products_request(
    req: &mut Request,
    carts: &dyn CartsService,
    cart: CartId,
) -> Result<ProductsRequest, ApiError> {
    match req.json_or_malformed::<ProductsRequest>().await {
        Ok(request) => Ok(request),
        Err(malformed) => {
            carts.get_cart(cart).await.map_err(into_api_error)?;

            Err(invalid_payload(malformed))
        }
    }
}
