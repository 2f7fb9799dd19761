//! Update Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use shopcart_app::domain::carts::models::{CartId, Sku};

use crate::{
    carts::{
        errors::into_api_error,
        items::payload,
        models::CartResponse,
    },
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Update Cart Item Handler
///
/// Replaces the first item with the path SKU by the single product in the
/// body. The product's own SKU may differ, renaming the item.
#[endpoint(tags("carts"), summary = "Replace Cart Item")]
#[tracing::instrument(
    name = "carts.items.update",
    skip(cart, sku, req, depot),
    fields(cart_id = tracing::field::Empty, sku = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<i64>,
    sku: PathParam<i64>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let cart = CartId::from_i64(cart.into_inner());
    let sku = Sku::from_i64(sku.into_inner());

    let span = tracing::Span::current();

    span.record("cart_id", tracing::field::display(cart));
    span.record("sku", tracing::field::display(sku));

    let request = payload::products_request(req, state.app.carts.as_ref(), cart).await?;

    let updated = state
        .app
        .carts
        .replace_item(cart, sku, request.into_drafts())
        .await
        .map_err(into_api_error)?;

    Ok(Json(updated.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use shopcart_app::domain::carts::{
        CartsServiceError, MockCartsService, data::ValidationError,
    };

    use crate::test_helpers::{carts_service, make_cart, make_item};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("carts/{cart}/items/{sku}").put(handler))
    }

    #[tokio::test]
    async fn replaces_item() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_replace_item()
            .once()
            .withf(|cart, sku, products| {
                *cart == CartId::from_i64(1)
                    && *sku == Sku::from_i64(10)
                    && products.as_ref().is_some_and(|p| p.len() == 1)
            })
            .return_once(|_, _, _| Ok(make_cart(1, 1, vec![make_item(11, "Risk 2", 3, 2.0)])));

        let mut res = TestClient::put("http://example.com/carts/1/items/10")
            .json(&json!({
                "products": [{ "sku": 11, "name": "Risk 2", "quantity": 3, "unitprice": 2.0 }]
            }))
            .send(&make_service(carts))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.products[0].sku, 11);

        Ok(())
    }

    #[tokio::test]
    async fn more_than_one_product_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_replace_item().once().return_once(|_, _, _| {
            Err(CartsServiceError::Validation(
                ValidationError::ExpectedSingleProduct { found: 2 },
            ))
        });

        let res = TestClient::put("http://example.com/carts/1/items/10")
            .json(&json!({ "products": [{}, {}] }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn missing_cart_wins_over_malformed_body() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .return_once(|cart| Err(CartsServiceError::CartNotFound(cart)));

        carts.expect_replace_item().never();

        let res = TestClient::put("http://example.com/carts/99/items/10")
            .json(&json!({ "products": { "sku": 10 } }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn missing_item_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_replace_item()
            .once()
            .return_once(|cart, sku, _| Err(CartsServiceError::ItemNotFound { cart, sku }));

        let res = TestClient::put("http://example.com/carts/1/items/10")
            .json(&json!({
                "products": [{ "sku": 10, "name": "Risk", "quantity": 1, "unitprice": 1.0 }]
            }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
