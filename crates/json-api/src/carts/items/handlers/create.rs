//! Create Cart Items Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::PathParam, prelude::*};

use shopcart_app::domain::carts::models::CartId;

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

/// Create Cart Items Handler
///
/// Appends every product in a [`ProductsRequest`] body. If any product is
/// missing a field, nothing is added.
#[endpoint(
    tags("carts"),
    summary = "Add Items to Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Items added"),
    ),
)]
#[tracing::instrument(
    name = "carts.items.create",
    skip(cart, req, depot, res),
    fields(cart_id = tracing::field::Empty, added = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<i64>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let cart = CartId::from_i64(cart.into_inner());

    let span = tracing::Span::current();

    span.record("cart_id", tracing::field::display(cart));

    let request = payload::products_request(req, state.app.carts.as_ref(), cart).await?;

    if let Some(products) = &request.products {
        span.record("added", products.len());
    }

    let updated = state
        .app
        .carts
        .add_items(cart, request.into_drafts())
        .await
        .map_err(into_api_error)?;

    res.add_header(LOCATION, format!("/carts/{cart}/items"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

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

    use crate::{
        errors::ErrorResponse,
        test_helpers::{carts_service, make_cart, make_item},
    };

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("carts/{cart}/items").post(handler))
    }

    #[tokio::test]
    async fn adds_items_and_sets_location() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_items()
            .once()
            .withf(|cart, products| {
                *cart == CartId::from_i64(3) && products.as_ref().is_some_and(|p| p.len() == 2)
            })
            .return_once(|_, _| {
                Ok(make_cart(
                    3,
                    1,
                    vec![make_item(1, "Risk", 1, 1.0), make_item(2, "Clue", 1, 2.0)],
                ))
            });

        let mut res = TestClient::post("http://example.com/carts/3/items")
            .json(&json!({
                "products": [
                    { "sku": 1, "name": "Risk", "quantity": 1, "unitprice": 1.0 },
                    { "sku": 2, "name": "Clue", "quantity": 1, "unitprice": 2.0 }
                ]
            }))
            .send(&make_service(carts))
            .await;

        let body: CartResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/carts/3/items"));
        assert_eq!(body.products.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn missing_field_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_add_items().once().return_once(|_, _| {
            Err(CartsServiceError::Validation(ValidationError::MissingField {
                index: 0,
                field: "unitprice",
            }))
        });

        let mut res = TestClient::post("http://example.com/carts/3/items")
            .json(&json!({ "products": [{ "sku": 1, "name": "Risk", "quantity": 1 }] }))
            .send(&make_service(carts))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, "Data is not valid: product 0 is missing unitprice");

        Ok(())
    }

    #[tokio::test]
    async fn products_must_be_a_list_of_objects() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .return_once(|cart| Ok(make_cart(cart.into_i64(), 1, vec![])));

        carts.expect_add_items().never();

        let mut res = TestClient::post("http://example.com/carts/3/items")
            .json(&json!({ "products": [1, 2, 3] }))
            .send(&make_service(carts))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(
            body.error.starts_with("Data is not valid: invalid type"),
            "unexpected message: {}",
            body.error
        );

        Ok(())
    }

    #[tokio::test]
    async fn missing_cart_wins_over_malformed_body() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .return_once(|cart| Err(CartsServiceError::CartNotFound(cart)));

        carts.expect_add_items().never();

        let mut res = TestClient::post("http://example.com/carts/99/items")
            .json(&json!({
                "products": [{ "sku": "abc", "name": "Risk", "quantity": 1, "unitprice": 1.0 }]
            }))
            .send(&make_service(carts))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.error, "Shopping Cart with id: 99 was not found");

        Ok(())
    }
}
