//! Create Cart Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};

use crate::{
    carts::{
        errors::{into_api_error, invalid_payload},
        models::{CartRequest, CartResponse},
    },
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Create Cart Handler
///
/// Expects a [`CartRequest`] body. An owner may only have one cart.
#[endpoint(
    tags("carts"),
    summary = "Create Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Cart created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid data or owner already has a cart"),
    ),
)]
#[tracing::instrument(
    name = "carts.create",
    skip(req, depot, res),
    fields(owner_id = tracing::field::Empty, cart_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request: CartRequest = req.json_or_malformed().await.map_err(invalid_payload)?;

    let span = tracing::Span::current();

    if let Some(owner) = request.uid {
        span.record("owner_id", owner);
    }

    let cart = state
        .app
        .carts
        .create_cart(request.into())
        .await
        .map_err(into_api_error)?;

    span.record("cart_id", tracing::field::display(cart.cart_id));

    res.add_header(LOCATION, format!("/carts/{}", cart.cart_id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use shopcart_app::domain::carts::{
        CartsServiceError, MockCartsService,
        data::{CartDraft, ProductDraft},
        models::{OwnerId, Sku},
    };

    use crate::{
        errors::ErrorResponse,
        test_helpers::{carts_service, make_cart, make_item},
    };

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("carts").post(handler))
    }

    #[tokio::test]
    async fn creates_cart_and_sets_location() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_create_cart()
            .once()
            .withf(|draft| {
                *draft
                    == CartDraft {
                        owner_id: Some(OwnerId::from_i64(7)),
                        subtotal: None,
                        products: Some(vec![ProductDraft {
                            sku: Some(Sku::from_i64(114_672_050)),
                            name: Some("Settlers of Catan".to_string()),
                            quantity: Some(1),
                            unit_price: Some(13.99),
                        }]),
                    }
            })
            .return_once(|_| {
                Ok(make_cart(
                    1,
                    7,
                    vec![make_item(114_672_050, "Settlers of Catan", 1, 13.99)],
                ))
            });

        let mut res = TestClient::post("http://example.com/carts")
            .json(&json!({
                "uid": 7,
                "products": [
                    { "sku": 114_672_050, "name": "Settlers of Catan", "quantity": 1, "unitprice": 13.99 }
                ]
            }))
            .send(&make_service(carts))
            .await;

        let body: CartResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/carts/1"));
        assert_eq!(body.sid, 1);
        assert_eq!(body.uid, 7);

        Ok(())
    }

    #[tokio::test]
    async fn accepts_descriptive_field_aliases() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_create_cart()
            .once()
            .withf(|draft| {
                draft.owner_id == Some(OwnerId::from_i64(8))
                    && draft
                        .products
                        .as_ref()
                        .is_some_and(|products| products[0].unit_price == Some(2.5))
            })
            .return_once(|_| Ok(make_cart(2, 8, vec![make_item(1, "Clue", 1, 2.5)])));

        let res = TestClient::post("http://example.com/carts")
            .json(&json!({
                "owner_id": 8,
                "items": [{ "sku": 1, "name": "Clue", "quantity": 1, "unit_price": 2.5 }]
            }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_owner_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_create_cart()
            .once()
            .return_once(|_| Err(CartsServiceError::AlreadyExists(OwnerId::from_i64(7))));

        let mut res = TestClient::post("http://example.com/carts")
            .json(&json!({ "uid": 7 }))
            .send(&make_service(carts))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, "Shopping Cart for uid 7 already exists");

        Ok(())
    }

    #[tokio::test]
    async fn malformed_body_returns_400_without_calling_service() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_create_cart().never();

        let mut res = TestClient::post("http://example.com/carts")
            .json(&json!({ "uid": "seven", "products": "none" }))
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
}
