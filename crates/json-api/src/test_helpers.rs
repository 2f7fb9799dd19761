//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use shopcart_app::{
    context::AppContext,
    domain::carts::{
        MockCartsService,
        models::{Cart, CartId, LineItem, OwnerId, Sku},
    },
};

use crate::state::State;

pub(crate) fn state_with_carts(carts: MockCartsService) -> Arc<State> {
    State::from_app_context(AppContext {
        carts: Arc::new(carts),
    })
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_carts(carts)))
            .push(route),
    )
}

pub(crate) fn make_item(sku: i64, name: &str, quantity: i64, unit_price: f64) -> LineItem {
    LineItem {
        sku: Sku::from_i64(sku),
        name: name.to_string(),
        quantity,
        unit_price,
    }
}

pub(crate) fn make_cart(cart: i64, owner: i64, items: Vec<LineItem>) -> Cart {
    Cart {
        owner_id: OwnerId::from_i64(owner),
        cart_id: CartId::from_i64(cart),
        subtotal: 0.0,
        items,
    }
}
