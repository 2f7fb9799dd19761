//! Carts Repository

use std::sync::Arc;

use crate::{
    domain::carts::models::{Cart, CartId, OwnerId},
    store::{KeyValueStore, StoreError},
};

/// Key holding the last issued cart id.
pub(crate) const INDEX_KEY: &str = "index";

/// Stores each cart as JSON under its decimal id.
#[derive(Clone)]
pub(crate) struct CartsRepository {
    store: Arc<dyn KeyValueStore>,
}

impl CartsRepository {
    #[must_use]
    pub(crate) fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub(crate) async fn next_id(&self) -> Result<CartId, StoreError> {
        let id = self.store.increment(INDEX_KEY).await?;

        Ok(CartId::from_i64(id))
    }

    /// Persist `cart`, assigning an id first if it has none.
    pub(crate) async fn put(&self, cart: &mut Cart) -> Result<(), StoreError> {
        if cart.cart_id.is_unassigned() {
            cart.cart_id = self.next_id().await?;
        }

        let encoded = serde_json::to_string(cart)?;

        self.store.set(&cart.cart_id.to_string(), encoded).await
    }

    pub(crate) async fn get(&self, cart: CartId) -> Result<Option<Cart>, StoreError> {
        let Some(encoded) = self.store.get(&cart.to_string()).await? else {
            return Ok(None);
        };

        Ok(Some(serde_json::from_str(&encoded)?))
    }

    pub(crate) async fn delete(&self, cart: CartId) -> Result<(), StoreError> {
        self.store.delete(&cart.to_string()).await?;

        Ok(())
    }

    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "service paths load the cart they check")
    )]
    pub(crate) async fn exists(&self, cart: CartId) -> Result<bool, StoreError> {
        self.store.exists(&cart.to_string()).await
    }

    /// Every stored cart, in no particular order.
    pub(crate) async fn list_all(&self) -> Result<Vec<Cart>, StoreError> {
        let mut carts = Vec::new();

        for key in self.store.keys().await? {
            if key == INDEX_KEY {
                continue;
            }

            let Ok(cart_id) = key.parse::<CartId>() else {
                continue;
            };

            // Deleted between listing and reading.
            if let Some(cart) = self.get(cart_id).await? {
                carts.push(cart);
            }
        }

        Ok(carts)
    }

    pub(crate) async fn find_by_owner(&self, owner: OwnerId) -> Result<Vec<Cart>, StoreError> {
        let mut carts = self.list_all().await?;

        carts.retain(|cart| cart.owner_id == owner);

        Ok(carts)
    }
}
