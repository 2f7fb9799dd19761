//! Carts service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, info};

use crate::{
    domain::carts::{
        data::{CartDraft, ProductDraft, ValidationError, validate_products, validate_single_product},
        errors::CartsServiceError,
        models::{Cart, CartId, CartListing, ItemListing, LineItem, OwnerId, Sku},
        repository::CartsRepository,
    },
    store::KeyValueStore,
};

/// Cart service over any [`KeyValueStore`].
///
/// Each operation is a plain read-modify-write with no lock held between the
/// read and the write, so concurrent mutations of one cart are
/// last-writer-wins.
#[derive(Clone)]
pub struct StoreCartsService {
    repository: CartsRepository,
}

impl StoreCartsService {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            repository: CartsRepository::new(store),
        }
    }

    async fn load(&self, cart: CartId) -> Result<Cart, CartsServiceError> {
        self.repository
            .get(cart)
            .await?
            .ok_or(CartsServiceError::CartNotFound(cart))
    }
}

#[async_trait]
impl CartsService for StoreCartsService {
    async fn create_cart(&self, draft: CartDraft) -> Result<Cart, CartsServiceError> {
        let new_cart = draft.validate()?;

        // Not atomic: two concurrent creates for one owner can both pass.
        if !self
            .repository
            .find_by_owner(new_cart.owner_id)
            .await?
            .is_empty()
        {
            return Err(CartsServiceError::AlreadyExists(new_cart.owner_id));
        }

        let mut cart = Cart::new(new_cart.owner_id, new_cart.items, new_cart.subtotal);

        self.repository.put(&mut cart).await?;

        info!(cart = %cart.cart_id, owner = %cart.owner_id, "created cart");

        Ok(cart)
    }

    async fn get_cart(&self, cart: CartId) -> Result<Cart, CartsServiceError> {
        self.load(cart).await
    }

    async fn list_carts(&self, owner: Option<String>) -> Result<CartListing, CartsServiceError> {
        let Some(owner) = owner.filter(|owner| !owner.trim().is_empty()) else {
            return Ok(CartListing::All(self.repository.list_all().await?));
        };

        let owner_id = owner
            .parse::<OwnerId>()
            .map_err(|_source| CartsServiceError::InvalidOwner(owner.clone()))?;

        self.repository
            .find_by_owner(owner_id)
            .await?
            .into_iter()
            .next()
            .map(CartListing::Single)
            .ok_or(CartsServiceError::OwnerNotFound(owner_id))
    }

    async fn list_items(
        &self,
        cart: CartId,
        name: Option<String>,
    ) -> Result<ItemListing, CartsServiceError> {
        let cart = self.load(cart).await?;

        let Some(name) = name.filter(|name| !name.is_empty()) else {
            if cart.items.is_empty() {
                return Ok(ItemListing::Empty);
            }

            return Ok(ItemListing::All(cart.items));
        };

        let name = strip_quotes(&name);

        cart.items
            .into_iter()
            .find(|item| item.name.to_lowercase() == name.to_lowercase())
            .map(ItemListing::Single)
            .ok_or_else(|| CartsServiceError::ProductNameNotFound(name.to_string()))
    }

    async fn get_item(&self, cart: CartId, sku: Sku) -> Result<LineItem, CartsServiceError> {
        let found = self.load(cart).await?;

        found
            .item(sku)
            .cloned()
            .ok_or(CartsServiceError::ItemNotFound { cart, sku })
    }

    async fn add_items(
        &self,
        cart: CartId,
        products: Option<Vec<ProductDraft>>,
    ) -> Result<Cart, CartsServiceError> {
        let mut found = self.load(cart).await?;

        let items = validate_products(products.ok_or(ValidationError::MissingProducts)?)?;
        let added = items.len();

        found.items.extend(items);

        self.repository.put(&mut found).await?;

        info!(%cart, added, "added items to cart");

        Ok(found)
    }

    async fn replace_item(
        &self,
        cart: CartId,
        sku: Sku,
        products: Option<Vec<ProductDraft>>,
    ) -> Result<Cart, CartsServiceError> {
        let mut found = self.load(cart).await?;

        let item = validate_single_product(products)?;

        let position = found
            .position(sku)
            .ok_or(CartsServiceError::ItemNotFound { cart, sku })?;

        if let Some(slot) = found.items.get_mut(position) {
            *slot = item;
        }

        self.repository.put(&mut found).await?;

        info!(%cart, %sku, "replaced cart item");

        Ok(found)
    }

    async fn remove_item(&self, cart: CartId, sku: Sku) -> Result<(), CartsServiceError> {
        let Some(mut found) = self.repository.get(cart).await? else {
            debug!(%cart, "remove item from missing cart");
            return Ok(());
        };

        let Some(position) = found.position(sku) else {
            return Ok(());
        };

        found.items.remove(position);

        self.repository.put(&mut found).await?;

        info!(%cart, %sku, "removed cart item");

        Ok(())
    }

    async fn delete_cart(&self, cart: CartId) -> Result<(), CartsServiceError> {
        self.repository.delete(cart).await?;

        info!(%cart, "deleted cart");

        Ok(())
    }

    async fn recompute_subtotal(&self, cart: CartId) -> Result<Cart, CartsServiceError> {
        let mut found = self.load(cart).await?;

        found.subtotal = found.computed_subtotal();

        self.repository.put(&mut found).await?;

        info!(%cart, subtotal = found.subtotal, "recomputed cart subtotal");

        Ok(found)
    }
}

fn strip_quotes(name: &str) -> &str {
    name.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(name)
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Creates a cart for an owner that has none yet.
    async fn create_cart(&self, draft: CartDraft) -> Result<Cart, CartsServiceError>;

    /// Retrieve a single cart.
    async fn get_cart(&self, cart: CartId) -> Result<Cart, CartsServiceError>;

    /// List every cart, or the cart of the owner given as a raw query value.
    async fn list_carts(&self, owner: Option<String>) -> Result<CartListing, CartsServiceError>;

    /// List the items of a cart, optionally matching one by name.
    async fn list_items(
        &self,
        cart: CartId,
        name: Option<String>,
    ) -> Result<ItemListing, CartsServiceError>;

    /// Retrieve a single item by SKU.
    async fn get_item(&self, cart: CartId, sku: Sku) -> Result<LineItem, CartsServiceError>;

    /// Append every product to the cart.
    async fn add_items(
        &self,
        cart: CartId,
        products: Option<Vec<ProductDraft>>,
    ) -> Result<Cart, CartsServiceError>;

    /// Replace the first item with the given SKU.
    async fn replace_item(
        &self,
        cart: CartId,
        sku: Sku,
        products: Option<Vec<ProductDraft>>,
    ) -> Result<Cart, CartsServiceError>;

    /// Remove the first item with the given SKU, if any.
    async fn remove_item(&self, cart: CartId, sku: Sku) -> Result<(), CartsServiceError>;

    /// Deletes a cart, if it exists.
    async fn delete_cart(&self, cart: CartId) -> Result<(), CartsServiceError>;

    /// Recalculate and store the cart's subtotal.
    async fn recompute_subtotal(&self, cart: CartId) -> Result<Cart, CartsServiceError>;
}
