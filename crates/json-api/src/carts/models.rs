//! Cart request and response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use shopcart_app::domain::carts::{
    data::{CartDraft, ProductDraft},
    models::{Cart, CartListing, ItemListing, LineItem, OwnerId, Sku},
};

/// Body returned when listing the items of an empty cart.
pub(crate) const EMPTY_CART_MESSAGE: &str = "The cart contains no products";

/// Create Cart Request
///
/// Every field is optional here; missing data is reported by validation.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartRequest {
    /// Owner (user) id
    #[serde(alias = "owner_id")]
    pub uid: Option<i64>,

    /// Initial subtotal, stored as given
    pub subtotal: Option<f64>,

    /// Initial products
    #[serde(alias = "items")]
    pub products: Option<Vec<ProductRequest>>,
}

impl From<CartRequest> for CartDraft {
    fn from(request: CartRequest) -> Self {
        CartDraft {
            owner_id: request.uid.map(OwnerId::from_i64),
            subtotal: request.subtotal,
            products: request
                .products
                .map(|products| products.into_iter().map(Into::into).collect()),
        }
    }
}

/// Products Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsRequest {
    /// Products to add or the single replacement product
    #[serde(alias = "items")]
    pub products: Option<Vec<ProductRequest>>,
}

impl ProductsRequest {
    pub(crate) fn into_drafts(self) -> Option<Vec<ProductDraft>> {
        self.products
            .map(|products| products.into_iter().map(Into::into).collect())
    }
}

/// Product Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductRequest {
    /// Stock-keeping unit
    pub sku: Option<i64>,

    /// Product name
    pub name: Option<String>,

    /// Quantity in the cart
    pub quantity: Option<i64>,

    /// Price of a single unit
    #[serde(alias = "unit_price")]
    pub unitprice: Option<f64>,
}

impl From<ProductRequest> for ProductDraft {
    fn from(request: ProductRequest) -> Self {
        ProductDraft {
            sku: request.sku.map(Sku::from_i64),
            name: request.name,
            quantity: request.quantity,
            unit_price: request.unitprice,
        }
    }
}

/// Cart Response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// Owner (user) id
    pub uid: i64,

    /// Cart id
    pub sid: i64,

    /// Subtotal as of the last recalculation
    pub subtotal: f64,

    /// Products in insertion order
    pub products: Vec<LineItemResponse>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            uid: cart.owner_id.into_i64(),
            sid: cart.cart_id.into_i64(),
            subtotal: cart.subtotal,
            products: cart.items.into_iter().map(Into::into).collect(),
        }
    }
}

/// Line Item Response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct LineItemResponse {
    /// Stock-keeping unit
    pub sku: i64,

    /// Product name
    pub name: String,

    /// Quantity in the cart
    pub quantity: i64,

    /// Price of a single unit
    pub unitprice: f64,
}

impl From<LineItem> for LineItemResponse {
    fn from(item: LineItem) -> Self {
        Self {
            sku: item.sku.into_i64(),
            name: item.name,
            quantity: item.quantity,
            unitprice: item.unit_price,
        }
    }
}

/// Carts Response: one cart when filtered by owner, otherwise all carts.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub(crate) enum CartsResponse {
    /// The owner's cart
    Single(CartResponse),

    /// Every cart
    All(Vec<CartResponse>),
}

impl From<CartListing> for CartsResponse {
    fn from(listing: CartListing) -> Self {
        match listing {
            CartListing::Single(cart) => Self::Single(cart.into()),
            CartListing::All(carts) => Self::All(carts.into_iter().map(Into::into).collect()),
        }
    }
}

/// Items Response: a message for an empty cart, one item when filtered by
/// name, otherwise all items.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub(crate) enum ItemsResponse {
    /// The cart has no products
    Empty(String),

    /// The item matching the name filter
    Single(LineItemResponse),

    /// Every item in the cart
    All(Vec<LineItemResponse>),
}

impl From<ItemListing> for ItemsResponse {
    fn from(listing: ItemListing) -> Self {
        match listing {
            ItemListing::Empty => Self::Empty(EMPTY_CART_MESSAGE.to_string()),
            ItemListing::Single(item) => Self::Single(item.into()),
            ItemListing::All(items) => Self::All(items.into_iter().map(Into::into).collect()),
        }
    }
}
