//! Cart Models

use serde::{Deserialize, Serialize};

use crate::ids::TypedId;

/// Cart Identifier
pub type CartId = TypedId<Cart>;

/// Cart Owner Identifier
pub type OwnerId = TypedId<Owner>;

/// Stock-keeping Unit
pub type Sku = TypedId<LineItem>;

/// Marker for owner identifiers.
#[derive(Debug)]
pub struct Owner;

/// Cart Model
///
/// Field names on the wire and in storage follow the service's published
/// format (`uid`, `sid`, `products`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(rename = "uid")]
    pub owner_id: OwnerId,

    #[serde(rename = "sid")]
    pub cart_id: CartId,

    pub subtotal: f64,

    #[serde(rename = "products")]
    pub items: Vec<LineItem>,
}

impl Cart {
    /// A cart that has not been persisted yet.
    #[must_use]
    pub fn new(owner_id: OwnerId, items: Vec<LineItem>, subtotal: f64) -> Self {
        Self {
            owner_id,
            cart_id: CartId::UNASSIGNED,
            subtotal,
            items,
        }
    }

    /// First item with the given SKU.
    #[must_use]
    pub fn item(&self, sku: Sku) -> Option<&LineItem> {
        self.items.iter().find(|item| item.sku == sku)
    }

    /// Position of the first item with the given SKU.
    #[must_use]
    pub fn position(&self, sku: Sku) -> Option<usize> {
        self.items.iter().position(|item| item.sku == sku)
    }

    /// Sum of `quantity * unit_price`, rounded to cents.
    #[must_use]
    pub fn computed_subtotal(&self) -> f64 {
        let total: f64 = self.items.iter().map(LineItem::line_total).sum();

        round_to_cents(total)
    }
}

/// Line Item Model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: Sku,
    pub name: String,
    pub quantity: i64,

    #[serde(rename = "unitprice")]
    pub unit_price: f64,
}

impl LineItem {
    #[expect(
        clippy::cast_precision_loss,
        reason = "cart quantities are far below 2^52"
    )]
    fn line_total(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

/// Result of listing carts, optionally filtered by owner.
#[derive(Debug, Clone, PartialEq)]
pub enum CartListing {
    /// The owner's cart.
    Single(Cart),

    /// Every stored cart.
    All(Vec<Cart>),
}

/// Result of listing the items of a cart.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemListing {
    /// The cart has no items and no name filter was given.
    Empty,

    /// The first item matching the name filter.
    Single(LineItem),

    /// Every item in insertion order.
    All(Vec<LineItem>),
}

fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
