//! Shopcart Domain Concerns

pub mod carts;
