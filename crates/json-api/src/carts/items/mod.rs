//! Cart Items

mod handlers;
mod payload;

pub(crate) use handlers::*;
