//! Shopping cart domain, storage backends and application wiring.

pub mod context;
pub mod database;
pub mod domain;
pub mod ids;
pub mod store;

#[cfg(test)]
mod test;
