//! Domain types: products, the catalog they live in, and the cart that collects them.

pub mod cart;
pub mod catalog;
pub mod product;
