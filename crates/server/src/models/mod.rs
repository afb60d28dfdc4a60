//! Domain models for the storefront backend.
//!
//! These types represent validated domain objects; the stores in
//! [`crate::store`] own their persistence.

pub mod customer;
pub mod order;
pub mod product;

pub use customer::{Actor, Customer};
pub use order::{CartItem, LineItem, Order};
pub use product::{NewProduct, Product, ProductUpdate, Slider};
