//! Tienda Core - Shared types library.
//!
//! This crate provides the domain types shared by the tienda backend:
//! type-safe entity IDs, validated email addresses, and the customer
//! role enumeration.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no store
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, and roles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
