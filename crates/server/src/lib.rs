//! Tienda server library.
//!
//! This crate provides the storefront backend as a library, allowing it
//! to be tested and reused. The binary in `main.rs` wires it to a TCP
//! listener.
//!
//! # Architecture
//!
//! - [`store`] - in-process backing stores (credentials, customers,
//!   orders, catalog, sliders, sessions)
//! - [`services`] - registration, login, role, and order services that
//!   compose the stores and own all validation and authorization
//! - [`routes`] - Axum JSON handlers mapping the HTTP surface onto the
//!   services
//! - [`middleware`] - the `RequireAuth` extractor resolving bearer
//!   tokens into an [`models::Actor`]

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
