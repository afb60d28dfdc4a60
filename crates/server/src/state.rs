//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::{
    CredentialStore, CustomerRegistry, OrderLedger, ProductCatalog, SessionStore, SliderGallery,
};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the backing stores and configuration. Handlers construct services
/// per request from references into this state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    accounts: CredentialStore,
    customers: CustomerRegistry,
    orders: OrderLedger,
    products: ProductCatalog,
    sliders: SliderGallery,
    sessions: SessionStore,
}

impl AppState {
    /// Create a new application state with empty stores.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let sessions = SessionStore::new(config.session_ttl());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                accounts: CredentialStore::new(),
                customers: CustomerRegistry::new(),
                orders: OrderLedger::new(),
                products: ProductCatalog::new(),
                sliders: SliderGallery::new(),
                sessions,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the credential store.
    #[must_use]
    pub fn accounts(&self) -> &CredentialStore {
        &self.inner.accounts
    }

    /// Get a reference to the customer registry.
    #[must_use]
    pub fn customers(&self) -> &CustomerRegistry {
        &self.inner.customers
    }

    /// Get a reference to the order ledger.
    #[must_use]
    pub fn orders(&self) -> &OrderLedger {
        &self.inner.orders
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn products(&self) -> &ProductCatalog {
        &self.inner.products
    }

    /// Get a reference to the slider gallery.
    #[must_use]
    pub fn sliders(&self) -> &SliderGallery {
        &self.inner.sliders
    }

    /// Get a reference to the session store.
    #[must_use]
    pub fn sessions(&self) -> &SessionStore {
        &self.inner.sessions
    }
}
