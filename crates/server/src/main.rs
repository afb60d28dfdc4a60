//! Tienda server - storefront backend binary.
//!
//! Serves the JSON API for registration, login, catalog browsing, and
//! the order lifecycle. Configuration comes from the environment (see
//! [`tienda_server::config`]).

#![cfg_attr(not(test), forbid(unsafe_code))]

use secrecy::ExposeSecret;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tienda_core::Role;
use tienda_server::config::ServerConfig;
use tienda_server::services::RegistrationService;
use tienda_server::state::AppState;
use tienda_server::{routes, store};

/// Register the bootstrap manager account, if configured.
///
/// A fresh in-process store has no customers, so without this no
/// manager-gated operation would be reachable until a manager promotes
/// someone - a chicken-and-egg problem on first start.
async fn bootstrap_manager(state: &AppState, config: &ServerConfig) {
    let (Some(email), Some(password)) = (&config.manager_email, &config.manager_password) else {
        return;
    };

    let service = RegistrationService::new(state.accounts(), state.customers());
    let password = password.expose_secret();
    let birth_date = chrono::NaiveDate::default();

    match service
        .register(email.as_str(), password, password, birth_date)
        .await
    {
        Ok(customer) => match state.customers().set_role(customer.id, Role::Manager).await {
            Ok(_) => tracing::info!(customer_id = %customer.id, "bootstrap manager registered"),
            Err(e) => tracing::error!(error = %e, "failed to promote bootstrap manager"),
        },
        Err(e) => tracing::error!(error = %e, "failed to register bootstrap manager"),
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env().expect("failed to load configuration");

    // Initialize tracing with EnvFilter; defaults to info level for our
    // crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tienda_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AppState::new(config.clone());

    if let Some(path) = &config.catalog_path {
        let (products, sliders) = store::seed::apply(path, state.products(), state.sliders())
            .await
            .expect("failed to load catalog seed");
        tracing::info!(products, sliders, path = %path.display(), "catalog seeded");
    }

    bootstrap_manager(&state, &config).await;

    let app = routes::router(state).layer(TraceLayer::new_for_http());

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");

    tracing::info!("listening on {addr}");

    axum::serve(listener, app).await.expect("server error");
}
