#![forbid(unsafe_code)]

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn_with_state;
use axum::routing::{delete, get, post, put};
use axum::Router;
use bijux_contacts_store::ContactBook;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use tokio::sync::Mutex;

mod config;
mod http;
mod middleware;

pub use config::{ConfigError, ServerConfig, DEFAULT_PORT};

pub const CRATE_NAME: &str = "bijux-contacts-server";

#[derive(Clone)]
pub struct AppState {
    pub book: Arc<ContactBook>,
    pub config: Arc<ServerConfig>,
    /// Held across the load-validate-save cycle of every mutating request so
    /// concurrent writers cannot overwrite each other's changes.
    pub write_gate: Arc<Mutex<()>>,
    pub request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(book: ContactBook) -> Self {
        Self::with_config(book, ServerConfig::default())
    }

    #[must_use]
    pub fn with_config(book: ContactBook, config: ServerConfig) -> Self {
        Self {
            book: Arc::new(book),
            config: Arc::new(config),
            write_gate: Arc::new(Mutex::new(())),
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    use http::handlers::{
        create_contact_handler, delete_contact_handler, get_add_segment_handler,
        get_contact_handler, list_contacts_handler, route_not_found_handler,
        update_contact_handler,
    };

    Router::new()
        .route(
            "/contacts",
            get(list_contacts_handler).fallback(route_not_found_handler),
        )
        .route(
            "/contacts/add",
            post(create_contact_handler)
                .get(get_add_segment_handler)
                .fallback(route_not_found_handler),
        )
        .route(
            "/contacts/:id",
            get(get_contact_handler).fallback(route_not_found_handler),
        )
        .route(
            "/contacts/delete/:id",
            delete(delete_contact_handler).fallback(route_not_found_handler),
        )
        .route(
            "/contacts/update/:id",
            put(update_contact_handler).fallback(route_not_found_handler),
        )
        .fallback(route_not_found_handler)
        .layer(from_fn_with_state(
            state.clone(),
            middleware::request_tracing::request_tracing_middleware,
        ))
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes))
        .with_state(state)
}
