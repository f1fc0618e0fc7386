use crate::db::{Connector, MySqlConnector};
use crate::handlers::{health, pages, records};
use axum::Router;
use axum::extract::FromRef;
use axum::routing::{get, post};
use axum_extra::extract::cookie::Key;
use std::sync::Arc;

type ConnectorFactory<C> = Arc<dyn Fn() -> C + Send + Sync>;

/// Shared state: the cookie key and a factory producing one connector per
/// data-access object.
pub struct AppState<C = MySqlConnector> {
    key: Key,
    connectors: ConnectorFactory<C>,
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            connectors: Arc::clone(&self.connectors),
        }
    }
}

impl<C> AppState<C> {
    pub fn new(key: Key, connectors: impl Fn() -> C + Send + Sync + 'static) -> Self {
        Self {
            key,
            connectors: Arc::new(connectors),
        }
    }

    pub fn connector(&self) -> C {
        (self.connectors)()
    }
}

impl AppState<MySqlConnector> {
    /// Credentials are read from the environment each time a connector is made.
    pub fn with_env_credentials(key: Key) -> Self {
        Self::new(key, MySqlConnector::from_env)
    }
}

impl<C> FromRef<AppState<C>> for Key {
    fn from_ref(state: &AppState<C>) -> Self {
        state.key.clone()
    }
}

pub fn app_router<C>(state: AppState<C>) -> Router
where
    C: Connector + 'static,
{
    Router::new()
        .route("/", get(pages::show_page))
        .route("/navigate", post(pages::navigate))
        .route("/records", post(records::submit_records::<C>))
        .route("/add-record", post(records::submit_add_record::<C>))
        .route("/api/records/{table}", get(records::api_records::<C>))
        .route("/health", get(health::healthcheck))
        .with_state(state)
}
