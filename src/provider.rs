use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

use tracing::debug;

use crate::api::ApiClient;
use crate::env::Environment;

/// Lookup key the user service client is published under.
pub const API_USUARIO: &str = "apiUsuario";

type Registry = RwLock<HashMap<String, Arc<ApiClient>>>;

fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Publishes a client handle under `key`, returning the handle it replaced.
/// Re-registration is last-write-wins.
pub fn provide(key: &str, client: Arc<ApiClient>) -> Option<Arc<ApiClient>> {
    registry()
        .write()
        .expect("provider registry lock poisoned")
        .insert(key.to_string(), client)
}

/// Retrieves the shared handle registered under `key`.
pub fn resolve(key: &str) -> Option<Arc<ApiClient>> {
    registry()
        .read()
        .expect("provider registry lock poisoned")
        .get(key)
        .cloned()
}

/// Builds the user service client for the resolved environment and
/// registers it under [`API_USUARIO`].
pub fn initialize(environment: Environment) -> Arc<ApiClient> {
    let client = Arc::new(ApiClient::new(environment));
    debug!(
        %environment,
        base_url = client.base_url(),
        "registering user service client"
    );
    provide(API_USUARIO, Arc::clone(&client));
    client
}
