use crate::api::ApiClient;
use leptos::prelude::*;

/// Process-wide state is limited to the API client configuration.
/// Each view owns its collection, loading flag and error banner; nothing
/// list-shaped is shared or cached across routes.
#[derive(Clone)]
pub(crate) struct AppState {
    pub api_client: RwSignal<ApiClient>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            api_client: RwSignal::new(ApiClient::from_env()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);
