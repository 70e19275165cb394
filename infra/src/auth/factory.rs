//! Environment-driven auth provider selection.

use std::sync::{Arc, Mutex};

use tracing::info;

use agro_core::providers::{AuthProvider, MockAuthProvider};
use agro_shared::config::{ApiClientConfig, AuthProviderKind};

use crate::http::client::ApiClient;

use super::real_provider::RealAuthProvider;

/// Builds and caches the configured auth provider
///
/// The provider is built once per selected kind and reused; a changed
/// selection (or an explicit [`reset`](Self::reset)) rebuilds it. Useful
/// for tests that flip between the mock and the backend provider.
pub struct AuthProviderFactory {
    cached: Mutex<Option<(AuthProviderKind, Arc<dyn AuthProvider>)>>,
}

impl AuthProviderFactory {
    pub fn new() -> Self {
        Self {
            cached: Mutex::new(None),
        }
    }

    /// Provider for the kind selected by the environment
    ///
    /// An automated e2e test driver always gets the mock, regardless of
    /// the provider variable.
    pub fn get(&self) -> Arc<dyn AuthProvider> {
        self.get_kind(AuthProviderKind::from_env())
    }

    /// Provider for an explicit kind, bypassing the environment
    pub fn get_kind(&self, kind: AuthProviderKind) -> Arc<dyn AuthProvider> {
        let mut cached = self.cached.lock().unwrap();
        if let Some((cached_kind, provider)) = cached.as_ref() {
            if *cached_kind == kind {
                return provider.clone();
            }
        }

        let provider = Self::build(kind);
        *cached = Some((kind, provider.clone()));
        provider
    }

    /// Kind of the currently cached provider, if any
    pub fn current_kind(&self) -> Option<AuthProviderKind> {
        self.cached.lock().unwrap().as_ref().map(|(kind, _)| *kind)
    }

    /// Drop the cached provider so the next call rebuilds it
    pub fn reset(&self) {
        *self.cached.lock().unwrap() = None;
    }

    fn build(kind: AuthProviderKind) -> Arc<dyn AuthProvider> {
        info!(provider = %kind, "Building auth provider");
        match kind {
            AuthProviderKind::Mock => Arc::new(MockAuthProvider::new()),
            AuthProviderKind::Real => {
                let client = Arc::new(ApiClient::new(ApiClientConfig::from_env()));
                Arc::new(RealAuthProvider::new(client))
            }
        }
    }
}

impl Default for AuthProviderFactory {
    fn default() -> Self {
        Self::new()
    }
}
