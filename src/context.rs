// ABOUTME: Long-lived server context shared by every tool invocation
// ABOUTME: Owns the Contrast API handle and the TTL caches, with cached lookup helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use tracing::debug;

use crate::cache::{CacheKey, ServerCaches};
use crate::config::environment::ServerConfig;
use crate::errors::AppResult;
use crate::models::{Application, Library, LibraryObservation};
use crate::upstream::{ContrastApi, HttpContrastClient, UpstreamResult};

/// Dependencies injected into tools
#[derive(Clone)]
pub struct ServerContext {
    api: Arc<dyn ContrastApi>,
    caches: Arc<ServerCaches>,
}

impl ServerContext {
    /// Context over an explicit API handle and cache set
    #[must_use]
    pub fn new(api: Arc<dyn ContrastApi>, caches: Arc<ServerCaches>) -> Self {
        Self { api, caches }
    }

    /// Build the HTTP client and caches from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed
    pub fn from_config(config: &ServerConfig) -> AppResult<Self> {
        let client = HttpContrastClient::new(&config.contrast)?;
        Ok(Self::new(
            Arc::new(client),
            Arc::new(ServerCaches::new(&config.cache)),
        ))
    }

    /// Contrast API handle
    #[must_use]
    pub fn api(&self) -> &dyn ContrastApi {
        self.api.as_ref()
    }

    /// Server caches
    #[must_use]
    pub fn caches(&self) -> &ServerCaches {
        &self.caches
    }

    fn org_key(&self) -> CacheKey {
        CacheKey::org(self.api.org_id())
    }

    /// All applications of the organization, cached
    ///
    /// # Errors
    ///
    /// Returns the upstream error when the list must be fetched and the call fails
    pub async fn applications(&self) -> UpstreamResult<Vec<Application>> {
        self.caches
            .applications
            .get_or_try_compute(self.org_key(), || self.api.list_applications())
            .await
    }

    /// Drop the cached application list and fetch it again
    ///
    /// # Errors
    ///
    /// Returns the upstream error when the fetch fails
    pub async fn refresh_applications(&self) -> UpstreamResult<Vec<Application>> {
        let key = self.org_key();
        let dropped = self.caches.applications.invalidate(&key).await;
        debug!(key = %key, dropped, "Refreshing applications");
        self.applications().await
    }

    /// Libraries of one application, cached
    ///
    /// # Errors
    ///
    /// Returns the upstream error when the list must be fetched and the call fails
    pub async fn application_libraries(&self, app_id: &str) -> UpstreamResult<Vec<Library>> {
        let key = CacheKey::entity(self.api.org_id(), app_id);
        self.caches
            .libraries
            .get_or_try_compute(key, || self.api.list_application_libraries(app_id))
            .await
    }

    /// Class usage of one library within an application, cached
    ///
    /// # Errors
    ///
    /// Returns the upstream error when the data must be fetched and the call fails
    pub async fn library_observations(
        &self,
        app_id: &str,
        library_hash: &str,
    ) -> UpstreamResult<Vec<LibraryObservation>> {
        let key = CacheKey::entity(self.api.org_id(), &format!("{app_id}/{library_hash}"));
        self.caches
            .library_observations
            .get_or_try_compute(key, || {
                self.api.list_library_observations(app_id, library_hash)
            })
            .await
    }
}
