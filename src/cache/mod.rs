// ABOUTME: Named TTL caches for slow-changing Contrast data
// ABOUTME: Owned by the server context and injected into tools, never global
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Cache Layer
//!
//! Expensive upstream lookups that change slowly relative to an agent session
//! are cached with a fixed TTL:
//!
//! | Cache | Key | TTL |
//! |---|---|---|
//! | `applications` | org | 5 minutes |
//! | `libraries` | org + application | 10 minutes |
//! | `library_observations` | org + application + library hash | 10 minutes |
//!
//! Explicit invalidation exists for the "not found, maybe newly created"
//! case: a tool invalidates once and retries before concluding the resource
//! does not exist.

mod ttl;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use tracing::info;

use crate::constants::cache::{APPLICATIONS_TTL_SECS, LIBRARIES_TTL_SECS, MAX_ENTRIES};
use crate::errors::AppError;
use crate::models::{Application, Library, LibraryObservation};

pub use ttl::TtlCache;

/// Composite cache key: organization plus optional entity
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    org_id: String,
    entity_id: Option<String>,
}

impl CacheKey {
    /// Key scoped to a whole organization
    #[must_use]
    pub fn org(org_id: &str) -> Self {
        Self {
            org_id: org_id.to_owned(),
            entity_id: None,
        }
    }

    /// Key scoped to one entity within an organization
    #[must_use]
    pub fn entity(org_id: &str, entity_id: &str) -> Self {
        Self {
            org_id: org_id.to_owned(),
            entity_id: Some(entity_id.to_owned()),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.entity_id {
            Some(entity) => write!(f, "{}:{entity}", self.org_id),
            None => f.write_str(&self.org_id),
        }
    }
}

/// TTL and capacity settings for the server caches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Applications list per organization
    pub applications_ttl: Duration,
    /// Libraries per application and class usage per library
    pub libraries_ttl: Duration,
    /// Upper bound on entries per cache
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            applications_ttl: Duration::from_secs(APPLICATIONS_TTL_SECS),
            libraries_ttl: Duration::from_secs(LIBRARIES_TTL_SECS),
            max_entries: MAX_ENTRIES,
        }
    }
}

/// Logical cache names accepted by [`ServerCaches::invalidate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheName {
    /// Applications per organization
    Applications,
    /// Libraries per application
    Libraries,
    /// Class usage per library
    LibraryObservations,
}

impl CacheName {
    /// Every cache name
    pub const ALL: &'static [Self] = &[
        Self::Applications,
        Self::Libraries,
        Self::LibraryObservations,
    ];

    /// Name used in logs and configuration
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Applications => "applications",
            Self::Libraries => "libraries",
            Self::LibraryObservations => "library_observations",
        }
    }
}

impl fmt::Display for CacheName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CacheName {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|name| name.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::invalid_input(format!("Unknown cache: {s}")))
    }
}

/// Every cache the server owns
#[derive(Debug)]
pub struct ServerCaches {
    /// Applications per organization
    pub applications: TtlCache<CacheKey, Vec<Application>>,
    /// Libraries per application
    pub libraries: TtlCache<CacheKey, Vec<Library>>,
    /// Class usage per library
    pub library_observations: TtlCache<CacheKey, Vec<LibraryObservation>>,
}

impl ServerCaches {
    /// Build the caches from configuration
    #[must_use]
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            applications: TtlCache::new(
                CacheName::Applications.as_str(),
                config.applications_ttl,
                config.max_entries,
            ),
            libraries: TtlCache::new(
                CacheName::Libraries.as_str(),
                config.libraries_ttl,
                config.max_entries,
            ),
            library_observations: TtlCache::new(
                CacheName::LibraryObservations.as_str(),
                config.libraries_ttl,
                config.max_entries,
            ),
        }
    }

    /// Clear one named cache, returning how many entries were removed
    pub async fn invalidate(&self, name: CacheName) -> usize {
        let removed = match name {
            CacheName::Applications => self.applications.invalidate_all().await,
            CacheName::Libraries => self.libraries.invalidate_all().await,
            CacheName::LibraryObservations => self.library_observations.invalidate_all().await,
        };
        info!(cache = %name, removed, "Invalidated cache");
        removed
    }
}

impl Default for ServerCaches {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}
