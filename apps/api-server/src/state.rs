//! Application state - shared across all handlers.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use quill_core::DomainError;
use quill_core::ports::PostRepository;
use quill_core::services::{DefaultPostService, PostService};

use crate::config::AppConfig;

/// Shared application state, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostService>,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostService>, request_timeout: Duration) -> Self {
        Self {
            posts,
            request_timeout,
        }
    }

    /// Wire the post service on top of the given repository.
    pub fn with_repository(repo: Arc<dyn PostRepository>, request_timeout: Duration) -> Self {
        Self::new(Arc::new(DefaultPostService::new(repo)), request_timeout)
    }

    /// Build the application state from configuration.
    ///
    /// Connecting to the database is part of startup; a failure is fatal.
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        #[cfg(feature = "postgres")]
        let repo: Arc<dyn PostRepository> = {
            let conn = quill_infra::database::connect(&config.database).await?;
            Arc::new(quill_infra::PostgresPostRepository::new(conn))
        };

        #[cfg(not(feature = "postgres"))]
        let repo: Arc<dyn PostRepository> = {
            tracing::warn!(
                database = ?config.database,
                "Running without postgres feature - using in-memory repository"
            );
            Arc::new(quill_infra::InMemoryPostRepository::new())
        };

        tracing::info!("Application state initialized");

        Ok(Self::with_repository(repo, config.request_timeout))
    }

    /// Run a service call under the per-request deadline.
    ///
    /// Dropping the returned future (client disconnect, deadline) drops
    /// the in-flight database call with it.
    pub async fn within_deadline<T, F>(&self, call: F) -> Result<T, DomainError>
    where
        F: Future<Output = Result<T, DomainError>>,
    {
        tokio::time::timeout(self.request_timeout, call)
            .await
            .map_err(|_| DomainError::Timeout(self.request_timeout))?
    }
}
