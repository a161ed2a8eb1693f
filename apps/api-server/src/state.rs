//! Application state - shared across all handlers.

use std::sync::Arc;

use medblog_core::ports::{ProfileRepository, TokenService};
use medblog_core::services::{
    AdminRepositories, AdminService, BlogService, BlogSettings, FaqService,
};
use medblog_infra::{DatabaseConfig, InMemoryStore, JwtTokenService};

use crate::config::AppConfig;

#[cfg(feature = "postgres")]
use medblog_infra::{
    PostgresCommentRepository, PostgresFaqRepository, PostgresPostRepository,
    PostgresProfileRepository, PostgresUserQueryRepository, connect,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blog: BlogService,
    pub faq: FaqService,
    pub admin: AdminService,
    /// Used to resolve the caller's role.
    pub profiles: Arc<dyn ProfileRepository>,
    pub tokens: Arc<dyn TokenService>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let repos = repositories(config.database.as_ref()).await;
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::from_env());

        tracing::info!("Application state initialized");

        Self::from_parts(repos, tokens, config.blog.clone())
    }

    pub fn from_parts(
        repos: AdminRepositories,
        tokens: Arc<dyn TokenService>,
        settings: BlogSettings,
    ) -> Self {
        Self {
            blog: BlogService::new(
                repos.posts.clone(),
                repos.comments.clone(),
                repos.profiles.clone(),
                settings,
            ),
            faq: FaqService::new(
                repos.faqs.clone(),
                repos.queries.clone(),
                repos.profiles.clone(),
            ),
            profiles: repos.profiles.clone(),
            admin: AdminService::new(repos),
            tokens,
        }
    }
}

/// Repositories backed by an in-memory store.
pub fn in_memory(store: &InMemoryStore) -> AdminRepositories {
    AdminRepositories {
        posts: store.posts.clone(),
        comments: store.comments.clone(),
        faqs: store.faqs.clone(),
        queries: store.queries.clone(),
        profiles: store.profiles.clone(),
    }
}

#[cfg(feature = "postgres")]
async fn repositories(config: Option<&DatabaseConfig>) -> AdminRepositories {
    let Some(config) = config else {
        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        return in_memory(&InMemoryStore::new());
    };

    match connect(config).await {
        Ok(conn) => {
            let conn = Arc::new(conn);
            AdminRepositories {
                posts: Arc::new(PostgresPostRepository::new(conn.clone())),
                comments: Arc::new(PostgresCommentRepository::new(conn.clone())),
                faqs: Arc::new(PostgresFaqRepository::new(conn.clone())),
                queries: Arc::new(PostgresUserQueryRepository::new(conn.clone())),
                profiles: Arc::new(PostgresProfileRepository::new(conn)),
            }
        }
        Err(e) => {
            tracing::error!(
                "Failed to connect to database: {}. Using in-memory fallback.",
                e
            );
            in_memory(&InMemoryStore::new())
        }
    }
}

#[cfg(not(feature = "postgres"))]
async fn repositories(_config: Option<&DatabaseConfig>) -> AdminRepositories {
    tracing::info!("Running without postgres feature - using in-memory repositories");
    in_memory(&InMemoryStore::new())
}
