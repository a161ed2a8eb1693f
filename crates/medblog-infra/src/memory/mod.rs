//! In-memory storage, the fallback when no database is configured.

mod repository;

use std::sync::Arc;

pub use repository::{
    InMemoryCommentRepository, InMemoryFaqRepository, InMemoryPostRepository,
    InMemoryProfileRepository, InMemoryRepository, InMemoryUserQueryRepository, Record,
};

/// One in-memory repository per table, shared behind `Arc`s.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    pub posts: Arc<InMemoryPostRepository>,
    pub comments: Arc<InMemoryCommentRepository>,
    pub faqs: Arc<InMemoryFaqRepository>,
    pub queries: Arc<InMemoryUserQueryRepository>,
    pub profiles: Arc<InMemoryProfileRepository>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}
