//! Services - assemble views from repository rows and carry out user actions.
//!
//! Each operation fetches what it needs through the ports, joins related rows
//! by foreign key in memory and returns a view struct ready to serialize.

mod admin;
mod blog;
mod faq;
mod views;

use std::collections::HashMap;

use uuid::Uuid;

use crate::error::{DomainError, RepoError};
use crate::ports::ProfileRepository;

pub use admin::{AdminService, AdminRepositories};
pub use blog::{
    BlogService, BlogSettings, POPULAR_LIMIT, RECENT_LIMIT, RECENT_WINDOW_DAYS, TRENDING_LIMIT,
    TRENDING_WINDOW_DAYS,
};
pub use faq::{FaqQuery, FaqService};
pub use views::{
    CategoryStat, CommentView, Dashboard, HotTopics, PostCard, PostDetail, QueryView, ShareLinks,
};

/// Fallback shown for commenters and askers without a display name.
pub const ANONYMOUS: &str = "Anonymous";

/// Display names joined from profiles, keyed by auth user id.
#[derive(Debug, Default)]
pub(crate) struct DisplayNames(HashMap<Uuid, String>);

impl DisplayNames {
    pub(crate) async fn load(
        profiles: &dyn ProfileRepository,
        user_ids: impl IntoIterator<Item = Uuid>,
    ) -> Result<Self, RepoError> {
        let mut ids: Vec<Uuid> = user_ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        if ids.is_empty() {
            return Ok(Self::default());
        }

        let names = profiles
            .find_by_user_ids(&ids)
            .await?
            .into_iter()
            .filter_map(|profile| {
                profile
                    .display_name
                    .filter(|name| !name.trim().is_empty())
                    .map(|name| (profile.user_id, name))
            })
            .collect();

        Ok(Self(names))
    }

    pub(crate) fn get_or(&self, user_id: Uuid, fallback: &str) -> String {
        self.0
            .get(&user_id)
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Map a repository `NotFound` onto the entity that was being looked up.
pub(crate) trait RepoResultExt<T> {
    fn or_missing(self, entity_type: &'static str, key: impl ToString) -> Result<T, DomainError>;
}

impl<T> RepoResultExt<T> for Result<T, RepoError> {
    fn or_missing(self, entity_type: &'static str, key: impl ToString) -> Result<T, DomainError> {
        self.map_err(|err| match err {
            RepoError::NotFound => DomainError::not_found(entity_type, key),
            other => other.into(),
        })
    }
}

/// Trimmed text, or a validation error naming the field.
pub(crate) fn required(field: &str, value: &str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}
