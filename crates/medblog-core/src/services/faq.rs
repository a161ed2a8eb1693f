//! FAQ page and community questions.

use std::sync::Arc;

use super::{ANONYMOUS, DisplayNames, QueryView};
use crate::domain::{Faq, MIN_QUESTION_CHARS, Session, UserQuery};
use crate::error::DomainError;
use crate::listing::refine;
use crate::ports::{FaqRepository, ProfileRepository, UserQueryFilter, UserQueryRepository};

/// FAQ page selectors. `category` of `None` means all categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqQuery {
    pub category: Option<String>,
    pub term: String,
}

#[derive(Clone)]
pub struct FaqService {
    faqs: Arc<dyn FaqRepository>,
    queries: Arc<dyn UserQueryRepository>,
    profiles: Arc<dyn ProfileRepository>,
}

impl FaqService {
    pub fn new(
        faqs: Arc<dyn FaqRepository>,
        queries: Arc<dyn UserQueryRepository>,
        profiles: Arc<dyn ProfileRepository>,
    ) -> Self {
        Self {
            faqs,
            queries,
            profiles,
        }
    }

    /// FAQs in display order, narrowed by category and search term.
    pub async fn list_faqs(&self, query: &FaqQuery) -> Result<Vec<Faq>, DomainError> {
        let faqs = self.faqs.list().await?;
        let faqs = match query.category.as_deref() {
            Some(category) => faqs.into_iter().filter(|f| f.in_category(category)).collect(),
            None => faqs,
        };
        Ok(refine(faqs, &query.term))
    }

    /// Answered and approved questions, newest first.
    pub async fn community_questions(&self) -> Result<Vec<QueryView>, DomainError> {
        let queries: Vec<UserQuery> = self
            .queries
            .list(&UserQueryFilter::public())
            .await?
            .into_iter()
            .filter(UserQuery::is_public)
            .collect();

        let names =
            DisplayNames::load(self.profiles.as_ref(), queries.iter().map(|q| q.user_id)).await?;

        Ok(queries
            .into_iter()
            .map(|query| QueryView {
                author_name: names.get_or(query.user_id, ANONYMOUS),
                query,
            })
            .collect())
    }

    /// Submit a question for review.
    pub async fn ask(&self, session: &Session, question: &str) -> Result<UserQuery, DomainError> {
        let question = question.trim();
        if question.chars().count() < MIN_QUESTION_CHARS {
            return Err(DomainError::Validation(format!(
                "Question must be at least {MIN_QUESTION_CHARS} characters long"
            )));
        }

        let query = self
            .queries
            .insert(UserQuery::new(session.user_id, question.to_string()))
            .await?;

        tracing::info!(
            user_id = %session.user_id,
            query_id = %query.id,
            "Question submitted for review"
        );

        Ok(query)
    }
}
