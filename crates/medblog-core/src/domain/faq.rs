use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::text::SearchTerm;

/// FAQ entity - an admin-curated question and answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
    /// Display sort key, ascending.
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Editable fields of a FAQ.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaqDraft {
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
    pub order_index: i32,
}

impl Faq {
    pub fn new(draft: FaqDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            question: draft.question,
            answer: draft.answer,
            category: draft.category,
            order_index: draft.order_index,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, draft: FaqDraft) {
        self.question = draft.question;
        self.answer = draft.answer;
        self.category = draft.category;
        self.order_index = draft.order_index;
        self.updated_at = Utc::now();
    }

    pub fn matches(&self, term: &SearchTerm) -> bool {
        term.found_in(&self.question) || term.found_in(&self.answer)
    }

    pub fn in_category(&self, category: &str) -> bool {
        self.category.as_deref() == Some(category)
    }
}
