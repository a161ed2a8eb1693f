use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A question asked by a signed-in reader.
///
/// Two independent gates: `answered` is set when an admin responds and
/// `approved` when an admin publishes it to the community list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserQuery {
    pub id: Uuid,
    pub user_id: Uuid,
    pub question: String,
    pub answer: Option<String>,
    pub answered: bool,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Minimum length of a submitted question, in characters.
pub const MIN_QUESTION_CHARS: usize = 10;

impl UserQuery {
    pub fn new(user_id: Uuid, question: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            question,
            answer: None,
            answered: false,
            approved: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record an admin's answer. Answering always marks the query answered.
    pub fn answer_with(&mut self, answer: String, approved: bool) {
        self.answer = Some(answer);
        self.answered = true;
        self.approved = approved;
        self.updated_at = Utc::now();
    }

    /// Visible on the public community list.
    pub fn is_public(&self) -> bool {
        self.answered && self.approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_needs_both_gates() {
        let mut query = UserQuery::new(Uuid::new_v4(), "Is coffee bad for my heart?".into());
        assert!(!query.is_public());

        query.approved = true;
        assert!(!query.is_public());

        query.approved = false;
        query.answered = true;
        assert!(!query.is_public());

        query.answer_with("In moderation it is fine.".into(), true);
        assert!(query.is_public());
    }

    #[test]
    fn test_answer_without_approval_stays_private() {
        let mut query = UserQuery::new(Uuid::new_v4(), "How much water per day?".into());
        query.answer_with("About two litres.".into(), false);
        assert!(query.answered);
        assert!(!query.is_public());
    }
}
