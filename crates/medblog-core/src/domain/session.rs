use uuid::Uuid;

use super::Role;
use crate::error::DomainError;

/// The caller of an operation: who they are and what they may do.
///
/// Built once per request from the bearer token and the caller's profile,
/// then passed explicitly to every operation that needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub user_id: Uuid,
    pub role: Role,
}

impl Session {
    pub fn new(user_id: Uuid, role: Role) -> Self {
        Self { user_id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn require_admin(&self) -> Result<(), DomainError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(DomainError::Forbidden)
        }
    }
}
