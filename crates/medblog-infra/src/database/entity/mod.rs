//! SeaORM entities mirroring the hosted backend's tables.

pub mod comment;
pub mod faq;
pub mod post;
pub mod profile;
pub mod sea_orm_active_enums;
pub mod user_query;
