//! FAQ entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "faqs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub question: String,
    #[sea_orm(column_type = "Text")]
    pub answer: String,
    pub category: Option<String>,
    pub order_index: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for medblog_core::domain::Faq {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            question: model.question,
            answer: model.answer,
            category: model.category,
            order_index: model.order_index.unwrap_or(0),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<medblog_core::domain::Faq> for ActiveModel {
    fn from(faq: medblog_core::domain::Faq) -> Self {
        Self {
            id: Set(faq.id),
            question: Set(faq.question),
            answer: Set(faq.answer),
            category: Set(faq.category),
            order_index: Set(Some(faq.order_index)),
            created_at: Set(faq.created_at.into()),
            updated_at: Set(faq.updated_at.into()),
        }
    }
}
