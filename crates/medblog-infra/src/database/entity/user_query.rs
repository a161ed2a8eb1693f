//! User query entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_queries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub question: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub answer: Option<String>,
    pub answered: Option<bool>,
    pub approved: Option<bool>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::UserId",
        to = "super::profile::Column::UserId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Asker,
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Asker.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for medblog_core::domain::UserQuery {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            question: model.question,
            answer: model.answer,
            answered: model.answered.unwrap_or(false),
            approved: model.approved.unwrap_or(false),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<medblog_core::domain::UserQuery> for ActiveModel {
    fn from(query: medblog_core::domain::UserQuery) -> Self {
        Self {
            id: Set(query.id),
            user_id: Set(query.user_id),
            question: Set(query.question),
            answer: Set(query.answer),
            answered: Set(Some(query.answered)),
            approved: Set(Some(query.approved)),
            created_at: Set(query.created_at.into()),
            updated_at: Set(query.updated_at.into()),
        }
    }
}
