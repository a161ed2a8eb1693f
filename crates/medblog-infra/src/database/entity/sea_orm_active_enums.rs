//! Postgres enum types shared by the entities.

use sea_orm::entity::prelude::*;

use medblog_core::domain::{Category, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "blog_category")]
pub enum BlogCategory {
    #[sea_orm(string_value = "Medicine")]
    Medicine,
    #[sea_orm(string_value = "Surgery")]
    Surgery,
    #[sea_orm(string_value = "Health Tips")]
    HealthTips,
    #[sea_orm(string_value = "Research")]
    Research,
    #[sea_orm(string_value = "Lifestyle")]
    Lifestyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "app_role")]
pub enum AppRole {
    #[sea_orm(string_value = "admin")]
    Admin,
    #[sea_orm(string_value = "user")]
    User,
}

impl From<BlogCategory> for Category {
    fn from(value: BlogCategory) -> Self {
        match value {
            BlogCategory::Medicine => Category::Medicine,
            BlogCategory::Surgery => Category::Surgery,
            BlogCategory::HealthTips => Category::HealthTips,
            BlogCategory::Research => Category::Research,
            BlogCategory::Lifestyle => Category::Lifestyle,
        }
    }
}

impl From<Category> for BlogCategory {
    fn from(value: Category) -> Self {
        match value {
            Category::Medicine => BlogCategory::Medicine,
            Category::Surgery => BlogCategory::Surgery,
            Category::HealthTips => BlogCategory::HealthTips,
            Category::Research => BlogCategory::Research,
            Category::Lifestyle => BlogCategory::Lifestyle,
        }
    }
}

impl From<AppRole> for Role {
    fn from(value: AppRole) -> Self {
        match value {
            AppRole::Admin => Role::Admin,
            AppRole::User => Role::User,
        }
    }
}

impl From<Role> for AppRole {
    fn from(value: Role) -> Self {
        match value {
            Role::Admin => AppRole::Admin,
            Role::User => AppRole::User,
        }
    }
}
