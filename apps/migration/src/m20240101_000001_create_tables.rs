//! Enums and tables for posts, comments, FAQs, user queries and profiles.

use sea_orm_migration::prelude::extension::postgres::Type;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(BlogCategory::Enum)
                    .values([
                        BlogCategory::Medicine,
                        BlogCategory::Surgery,
                        BlogCategory::HealthTips,
                        BlogCategory::Research,
                        BlogCategory::Lifestyle,
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .create_type(
                Type::create()
                    .as_enum(AppRole::Enum)
                    .values([AppRole::Admin, AppRole::User])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(uuid_pk(Profiles::Id))
                    .col(ColumnDef::new(Profiles::UserId).uuid().not_null().unique_key())
                    .col(ColumnDef::new(Profiles::DisplayName).string())
                    .col(ColumnDef::new(Profiles::AvatarUrl).string())
                    .col(ColumnDef::new(Profiles::Bio).text())
                    .col(
                        ColumnDef::new(Profiles::Role)
                            .custom(AppRole::Enum)
                            .default(Expr::cust("'user'")),
                    )
                    .col(timestamp(Profiles::CreatedAt))
                    .col(timestamp(Profiles::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BlogPosts::Table)
                    .if_not_exists()
                    .col(uuid_pk(BlogPosts::Id))
                    .col(ColumnDef::new(BlogPosts::AuthorId).uuid().not_null())
                    .col(ColumnDef::new(BlogPosts::Title).string().not_null())
                    .col(ColumnDef::new(BlogPosts::Slug).string().not_null().unique_key())
                    .col(ColumnDef::new(BlogPosts::Excerpt).text())
                    .col(ColumnDef::new(BlogPosts::Content).text().not_null())
                    .col(ColumnDef::new(BlogPosts::FeaturedImage).string())
                    .col(
                        ColumnDef::new(BlogPosts::Category)
                            .custom(BlogCategory::Enum)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BlogPosts::Tags)
                            .array(ColumnType::Text)
                            .default(Expr::cust("'{}'")),
                    )
                    .col(
                        ColumnDef::new(BlogPosts::Published)
                            .boolean()
                            .default(false),
                    )
                    .col(ColumnDef::new(BlogPosts::Views).integer().default(0))
                    .col(ColumnDef::new(BlogPosts::Likes).integer().default(0))
                    .col(timestamp(BlogPosts::CreatedAt))
                    .col(timestamp(BlogPosts::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Comments::Table)
                    .if_not_exists()
                    .col(uuid_pk(Comments::Id))
                    .col(ColumnDef::new(Comments::PostId).uuid().not_null())
                    .col(ColumnDef::new(Comments::UserId).uuid().not_null())
                    .col(ColumnDef::new(Comments::Content).text().not_null())
                    .col(ColumnDef::new(Comments::Approved).boolean().default(false))
                    .col(timestamp(Comments::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_post_id")
                            .from(Comments::Table, Comments::PostId)
                            .to(BlogPosts::Table, BlogPosts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Faqs::Table)
                    .if_not_exists()
                    .col(uuid_pk(Faqs::Id))
                    .col(ColumnDef::new(Faqs::Question).text().not_null())
                    .col(ColumnDef::new(Faqs::Answer).text().not_null())
                    .col(ColumnDef::new(Faqs::Category).string())
                    .col(ColumnDef::new(Faqs::OrderIndex).integer().default(0))
                    .col(timestamp(Faqs::CreatedAt))
                    .col(timestamp(Faqs::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserQueries::Table)
                    .if_not_exists()
                    .col(uuid_pk(UserQueries::Id))
                    .col(ColumnDef::new(UserQueries::UserId).uuid().not_null())
                    .col(ColumnDef::new(UserQueries::Question).text().not_null())
                    .col(ColumnDef::new(UserQueries::Answer).text())
                    .col(ColumnDef::new(UserQueries::Answered).boolean().default(false))
                    .col(ColumnDef::new(UserQueries::Approved).boolean().default(false))
                    .col(timestamp(UserQueries::CreatedAt))
                    .col(timestamp(UserQueries::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blog_posts_published_created_at")
                    .table(BlogPosts::Table)
                    .col(BlogPosts::Published)
                    .col(BlogPosts::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserQueries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Faqs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Comments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BlogPosts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await?;
        manager
            .drop_type(Type::drop().name(AppRole::Enum).to_owned())
            .await?;
        manager
            .drop_type(Type::drop().name(BlogCategory::Enum).to_owned())
            .await
    }
}

fn uuid_pk(column: impl IntoIden) -> ColumnDef {
    ColumnDef::new(column)
        .uuid()
        .not_null()
        .primary_key()
        .default(Expr::cust("gen_random_uuid()"))
        .to_owned()
}

fn timestamp(column: impl IntoIden) -> ColumnDef {
    ColumnDef::new(column)
        .timestamp_with_time_zone()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

#[derive(DeriveIden)]
enum BlogCategory {
    #[sea_orm(iden = "blog_category")]
    Enum,
    #[sea_orm(iden = "Medicine")]
    Medicine,
    #[sea_orm(iden = "Surgery")]
    Surgery,
    #[sea_orm(iden = "Health Tips")]
    HealthTips,
    #[sea_orm(iden = "Research")]
    Research,
    #[sea_orm(iden = "Lifestyle")]
    Lifestyle,
}

#[derive(DeriveIden)]
enum AppRole {
    #[sea_orm(iden = "app_role")]
    Enum,
    Admin,
    User,
}

#[derive(DeriveIden)]
enum Profiles {
    Table,
    Id,
    UserId,
    DisplayName,
    AvatarUrl,
    Bio,
    Role,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum BlogPosts {
    Table,
    Id,
    AuthorId,
    Title,
    Slug,
    Excerpt,
    Content,
    FeaturedImage,
    Category,
    Tags,
    Published,
    Views,
    Likes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Comments {
    Table,
    Id,
    PostId,
    UserId,
    Content,
    Approved,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Faqs {
    Table,
    Id,
    Question,
    Answer,
    Category,
    OrderIndex,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum UserQueries {
    Table,
    Id,
    UserId,
    Question,
    Answer,
    Answered,
    Approved,
    CreatedAt,
    UpdatedAt,
}
