//! PostgreSQL repository implementations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use medblog_core::domain::{Comment, Faq, FaqDraft, Post, PostDraft, Profile, UserQuery};
use medblog_core::error::RepoError;
use medblog_core::ports::{
    CommentFilter, CommentRepository, FaqRepository, PostFilter, PostOrder, PostRepository,
    ProfileRepository, UserQueryFilter, UserQueryRepository,
};

use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::faq::{self, Entity as FaqEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::profile::{self, Entity as ProfileEntity};
use super::entity::sea_orm_active_enums::BlogCategory;
use super::entity::user_query::{self, Entity as UserQueryEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL blog post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL comment repository.
pub type PostgresCommentRepository = PostgresBaseRepository<CommentEntity>;

/// PostgreSQL FAQ repository.
pub type PostgresFaqRepository = PostgresBaseRepository<FaqEntity>;

/// PostgreSQL user query repository.
pub type PostgresUserQueryRepository = PostgresBaseRepository<UserQueryEntity>;

/// PostgreSQL profile repository.
pub type PostgresProfileRepository = PostgresBaseRepository<ProfileEntity>;

/// Match a nullable boolean column. NULL counts as `false`.
fn flag<C: ColumnTrait>(column: C, value: bool) -> Condition {
    if value {
        Condition::all().add(column.eq(true))
    } else {
        Condition::any().add(column.eq(false)).add(column.is_null())
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list(&self, filter: &PostFilter) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(?filter, "Listing posts");

        let mut select = PostEntity::find();
        if let Some(published) = filter.published {
            select = select.filter(flag(post::Column::Published, published));
        }
        if let Some(category) = filter.category {
            select = select.filter(post::Column::Category.eq(BlogCategory::from(category)));
        }
        if let Some(since) = filter.created_since {
            select = select.filter(post::Column::CreatedAt.gte(since.fixed_offset()));
        }

        select = match filter.order {
            PostOrder::Newest => select,
            PostOrder::MostViewed => select.order_by_desc(post::Column::Views),
            PostOrder::MostLiked => select.order_by_desc(post::Column::Likes),
        };
        select = select.order_by_desc(post::Column::CreatedAt);

        if let Some(limit) = filter.limit {
            select = select.limit(limit);
        }

        let result = select.all(self.db.as_ref()).await.map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        tracing::debug!(slug, "Finding post by slug");

        let result = PostEntity::find()
            .filter(post::Column::Slug.eq(slug))
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn update(&self, id: Uuid, draft: PostDraft) -> Result<Post, RepoError> {
        let model = PostEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?
            .ok_or(RepoError::NotFound)?;

        let mut active = model.into_active_model();
        active.title = Set(draft.title);
        active.excerpt = Set(Some(draft.excerpt));
        active.content = Set(draft.content);
        active.featured_image = Set(draft.featured_image);
        active.category = Set(draft.category.into());
        active.tags = Set(Some(draft.tags));
        active.published = Set(Some(draft.published));
        active.updated_at = Set(Utc::now().fixed_offset());

        let updated = active.update(self.db.as_ref()).await.map_err(map_db_err)?;

        Ok(updated.into())
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn list(&self, filter: &CommentFilter) -> Result<Vec<Comment>, RepoError> {
        let mut select = CommentEntity::find();
        if let Some(post_id) = filter.post_id {
            select = select.filter(comment::Column::PostId.eq(post_id));
        }
        if let Some(approved) = filter.approved {
            select = select.filter(flag(comment::Column::Approved, approved));
        }

        let result = select
            .order_by_desc(comment::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn set_approved(&self, id: Uuid, approved: bool) -> Result<Comment, RepoError> {
        let model = CommentEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?
            .ok_or(RepoError::NotFound)?;

        let mut active = model.into_active_model();
        active.approved = Set(Some(approved));

        let updated = active.update(self.db.as_ref()).await.map_err(map_db_err)?;

        Ok(updated.into())
    }
}

#[async_trait]
impl FaqRepository for PostgresFaqRepository {
    async fn list(&self) -> Result<Vec<Faq>, RepoError> {
        let result = FaqEntity::find()
            .order_by_asc(faq::Column::OrderIndex)
            .order_by_asc(faq::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: Uuid, draft: FaqDraft) -> Result<Faq, RepoError> {
        let model = FaqEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?
            .ok_or(RepoError::NotFound)?;

        let mut active = model.into_active_model();
        active.question = Set(draft.question);
        active.answer = Set(draft.answer);
        active.category = Set(draft.category);
        active.order_index = Set(Some(draft.order_index));
        active.updated_at = Set(Utc::now().fixed_offset());

        let updated = active.update(self.db.as_ref()).await.map_err(map_db_err)?;

        Ok(updated.into())
    }
}

#[async_trait]
impl UserQueryRepository for PostgresUserQueryRepository {
    async fn list(&self, filter: &UserQueryFilter) -> Result<Vec<UserQuery>, RepoError> {
        let mut select = UserQueryEntity::find();
        if let Some(answered) = filter.answered {
            select = select.filter(flag(user_query::Column::Answered, answered));
        }
        if let Some(approved) = filter.approved {
            select = select.filter(flag(user_query::Column::Approved, approved));
        }

        let result = select
            .order_by_desc(user_query::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn answer(
        &self,
        id: Uuid,
        answer: String,
        approved: bool,
    ) -> Result<UserQuery, RepoError> {
        let model = UserQueryEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?
            .ok_or(RepoError::NotFound)?;

        let mut active = model.into_active_model();
        active.answer = Set(Some(answer));
        active.answered = Set(Some(true));
        active.approved = Set(Some(approved));
        active.updated_at = Set(Utc::now().fixed_offset());

        let updated = active.update(self.db.as_ref()).await.map_err(map_db_err)?;

        Ok(updated.into())
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Profile>, RepoError> {
        tracing::debug!(%user_id, "Finding profile by user id");

        let result = ProfileEntity::find()
            .filter(profile::Column::UserId.eq(user_id))
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_user_ids(&self, user_ids: &[Uuid]) -> Result<Vec<Profile>, RepoError> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let result = ProfileEntity::find()
            .filter(profile::Column::UserId.is_in(user_ids.iter().copied()))
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
