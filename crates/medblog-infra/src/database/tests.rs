use std::sync::Arc;

use chrono::{TimeDelta, Utc};
use sea_orm::{
    DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult, Statement, Value,
};
use uuid::Uuid;

use medblog_core::domain::{Category, Faq, Post, PostDraft, Role};
use medblog_core::error::RepoError;
use medblog_core::ports::{
    BaseRepository, CommentFilter, CommentRepository, FaqRepository, PostFilter, PostOrder,
    PostRepository, ProfileRepository,
};

use crate::database::entity::sea_orm_active_enums::{AppRole, BlogCategory};
use crate::database::entity::{comment, faq, post, profile};
use crate::database::postgres_repo::{
    PostgresCommentRepository, PostgresFaqRepository, PostgresPostRepository,
    PostgresProfileRepository,
};

fn post_model(title: &str, slug: &str) -> post::Model {
    let now = Utc::now();
    post::Model {
        id: Uuid::new_v4(),
        author_id: Uuid::new_v4(),
        title: title.to_owned(),
        slug: slug.to_owned(),
        excerpt: None,
        content: "Content".to_owned(),
        featured_image: None,
        category: BlogCategory::HealthTips,
        tags: None,
        published: Some(true),
        views: None,
        likes: Some(3),
        created_at: now.into(),
        updated_at: now.into(),
    }
}

/// Drain the statements a mock connection received, with identifier quotes
/// and the `table.` qualifier stripped so assertions stay readable.
fn executed(db: Arc<DatabaseConnection>, table: &str) -> Vec<(String, Vec<Value>)> {
    let qualifier = format!("{table}.");
    Arc::into_inner(db)
        .unwrap()
        .into_transaction_log()
        .iter()
        .flat_map(|txn| txn.statements().to_vec())
        .map(|Statement { sql, values, .. }| {
            let sql = sql.replace('"', "").replace(&qualifier, "");
            (sql, values.map(|v| v.0).unwrap_or_default())
        })
        .collect()
}

#[tokio::test]
async fn test_find_post_by_id() {
    let model = post_model("Test Post", "test-post");
    let post_id = model.id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result = BaseRepository::<Post, Uuid>::find_by_id(&repo, post_id)
        .await
        .unwrap();

    let post = result.unwrap();
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, post_id);
    assert_eq!(post.category, Category::HealthTips);
}

#[tokio::test]
async fn test_null_columns_take_defaults() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![post_model("Sparse", "sparse")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let post = repo.find_by_slug("sparse").await.unwrap().unwrap();
    assert_eq!(post.excerpt, "");
    assert!(post.tags.is_empty());
    assert_eq!(post.views, 0);
    assert_eq!(post.likes, 3);
}

#[tokio::test]
async fn test_list_posts_returns_rows_in_order() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            post_model("Newer", "newer"),
            post_model("Older", "older"),
        ]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let posts = repo
        .list(&PostFilter::published().in_category(Some(Category::HealthTips)))
        .await
        .unwrap();
    let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Newer", "Older"]);
}

#[tokio::test]
async fn test_find_by_slug_missing() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert!(repo.find_by_slug("nope").await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_missing_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let err = repo
        .update(Uuid::new_v4(), PostDraft::default())
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound));
}

#[tokio::test]
async fn test_delete_nothing_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let err = BaseRepository::<Post, Uuid>::delete(&repo, Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound));
}

#[tokio::test]
async fn test_delete_existing_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert!(
        BaseRepository::<Post, Uuid>::delete(&repo, Uuid::new_v4())
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_list_faqs() {
    let now = Utc::now();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![faq::Model {
            id: Uuid::new_v4(),
            question: "Is it contagious?".to_owned(),
            answer: "No.".to_owned(),
            category: Some("General".to_owned()),
            order_index: None,
            created_at: now.into(),
            updated_at: now.into(),
        }]])
        .into_connection();

    let repo = PostgresFaqRepository::new(db);

    let faqs: Vec<Faq> = repo.list().await.unwrap();
    assert_eq!(faqs.len(), 1);
    assert_eq!(faqs[0].order_index, 0);
    assert!(faqs[0].in_category("General"));
}

#[tokio::test]
async fn test_profile_without_role_is_user() {
    let now = Utc::now();
    let user_id = Uuid::new_v4();
    let row = |role| profile::Model {
        id: Uuid::new_v4(),
        user_id,
        display_name: Some("Dr. Lee".to_owned()),
        avatar_url: None,
        bio: None,
        role,
        created_at: now.into(),
        updated_at: now.into(),
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row(None)], vec![row(Some(AppRole::Admin))]])
        .into_connection();

    let repo = PostgresProfileRepository::new(db);

    let plain = repo.find_by_user_id(user_id).await.unwrap().unwrap();
    assert_eq!(plain.role, Role::User);

    let admin = repo.find_by_user_id(user_id).await.unwrap().unwrap();
    assert_eq!(admin.role, Role::Admin);
}

#[tokio::test]
async fn test_find_by_no_user_ids_skips_the_query() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let repo = PostgresProfileRepository::new(db);

    assert!(repo.find_by_user_ids(&[]).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_posts_builds_filter_order_and_limit() {
    let db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<post::Model>::new()])
            .into_connection(),
    );

    {
        let repo = PostgresPostRepository::new(db.clone());
        let filter = PostFilter::published()
            .in_category(Some(Category::HealthTips))
            .since(Utc::now() - TimeDelta::days(7))
            .ordered_by(PostOrder::MostViewed)
            .limit(3);
        repo.list(&filter).await.unwrap();
    }

    let log = executed(db, "blog_posts");
    assert_eq!(log.len(), 1);
    let (sql, values) = &log[0];
    assert!(
        sql.contains(
            "WHERE published = $1 AND category = CAST($2 AS blog_category) \
             AND created_at >= $3 ORDER BY views DESC, created_at DESC LIMIT $4"
        ),
        "{sql}"
    );
    assert_eq!(values.len(), 4);
    assert_eq!(values[0], Value::from(true));
    assert_eq!(values[1], Value::from("Health Tips"));
    assert_eq!(values[3], Value::from(3u64));
}

#[tokio::test]
async fn test_list_newest_posts_orders_by_created_at_only() {
    let db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<post::Model>::new()])
            .into_connection(),
    );

    {
        let repo = PostgresPostRepository::new(db.clone());
        repo.list(&PostFilter::all()).await.unwrap();
    }

    let log = executed(db, "blog_posts");
    let (sql, values) = &log[0];
    assert!(!sql.contains("WHERE"), "{sql}");
    assert!(!sql.contains("LIMIT"), "{sql}");
    assert!(sql.ends_with("ORDER BY created_at DESC"), "{sql}");
    assert!(values.is_empty());
}

#[tokio::test]
async fn test_unpublished_filter_includes_null_column() {
    let db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<post::Model>::new()])
            .into_connection(),
    );

    {
        let repo = PostgresPostRepository::new(db.clone());
        let filter = PostFilter {
            published: Some(false),
            ..PostFilter::all()
        };
        repo.list(&filter).await.unwrap();
    }

    let log = executed(db, "blog_posts");
    let (sql, values) = &log[0];
    assert!(sql.contains("published = $1 OR published IS NULL"), "{sql}");
    assert_eq!(values[0], Value::from(false));
}

#[tokio::test]
async fn test_pending_comments_filter_includes_null_approval() {
    let post_id = Uuid::new_v4();
    let db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<comment::Model>::new()])
            .into_connection(),
    );

    {
        let repo = PostgresCommentRepository::new(db.clone());
        let filter = CommentFilter {
            post_id: Some(post_id),
            approved: Some(false),
        };
        repo.list(&filter).await.unwrap();
    }

    let log = executed(db, "comments");
    let (sql, values) = &log[0];
    assert!(sql.contains("post_id = $1 AND"), "{sql}");
    assert!(sql.contains("approved = $2 OR approved IS NULL"), "{sql}");
    assert!(sql.ends_with("ORDER BY created_at DESC"), "{sql}");
    assert_eq!(values[0], Value::from(post_id));
    assert_eq!(values[1], Value::from(false));
}
