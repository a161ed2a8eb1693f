use std::sync::Arc;

use actix_web::{App, http::StatusCode, test, web};
use chrono::{TimeDelta, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Value, json};
use uuid::Uuid;

use medblog_core::domain::{Category, Post, PostDraft, Profile, Role};
use medblog_core::ports::BaseRepository;
use medblog_core::services::BlogSettings;
use medblog_infra::{InMemoryStore, JwtConfig, JwtTokenService};

use super::{configure_routes, json_config, path_config, query_config};
use crate::state::{AppState, in_memory};

const SECRET: &str = "route-test-secret";

macro_rules! app {
    ($store:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(state($store)))
                .app_data(json_config())
                .app_data(path_config())
                .app_data(query_config())
                .configure(configure_routes),
        )
        .await
    };
}

fn state(store: &InMemoryStore) -> AppState {
    let tokens = Arc::new(JwtTokenService::new(JwtConfig {
        secret: SECRET.to_string(),
        audience: "authenticated".to_string(),
    }));
    AppState::from_parts(in_memory(store), tokens, BlogSettings::default())
}

fn bearer(user_id: Uuid) -> (&'static str, String) {
    let claims = json!({
        "sub": user_id.to_string(),
        "aud": "authenticated",
        "exp": (Utc::now() + TimeDelta::hours(1)).timestamp(),
    });
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();
    ("Authorization", format!("Bearer {token}"))
}

async fn user_with_role(store: &InMemoryStore, role: Role) -> Uuid {
    let user_id = Uuid::new_v4();
    store
        .profiles
        .insert(Profile::new(user_id, Some("Test User".to_string()), role))
        .await
        .unwrap();
    user_id
}

async fn seed_post(store: &InMemoryStore, title: &str, category: Category) -> Post {
    let post = Post::new(
        Uuid::new_v4(),
        PostDraft {
            title: title.to_string(),
            category,
            published: true,
            ..Default::default()
        },
    );
    store.posts.insert(post).await.unwrap()
}

#[actix_web::test]
async fn test_health() {
    let store = InMemoryStore::new();
    let app = app!(&store);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn test_list_posts_with_filters() {
    let store = InMemoryStore::new();
    seed_post(&store, "Healthy Eating", Category::HealthTips).await;
    seed_post(&store, "Hip Surgery", Category::Surgery).await;
    let app = app!(&store);

    let req = test::TestRequest::get()
        .uri("/api/posts?category=Health%20Tips&sort=views")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], true);
    let posts = body["data"].as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["slug"], "healthy-eating");
    assert_eq!(posts[0]["category"], "Health Tips");
    assert_eq!(posts[0]["author_name"], "Dr. Awais Raza");
}

#[actix_web::test]
async fn test_unknown_sort_is_bad_request() {
    let store = InMemoryStore::new();
    let app = app!(&store);

    let req = test::TestRequest::get()
        .uri("/api/posts?sort=title")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "Error loading posts");
}

#[actix_web::test]
async fn test_read_post_and_missing_post() {
    let store = InMemoryStore::new();
    seed_post(&store, "Migraine Triggers", Category::Medicine).await;
    let app = app!(&store);

    let req = test::TestRequest::get()
        .uri("/api/posts/migraine-triggers")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["title"], "Migraine Triggers");
    assert_eq!(
        body["data"]["share"]["url"],
        "http://localhost:8080/blog/migraine-triggers"
    );
    assert!(body["data"]["comments"].as_array().unwrap().is_empty());

    let req = test::TestRequest::get().uri("/api/posts/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_category_routes() {
    let store = InMemoryStore::new();
    seed_post(&store, "Sleep Tips", Category::HealthTips).await;
    let app = app!(&store);

    let req = test::TestRequest::get().uri("/api/categories").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 5);

    let req = test::TestRequest::get()
        .uri("/api/categories/Health%20Tips/posts")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let req = test::TestRequest::get()
        .uri("/api/categories/Oncology/posts")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_question_requires_session() {
    let store = InMemoryStore::new();
    let app = app!(&store);

    let req = test::TestRequest::post()
        .uri("/api/questions")
        .set_json(json!({ "question": "Is a daily aspirin safe?" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_question_submitted() {
    let store = InMemoryStore::new();
    let reader = user_with_role(&store, Role::User).await;
    let app = app!(&store);

    let req = test::TestRequest::post()
        .uri("/api/questions")
        .insert_header(bearer(reader))
        .set_json(json!({ "question": "Is a daily aspirin safe?" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["answered"], false);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("Question submitted!")
    );

    let req = test::TestRequest::post()
        .uri("/api/questions")
        .insert_header(bearer(reader))
        .set_json(json!({ "question": "Why?" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "Error submitting question");
}

#[actix_web::test]
async fn test_admin_routes_check_role() {
    let store = InMemoryStore::new();
    let reader = user_with_role(&store, Role::User).await;
    let admin = user_with_role(&store, Role::Admin).await;
    let app = app!(&store);

    let req = test::TestRequest::get()
        .uri("/api/admin/dashboard")
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let req = test::TestRequest::get()
        .uri("/api/admin/dashboard")
        .insert_header(bearer(reader))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::FORBIDDEN
    );

    let req = test::TestRequest::get()
        .uri("/api/admin/dashboard")
        .insert_header(bearer(admin))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_admin_creates_post_and_rejects_duplicate() {
    let store = InMemoryStore::new();
    let admin = user_with_role(&store, Role::Admin).await;
    let app = app!(&store);

    let form = json!({
        "title": "Managing Diabetes",
        "excerpt": "Day to day",
        "content": "Body",
        "category": "Medicine",
        "tags": "diabetes, diet, ",
        "published": true,
    });

    let req = test::TestRequest::post()
        .uri("/api/admin/posts")
        .insert_header(bearer(admin))
        .set_json(&form)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Post created successfully");
    assert_eq!(body["data"][0]["slug"], "managing-diabetes");
    assert_eq!(body["data"][0]["tags"], json!(["diabetes", "diet"]));

    let req = test::TestRequest::post()
        .uri("/api/admin/posts")
        .insert_header(bearer(admin))
        .set_json(&form)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "Error creating post");
}

#[actix_web::test]
async fn test_admin_answers_query() {
    let store = InMemoryStore::new();
    let reader = user_with_role(&store, Role::User).await;
    let admin = user_with_role(&store, Role::Admin).await;
    let app = app!(&store);

    let req = test::TestRequest::post()
        .uri("/api/questions")
        .insert_header(bearer(reader))
        .set_json(json!({ "question": "How often should I get a checkup?" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/api/admin/queries/{id}/answer"))
        .insert_header(bearer(admin))
        .set_json(json!({ "answer": "Once a year.", "approved": true }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Query answered successfully");

    let req = test::TestRequest::get()
        .uri("/api/community-questions")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let questions = body["data"].as_array().unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0]["answer"], "Once a year.");
    assert_eq!(questions[0]["author_name"], "Test User");
}

#[actix_web::test]
async fn test_deleting_missing_faq_is_not_found() {
    let store = InMemoryStore::new();
    let admin = user_with_role(&store, Role::Admin).await;
    let app = app!(&store);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/admin/faqs/{}", Uuid::new_v4()))
        .insert_header(bearer(admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "Error deleting FAQ");
}

#[actix_web::test]
async fn test_non_admin_post_form_is_forbidden_before_validation() {
    let store = InMemoryStore::new();
    let reader = user_with_role(&store, Role::User).await;
    let app = app!(&store);

    let form = json!({ "title": "Hello", "category": "Oncology" });

    let req = test::TestRequest::post()
        .uri("/api/admin/posts")
        .insert_header(bearer(reader))
        .set_json(&form)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "Error creating post");

    let req = test::TestRequest::put()
        .uri(&format!("/api/admin/posts/{}", Uuid::new_v4()))
        .insert_header(bearer(reader))
        .set_json(&form)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_malformed_id_is_problem_json() {
    let store = InMemoryStore::new();
    let admin = user_with_role(&store, Role::Admin).await;
    let app = app!(&store);

    let req = test::TestRequest::delete()
        .uri("/api/admin/faqs/not-a-uuid")
        .insert_header(bearer(admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 400);
    assert!(body["detail"].as_str().unwrap().contains("UUID parsing failed"));
}
