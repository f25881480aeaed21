pub mod ai;
pub mod categories;
pub mod health;
pub mod progress;
pub mod saved_skills;
pub mod skills;
pub mod users;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Users (the path parameter must share one name across /api/users/:id/...)
        .route("/api/users", post(users::handle_create_user))
        .route("/api/users/:id", get(users::handle_get_user))
        .route(
            "/api/users/:id/saved-skills",
            get(saved_skills::handle_list_saved_skills),
        )
        .route(
            "/api/users/:id/saved-skills/:skill_id",
            delete(saved_skills::handle_unsave_skill),
        )
        .route(
            "/api/users/:id/progress",
            get(progress::handle_list_progress),
        )
        // Catalogue
        .route(
            "/api/categories",
            get(categories::handle_list_categories).post(categories::handle_create_category),
        )
        .route("/api/categories/:id", get(categories::handle_get_category))
        .route(
            "/api/skills",
            get(skills::handle_list_skills).post(skills::handle_create_skill),
        )
        .route("/api/skills/featured", get(skills::handle_featured_skill))
        .route("/api/skills/:id", get(skills::handle_get_skill))
        // Bookmarks and progress
        .route("/api/saved-skills", post(saved_skills::handle_save_skill))
        .route("/api/progress", post(progress::handle_upsert_progress))
        // Language model
        .route("/api/translate", post(ai::handle_translate))
        .route("/api/recommend", post(ai::handle_recommend))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::assistant::testing::StubAssistant;
    use crate::assistant::SkillAssistant;
    use crate::config::Config;
    use crate::store::{ReferencePolicy, Store};

    fn app_with(store: Store, assistant: Arc<dyn SkillAssistant>) -> Router {
        build_router(AppState {
            store: store.into_shared(),
            assistant,
            config: Config::default(),
        })
    }

    fn app() -> Router {
        app_with(Store::new(), Arc::new(StubAssistant::recommending(&[2, 1])))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
        send(app, Method::GET, uri, None).await
    }

    async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
        send(app, Method::POST, uri, Some(body)).await
    }

    fn skill_body(title: &str, category_id: u32, tags: &[&str]) -> Value {
        json!({
            "title": title,
            "description": format!("{title} in ninety seconds"),
            "videoUrl": "https://cdn.example.com/clip.mp4",
            "duration": 90,
            "categoryId": category_id,
            "userId": 1,
            "tags": tags,
        })
    }

    fn signup_body(username: &str) -> Value {
        json!({
            "username": username,
            "password": "pa55word",
            "email": format!("{username}@example.com"),
            "name": "Test User",
        })
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json(&app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["categories"], 6);
        assert_eq!(body["skills"], 0);
    }

    #[tokio::test]
    async fn test_user_signup_and_read_strips_password() {
        let app = app();
        let (status, created) = post_json(&app, "/api/users", signup_body("maria")).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"], 1);
        assert_eq!(created["password"], "pa55word");

        let (status, fetched) = get_json(&app, "/api/users/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["username"], "maria");
        assert!(fetched.get("password").is_none());
    }

    #[tokio::test]
    async fn test_user_errors() {
        let app = app();
        assert_eq!(get_json(&app, "/api/users/abc").await.0, StatusCode::BAD_REQUEST);
        assert_eq!(get_json(&app, "/api/users/5").await.0, StatusCode::NOT_FOUND);

        let (status, body) = post_json(&app, "/api/users", json!({"username": "x"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_non_json_body_is_bad_request() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/skills")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_categories() {
        let app = app();
        let (status, list) = get_json(&app, "/api/categories").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list.as_array().unwrap().len(), 6);

        let (_, design) = get_json(&app, "/api/categories/4").await;
        assert_eq!(design["name"], "Design");
        assert_eq!(design["color"], "#8B5CF6");

        assert_eq!(get_json(&app, "/api/categories/x").await.0, StatusCode::BAD_REQUEST);
        assert_eq!(get_json(&app, "/api/categories/40").await.0, StatusCode::NOT_FOUND);

        let (status, music) = post_json(
            &app,
            "/api/categories",
            json!({"name": "Music", "icon": "music", "color": "#111111"}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(music["id"], 7);
    }

    #[tokio::test]
    async fn test_skill_lifecycle() {
        let app = app();
        let (status, created) = post_json(
            &app,
            "/api/skills",
            skill_body("Quick Mobile Photography Tips", 4, &["photography", "mobile"]),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"], 1);
        assert_eq!(created["views"], 0);
        assert_eq!(created["categoryId"], 4);
        assert_eq!(created["languages"], json!({}));

        for expected in 1..=3 {
            let (status, skill) = get_json(&app, "/api/skills/1").await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(skill["views"], expected);
        }

        let (status, featured) = get_json(&app, "/api/skills/featured").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(featured["id"], 1);
        assert_eq!(featured["views"], 3);
    }

    #[tokio::test]
    async fn test_skill_errors() {
        let app = app();
        assert_eq!(get_json(&app, "/api/skills/featured").await.0, StatusCode::NOT_FOUND);
        assert_eq!(get_json(&app, "/api/skills/nope").await.0, StatusCode::BAD_REQUEST);
        assert_eq!(get_json(&app, "/api/skills/9").await.0, StatusCode::NOT_FOUND);

        let mut body = skill_body("Zero", 1, &[]);
        body["duration"] = json!(0);
        assert_eq!(post_json(&app, "/api/skills", body).await.0, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_skill_listing_filters() {
        let app = app();
        post_json(&app, "/api/skills", skill_body("Knife Skills", 3, &["cooking"])).await;
        post_json(&app, "/api/skills", skill_body("Phone Photos", 4, &["photography"])).await;
        post_json(&app, "/api/skills", skill_body("Sourdough", 3, &["baking"])).await;
        get_json(&app, "/api/skills/3").await;

        let ids = |body: Value| -> Vec<u64> {
            body.as_array()
                .unwrap()
                .iter()
                .map(|s| s["id"].as_u64().unwrap())
                .collect()
        };

        assert_eq!(ids(get_json(&app, "/api/skills").await.1), vec![1, 2, 3]);
        assert_eq!(ids(get_json(&app, "/api/skills?categoryId=3").await.1), vec![1, 3]);
        assert_eq!(ids(get_json(&app, "/api/skills?q=photo").await.1), vec![2]);
        assert_eq!(ids(get_json(&app, "/api/skills?q=photo&categoryId=3").await.1), vec![2]);
        assert_eq!(ids(get_json(&app, "/api/skills?trending=true").await.1), vec![3, 1, 2]);
        assert_eq!(ids(get_json(&app, "/api/skills?trending=true&limit=1").await.1), vec![3]);
        assert_eq!(
            get_json(&app, "/api/skills?categoryId=abc").await.0,
            StatusCode::OK
        );
        assert_eq!(ids(get_json(&app, "/api/skills?categoryId=0").await.1), vec![1, 2, 3]);
        assert_eq!(
            ids(get_json(&app, "/api/skills?categoryId=0&trending=true&limit=1").await.1),
            vec![3]
        );
    }

    #[tokio::test]
    async fn test_bookmarks() {
        let app = app();
        post_json(&app, "/api/skills", skill_body("Knife Skills", 3, &[])).await;
        post_json(&app, "/api/skills", skill_body("Sourdough", 3, &[])).await;

        let (status, saved) =
            post_json(&app, "/api/saved-skills", json!({"userId": 1, "skillId": 2})).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(saved["skillId"], 2);
        assert!(saved.get("savedAt").is_some());

        let (_, list) = get_json(&app, "/api/users/1/saved-skills").await;
        assert_eq!(list[0]["title"], "Sourdough");

        let (status, body) = send(&app, Method::DELETE, "/api/users/1/saved-skills/2", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);
        let (_, list) = get_json(&app, "/api/users/1/saved-skills").await;
        assert_eq!(list, json!([]));

        // Deleting again is still a success.
        let (status, _) = send(&app, Method::DELETE, "/api/users/1/saved-skills/2", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, Method::DELETE, "/api/users/1/saved-skills/x", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(get_json(&app, "/api/users/x/saved-skills").await.0, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_progress_upsert_over_http() {
        let app = app();
        let (status, first) =
            post_json(&app, "/api/progress", json!({"userId": 1, "skillId": 1})).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(first["completed"], false);

        let (status, second) = post_json(
            &app,
            "/api/progress",
            json!({"userId": 1, "skillId": 1, "completed": true}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(second["id"], first["id"]);
        assert_eq!(second["completed"], true);

        let (_, list) = get_json(&app, "/api/users/1/progress").await;
        assert_eq!(list.as_array().unwrap().len(), 1);
        assert_eq!(get_json(&app, "/api/users/-1/progress").await.0, StatusCode::BAD_REQUEST);
        assert_eq!(
            post_json(&app, "/api/progress", json!({"userId": 1})).await.0,
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_strict_policy_rejects_dangling_skill() {
        let app = app_with(
            Store::new().with_policy(ReferencePolicy::Strict),
            Arc::new(StubAssistant::failing()),
        );
        let (status, body) = post_json(&app, "/api/skills", skill_body("Orphan", 3, &[])).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "user 1 does not exist");

        post_json(&app, "/api/users", signup_body("maria")).await;
        let (status, _) = post_json(&app, "/api/skills", skill_body("Adopted", 3, &[])).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_strict_policy_rejects_dangling_progress() {
        let app = app_with(
            Store::new().with_policy(ReferencePolicy::Strict),
            Arc::new(StubAssistant::failing()),
        );
        let (status, body) = post_json(&app, "/api/progress", json!({"userId": 1, "skillId": 1})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "user 1 does not exist");

        let (status, body) = post_json(&app, "/api/saved-skills", json!({"userId": 1, "skillId": 1})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "user 1 does not exist");
        assert!(get_json(&app, "/api/users/1/progress").await.1.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_translate_endpoint() {
        let app = app();
        let (status, body) = post_json(
            &app,
            "/api/translate",
            json!({"text": "Hello", "targetLanguage": "French"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["translation"], "[French] Hello");

        let (status, _) = post_json(&app, "/api/translate", json!({"text": "Hello"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_translate_upstream_failure_is_500_without_details() {
        let app = app_with(Store::new(), Arc::new(StubAssistant::failing()));
        let (status, body) = post_json(
            &app,
            "/api/translate",
            json!({"text": "Hello", "targetLanguage": "French"}),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "LLM_ERROR");
    }

    #[tokio::test]
    async fn test_recommend_endpoint() {
        let app = app();
        post_json(&app, "/api/skills", skill_body("Knife Skills", 3, &[])).await;
        post_json(&app, "/api/skills", skill_body("Sourdough", 3, &[])).await;
        post_json(&app, "/api/skills", skill_body("Rust", 1, &[])).await;

        let (status, body) = post_json(
            &app,
            "/api/recommend",
            json!({"userId": 1, "skillIds": [3], "interests": ["baking"]}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let titles: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["Sourdough", "Knife Skills"]);

        let (status, fallback) = post_json(&app, "/api/recommend", json!({"userId": 1})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fallback.as_array().unwrap().len(), 3);

        let (status, fallback) = post_json(
            &app,
            "/api/recommend",
            json!({"userId": 1, "skillIds": null, "interests": null}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fallback.as_array().unwrap().len(), 3);

        let (status, _) = post_json(&app, "/api/recommend", json!({"skillIds": [1]})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_recommend_upstream_failure_is_500() {
        let app = app_with(Store::new(), Arc::new(StubAssistant::failing()));
        post_json(&app, "/api/skills", skill_body("Knife Skills", 3, &[])).await;
        let (status, _) = post_json(
            &app,
            "/api/recommend",
            json!({"userId": 1, "interests": ["knives"]}),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
