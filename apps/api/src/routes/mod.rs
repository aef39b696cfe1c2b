pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::jobs::handlers as jobs;
use crate::profile::handlers as profile;
use crate::recommendation::handlers as recommendation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Profile API
        .route("/api/profile/me", get(profile::handle_get_profile))
        .route(
            "/api/profile",
            post(profile::handle_upsert_profile).delete(profile::handle_delete_profile),
        )
        // Jobs API
        .route(
            "/api/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_create_job),
        )
        .route("/api/jobs/seed", post(jobs::handle_seed_jobs))
        .route(
            "/api/jobs/:id",
            get(jobs::handle_get_job)
                .put(jobs::handle_update_job)
                .delete(jobs::handle_delete_job),
        )
        // Recommendations API
        .route(
            "/api/recommendations",
            get(recommendation::handle_get_recommendations),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::auth::{sign_token, AUTH_HEADER};
    use crate::llm_client::mock::ScriptedProvider;
    use crate::recommendation::handlers::TIER_HEADER;
    use crate::recommendation::engine::RecommendationEngine;
    use crate::store::memory::MemoryStore;

    const SECRET: &str = "test-secret";

    struct Harness {
        app: Router,
        store: Arc<MemoryStore>,
        provider: Arc<ScriptedProvider>,
        token: String,
    }

    fn harness(provider: ScriptedProvider) -> Harness {
        let store = Arc::new(MemoryStore::new());
        let provider = Arc::new(provider);
        let user = store.add_user("Ada");

        let state = AppState {
            users: store.clone(),
            profiles: store.clone(),
            jobs: store.clone(),
            engine: RecommendationEngine::new(store.clone(), store.clone(), provider.clone()),
            jwt_secret: SECRET.to_string(),
        };

        Harness {
            app: build_router(state),
            store,
            provider,
            token: sign_token(user.id, SECRET),
        }
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(AUTH_HEADER, token);
        }
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn profile_body() -> Value {
        json!({
            "name": "Ada",
            "location": "Bangalore",
            "yearsOfExperience": 4,
            "skills": "React, JavaScript, Node.js",
            "preferredJobType": "remote"
        })
    }

    #[tokio::test]
    async fn test_root_and_health_are_public() {
        let h = harness(ScriptedProvider::replying("[]"));
        let (status, _) = send(&h.app, Method::GET, "/health", None, None).await;
        assert_eq!(status, StatusCode::OK);

        let response = h
            .app
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_recommendations_without_token_is_401_and_touches_no_storage() {
        let h = harness(ScriptedProvider::replying("[]"));

        let (status, body) = send(&h.app, Method::GET, "/api/recommendations", None, None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["msg"], "No token, authorization denied");
        assert_eq!(h.store.calls(), 0);
        assert_eq!(h.provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_invalid_token_is_401() {
        let h = harness(ScriptedProvider::replying("[]"));
        let forged = sign_token(Uuid::new_v4(), "wrong-secret");

        let (status, body) =
            send(&h.app, Method::GET, "/api/profile/me", Some(forged.as_str()), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["msg"], "Token is not valid");
    }

    #[tokio::test]
    async fn test_token_for_unknown_user_is_401() {
        let h = harness(ScriptedProvider::replying("[]"));
        let stranger = sign_token(Uuid::new_v4(), SECRET);

        let (status, _) = send(&h.app, Method::GET, "/api/profile/me", Some(stranger.as_str()), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_profile_lifecycle() {
        let h = harness(ScriptedProvider::replying("[]"));
        let token = Some(h.token.as_str());

        let (status, body) = send(&h.app, Method::GET, "/api/profile/me", token, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["msg"], "Profile not found");

        let (status, created) =
            send(&h.app, Method::POST, "/api/profile", token, Some(profile_body())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["skills"], json!(["React", "JavaScript", "Node.js"]));
        assert_eq!(created["preferredJobType"], "remote");

        let mut update = profile_body();
        update["location"] = json!("Pune");
        let (status, updated) = send(&h.app, Method::POST, "/api/profile", token, Some(update)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["id"], created["id"]);
        assert_eq!(updated["location"], "Pune");

        let (status, body) = send(&h.app, Method::DELETE, "/api/profile", token, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["msg"], "Profile deleted");

        let (status, _) = send(&h.app, Method::GET, "/api/profile/me", token, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_profile_body_is_400() {
        let h = harness(ScriptedProvider::replying("[]"));
        let (status, body) = send(
            &h.app,
            Method::POST,
            "/api/profile",
            Some(h.token.as_str()),
            Some(json!({ "name": "Ada" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["msg"].is_string());
    }

    #[tokio::test]
    async fn test_job_crud() {
        let h = harness(ScriptedProvider::replying("[]"));
        let token = Some(h.token.as_str());
        let job = json!({
            "title": "SRE",
            "company": "Acme",
            "location": "Remote",
            "description": "Keep things up",
            "skills": ["Go", "Linux"],
            "jobType": "remote",
            "salary": "$150k"
        });

        let (status, _) = send(&h.app, Method::POST, "/api/jobs", None, Some(job.clone())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, created) = send(&h.app, Method::POST, "/api/jobs", token, Some(job.clone())).await;
        assert_eq!(status, StatusCode::OK);
        let id = created["id"].as_str().unwrap().to_string();

        let (status, fetched) = send(&h.app, Method::GET, &format!("/api/jobs/{id}"), None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["jobType"], "remote");

        let mut changed = job.clone();
        changed["salary"] = json!("$160k");
        let (status, updated) =
            send(&h.app, Method::PUT, &format!("/api/jobs/{id}"), token, Some(changed)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["salary"], "$160k");

        let (status, body) =
            send(&h.app, Method::DELETE, &format!("/api/jobs/{id}"), token, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["msg"], "Job removed");

        let (status, body) = send(&h.app, Method::GET, &format!("/api/jobs/{id}"), None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["msg"], "Job not found");
    }

    #[tokio::test]
    async fn test_malformed_job_id_is_400() {
        let h = harness(ScriptedProvider::replying("[]"));
        let (status, _) = send(&h.app, Method::GET, "/api/jobs/not-a-uuid", None, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_seed_without_body_loads_sample_catalog() {
        let h = harness(ScriptedProvider::replying("[]"));

        let (status, seeded) = send(&h.app, Method::POST, "/api/jobs/seed", None, None).await;
        assert_eq!(status, StatusCode::OK);
        let count = seeded.as_array().unwrap().len();
        assert_eq!(count, crate::jobs::seed::sample_jobs().len());

        let (_, listed) = send(&h.app, Method::GET, "/api/jobs", None, None).await;
        assert_eq!(listed.as_array().unwrap().len(), count);
    }

    #[tokio::test]
    async fn test_seed_with_body_replaces_catalog() {
        let h = harness(ScriptedProvider::replying("[]"));
        send(&h.app, Method::POST, "/api/jobs/seed", None, None).await;

        let body = json!([
            { "title": "Only Job", "company": "Solo", "location": "Remote", "jobType": "remote" }
        ]);
        let (status, seeded) = send(&h.app, Method::POST, "/api/jobs/seed", None, Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(seeded.as_array().unwrap().len(), 1);

        let (_, listed) = send(&h.app, Method::GET, "/api/jobs", None, None).await;
        assert_eq!(listed[0]["title"], "Only Job");
    }

    #[tokio::test]
    async fn test_recommendations_fall_back_to_scorer_end_to_end() {
        let h = harness(ScriptedProvider::failing(500, "boom"));
        let token = Some(h.token.as_str());

        send(&h.app, Method::POST, "/api/jobs/seed", None, None).await;
        send(&h.app, Method::POST, "/api/profile", token, Some(profile_body())).await;

        let response = h
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/recommendations")
                    .header(AUTH_HEADER, h.token.as_str())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[TIER_HEADER].to_str().unwrap(),
            "scorer"
        );
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();

        let matches = body.as_array().unwrap();
        assert_eq!(matches.len(), 3);
        // Frontend Developer: 2 of 3 skills, remote
        assert_eq!(matches[0]["title"], "Frontend Developer");
        assert_eq!(matches[0]["matchScore"], 77);
        assert_eq!(matches[0]["jobDetails"]["company"], "Brightline Labs");
        assert_eq!(matches[0]["matchReasons"].as_array().unwrap().len(), 3);
        assert_eq!(h.provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_recommendations_without_profile_is_404() {
        let h = harness(ScriptedProvider::replying("[]"));
        send(&h.app, Method::POST, "/api/jobs/seed", None, None).await;

        let (status, body) =
            send(&h.app, Method::GET, "/api/recommendations", Some(h.token.as_str()), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["msg"], "Profile not found");
    }
}
