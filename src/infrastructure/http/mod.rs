//! HTTP REST API routes

mod catalog_routes;
mod generation_routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Generation routes
        .route(
            "/api/generate-video",
            post(generation_routes::generate_video),
        )
        .route(
            "/api/generate-video/full",
            post(generation_routes::generate_video_full),
        )
        // Catalog routes
        .route(
            "/api/pipeline/stages",
            get(catalog_routes::list_pipeline_stages),
        )
        .route("/api/niches", get(catalog_routes::list_niches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::AppConfig;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app(vars: &[(&str, &str)]) -> Router {
        let config = AppConfig::from_lookup(|key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        })
        .unwrap();
        let state = Arc::new(AppState::new(config).unwrap());
        create_routes().with_state(state)
    }

    async fn post_json(app: Router, uri: &str, body: String) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_generate_video_summary() {
        let body = json!({"storyIdea": "A robot learns to dance", "niche": "comedy", "duration": 5});
        let (status, value) = post_json(
            app(&[("GENERATION_SEED", "7")]),
            "/api/generate-video",
            body.to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["success"], true);
        assert_eq!(value["videoSpec"]["scenes"], 20);
        assert_eq!(value["videoSpec"]["resolution"], "1920x1080");
        assert_eq!(
            value["videoSpec"]["duration"],
            value["assemblySpec"]["totalDuration"]
        );
        assert_eq!(value["animationPrompts"].as_array().unwrap().len(), 3);
        assert_eq!(value["metadata"]["category"], "Comedy");
        assert!(value["generatedAt"].is_string());
    }

    #[tokio::test]
    async fn test_generate_video_full_returns_every_stage() {
        let body = json!({"storyIdea": "Magical animals", "niche": "not-a-niche", "duration": 2});
        let (status, value) =
            post_json(app(&[]), "/api/generate-video/full", body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["scenes"].as_array().unwrap().len(), 8);
        assert_eq!(value["voiceScripts"].as_array().unwrap().len(), 8);
        assert_eq!(value["animationPrompts"].as_array().unwrap().len(), 8);
        assert_eq!(value["metadata"]["category"], "Entertainment");
        assert_eq!(value["algorithmStrategy"]["retentionPoints"], json!([]));
    }

    #[tokio::test]
    async fn test_blank_story_idea_is_400() {
        let body = json!({"storyIdea": "   ", "niche": "comedy", "duration": 5});
        let (status, value) = post_json(app(&[]), "/api/generate-video", body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value["error"], "Invalid request");
        assert_eq!(value["message"], "Please enter a story idea");
    }

    #[tokio::test]
    async fn test_out_of_range_duration_is_400() {
        let body = json!({"storyIdea": "idea", "duration": 0});
        let (status, _) = post_json(app(&[]), "/api/generate-video", body.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let body = json!({"storyIdea": "idea", "duration": 11});
        let (status, value) = post_json(
            app(&[("MAX_DURATION_MINUTES", "10")]),
            "/api/generate-video",
            body.to_string(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(value["message"].as_str().unwrap().contains("between 1 and 10"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_400_with_error_shape() {
        let (status, value) =
            post_json(app(&[]), "/api/generate-video", "{not json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value["error"], "Invalid request");
        assert!(value["message"].is_string());
    }

    #[tokio::test]
    async fn test_unreachable_llm_is_502() {
        let app = app(&[
            ("GENERATION_MODE", "assisted"),
            ("LLM_BASE_URL", "http://127.0.0.1:9/v1"),
            ("LLM_TIMEOUT_SECS", "2"),
        ]);
        let body = json!({"storyIdea": "idea", "niche": "comedy", "duration": 1});
        let (status, value) = post_json(app, "/api/generate-video", body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(value["error"], "Generation failed");
        assert!(value["message"].as_str().unwrap().contains("try again"));
    }

    #[tokio::test]
    async fn test_upstream_server_error_is_502() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let upstream = Router::new().route(
            "/v1/chat/completions",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "model crashed") }),
        );
        tokio::spawn(async move {
            axum::serve(listener, upstream).await.unwrap();
        });

        let base_url = format!("http://{}/v1", addr);
        let app = app(&[
            ("GENERATION_MODE", "assisted"),
            ("LLM_BASE_URL", base_url.as_str()),
            ("LLM_TIMEOUT_SECS", "5"),
        ]);
        let body = json!({"storyIdea": "idea", "niche": "comedy", "duration": 1});
        let (status, value) = post_json(app, "/api/generate-video", body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(value["error"], "Generation failed");
        assert!(value["message"].as_str().unwrap().contains("model crashed"));
    }

    #[tokio::test]
    async fn test_pipeline_stages_listing() {
        let (status, value) = get_json(app(&[]), "/api/pipeline/stages").await;

        assert_eq!(status, StatusCode::OK);
        let stages = value.as_array().unwrap();
        assert_eq!(stages.len(), 8);
        assert_eq!(stages[0]["step"], 1);
        assert_eq!(stages[3]["displayDurationMs"], 8000);
    }

    #[tokio::test]
    async fn test_niche_catalog() {
        let (status, value) = get_json(app(&[]), "/api/niches").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["niches"].as_array().unwrap().len(), 6);
        assert_eq!(value["defaultNiche"], "kids-animation");
        assert_eq!(value["suggestedDurations"], json!([5, 10, 15, 20]));
    }
}
