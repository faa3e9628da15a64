use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use locality_map::{
    config::Config,
    infrastructure::{geocoding::reference_areas::REFERENCE_AREAS, llm::traits::LanguageModel},
    presentation::http::{routes::create_router, state::AppState},
};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::{sync::Arc, time::Duration};

/// Scripted stand-in for the model endpoint.
#[derive(Clone)]
pub enum StubModel {
    Reply(String),
    Fail(String),
    Stall,
}

#[async_trait]
impl LanguageModel for StubModel {
    async fn stream_text(&self, _prompt: &str) -> anyhow::Result<String> {
        match self {
            StubModel::Reply(text) => Ok(text.clone()),
            StubModel::Fail(msg) => Err(anyhow::anyhow!(msg.clone())),
            StubModel::Stall => {
                tokio::time::sleep(Duration::from_secs(24 * 3600)).await;
                Ok(String::new())
            }
        }
    }

    fn model_name(&self) -> &str {
        "stub-model"
    }
}

pub struct TestApp {
    pub app: Router,
}

pub const TEST_TIMEOUT_SECS: u64 = 30;

fn build_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        gemini_api_key: "test-key".to_string(),
        gemini_model: "stub-model".to_string(),
        gemini_base_url: "http://127.0.0.1:9".to_string(),
        upstream_timeout_secs: TEST_TIMEOUT_SECS,
        default_query: "Andheri West".to_string(),
        default_city: "Mumbai".to_string(),
        default_language: "English".to_string(),
        temperature: 0.2,
        top_p: 0.95,
        top_k: 40,
        max_output_tokens: 8192,
    }
}

pub fn spawn_app(model: StubModel) -> TestApp {
    let state = AppState::new(build_config(), Arc::new(model));
    TestApp {
        app: create_router(state),
    }
}

/// A well-formed reply: one location on each reference area, pretty-printed
/// the way the model tends to answer.
pub fn clean_reply() -> String {
    let records: Vec<_> = REFERENCE_AREAS
        .iter()
        .map(|area| {
            json!({
                "place_name": format!("{}-Tower", area.name.replace(' ', "-")),
                "address": format!("Main-Road {} Mumbai", area.name),
                "lat": area.coordinate.lat,
                "lon": area.coordinate.lon,
                "area_type": area.area_type.as_str(),
                "details": {
                    "school_districts": "Two public schools nearby",
                    "public_transport": "Suburban rail and buses",
                    "local_amenities": "Markets and hospitals",
                    "zoning_info": "Mixed use"
                }
            })
        })
        .collect();
    serde_json::to_string_pretty(&records).expect("failed to build reply")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

pub async fn send(app: &Router, req: Request<Body>) -> axum::response::Response {
    use tower::ServiceExt;
    app.clone().oneshot(req).await.expect("request failed")
}

pub async fn read_json<T: DeserializeOwned>(res: axum::response::Response) -> T {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("failed to parse json")
}

pub async fn read_text(res: axum::response::Response) -> String {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    String::from_utf8(bytes.to_vec()).expect("invalid utf8")
}

pub fn assert_status(status: StatusCode, expected: StatusCode) {
    assert_eq!(status, expected, "expected {}, got {}", expected, status);
}

/// The JSON array assigned to `var locations` in a rendered map page.
pub fn inlined_locations(page: &str) -> Vec<serde_json::Value> {
    let line = page
        .lines()
        .find_map(|l| l.trim().strip_prefix("var locations = "))
        .expect("page has no inlined locations");
    serde_json::from_str(line.trim_end_matches(';')).expect("inlined locations are not JSON")
}
