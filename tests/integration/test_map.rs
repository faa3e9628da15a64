use super::helpers::{
    StubModel, TEST_TIMEOUT_SECS, assert_status, clean_reply, get, inlined_locations, read_text,
    send, spawn_app,
};
use axum::http::{StatusCode, header};

#[tokio::test]
async fn clean_reply_renders_ten_markers() {
    let app = spawn_app(StubModel::Reply(clean_reply()));

    let res = send(&app.app, get("/map")).await;
    assert_status(res.status(), StatusCode::OK);
    let content_type = res
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"), "got {}", content_type);

    let page = read_text(res).await;
    assert_eq!(page.matches("L.marker(").count(), 10);
    assert_eq!(page.matches("markerColor: 'blue'").count(), 5);
    assert_eq!(page.matches("markerColor: 'orange'").count(), 5);

    let locations = inlined_locations(&page);
    assert_eq!(locations.len(), 10);
    assert_eq!(locations[0]["place_name"], "Nariman-Point-Tower");
}

#[tokio::test]
async fn empty_reply_reports_no_locations() {
    let app = spawn_app(StubModel::Reply("[]".into()));

    let res = send(&app.app, get("/map")).await;
    assert_status(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let page = read_text(res).await;
    assert!(page.contains("No valid location data found."));
    assert!(!page.contains("L.marker("));
}

#[tokio::test]
async fn prose_reply_reports_no_locations() {
    let app = spawn_app(StubModel::Reply("I am unable to list locations.".into()));

    let res = send(&app.app, get("/map")).await;
    assert_status(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(read_text(res).await.contains("No valid location data found."));
}

#[tokio::test]
async fn network_error_message_is_shown_without_trace() {
    let app = spawn_app(StubModel::Fail(
        "error sending request: connection refused".into(),
    ));

    let res = send(&app.app, get("/map")).await;
    assert_status(res.status(), StatusCode::BAD_GATEWAY);
    let page = read_text(res).await;
    assert!(page.contains("error sending request: connection refused"));
    assert!(!page.contains("stack backtrace"));
    assert!(!page.contains(".rs:"));
}

#[tokio::test]
async fn trailing_comma_reply_renders_one_marker() {
    let reply = r#"[{"place_name":"X","lat":19.1,"lon":72.8,"area_type":"prime","address":"A","details":{},},]"#;
    let app = spawn_app(StubModel::Reply(reply.into()));

    let res = send(&app.app, get("/map")).await;
    assert_status(res.status(), StatusCode::OK);
    let page = read_text(res).await;
    assert_eq!(page.matches("L.marker(").count(), 1);
    assert!(page.contains("setView([19.1, 72.8], 11)"));
    let locations = inlined_locations(&page);
    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0]["place_name"], "X");
}

#[tokio::test(start_paused = true)]
async fn stalled_model_times_out() {
    let app = spawn_app(StubModel::Stall);

    let res = send(&app.app, get("/map")).await;
    assert_status(res.status(), StatusCode::GATEWAY_TIMEOUT);
    let page = read_text(res).await;
    assert!(page.contains(&format!("within {} seconds", TEST_TIMEOUT_SECS)));
}

#[tokio::test]
async fn invalid_query_is_rejected() {
    let app = spawn_app(StubModel::Reply(clean_reply()));

    let res = send(&app.app, get("/map?query=x")).await;
    assert_status(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn language_parameter_reaches_the_page() {
    let app = spawn_app(StubModel::Reply(clean_reply()));

    let res = send(&app.app, get("/map?query=Worli&language=Marathi")).await;
    assert_status(res.status(), StatusCode::OK);
    assert!(read_text(res).await.contains("var detailLanguage = \"Marathi\";"));
}

#[tokio::test]
async fn non_finite_coordinates_are_unprocessable() {
    let reply = r#"[{"place_name":"X","lat":"NaN","lon":"inf","area_type":"prime"}]"#;
    let app = spawn_app(StubModel::Reply(reply.into()));

    let res = send(&app.app, get("/map")).await;
    assert_status(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let page = read_text(res).await;
    assert!(page.contains("No valid location data found."));
    assert!(!page.contains("setView("));
}
