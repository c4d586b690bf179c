//! End-to-end tests for the dashboard commands against a mock presence API.

use presence_client::{ClientConfig, PresenceClient};
use presence_core::{AvatarDisplay, PresenceError, SelectorState};
use presence_dashboard::{commands, DashboardError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_users(mock_server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(mock_server)
        .await;
}

fn client_for(mock_server: &MockServer) -> PresenceClient {
    PresenceClient::new(ClientConfig::new(mock_server.uri())).unwrap()
}

#[tokio::test]
async fn test_users_populate_selector() {
    let mock_server = MockServer::start().await;
    mock_users(
        &mock_server,
        serde_json::json!([
            {"user_id": 1, "name": "Alice", "avatar": "a.png"},
            {"user_id": 2, "name": "Bob"}
        ]),
    )
    .await;

    let selector = commands::load_selector(&client_for(&mock_server)).await;
    let view = selector.view();

    assert_eq!(view.options.len(), 2);
    assert_eq!(view.options[0].label, "Alice");
    assert_eq!(view.options[1].label, "Bob");
    assert!(view.selector_visible);
    assert!(!view.loading_visible);

    let text = view.to_string();
    assert!(text.contains("Alice"));
    assert!(text.contains("Bob"));
}

#[tokio::test]
async fn test_users_skip_wrong_typed_record() {
    let mock_server = MockServer::start().await;
    mock_users(
        &mock_server,
        serde_json::json!([
            {"user_id": 1, "name": "Alice"},
            {"user_id": "2", "name": "Bob"}
        ]),
    )
    .await;

    let selector = commands::load_selector(&client_for(&mock_server)).await;

    assert_eq!(selector.state(), &SelectorState::Populated { selected: None });
    assert_eq!(selector.view().options.len(), 1);
    assert_eq!(selector.view().options[0].label, "Alice");
    assert!(selector.view().selector_visible);
    assert!(!selector.view().loading_visible);
}

#[tokio::test]
async fn test_users_failure_shows_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let selector = commands::load_selector(&client_for(&mock_server)).await;

    assert!(matches!(selector.state(), SelectorState::Failed { .. }));
    assert!(!selector.view().loading_visible);
    assert!(!selector.view().selector_visible);
    assert!(selector.view().to_string().starts_with("Error:"));
}

#[tokio::test]
async fn test_select_user_with_and_without_avatar() {
    let mock_server = MockServer::start().await;
    mock_users(
        &mock_server,
        serde_json::json!([
            {"user_id": 1, "name": "Alice", "avatar": "a.png"},
            {"user_id": 2, "name": "Bob"}
        ]),
    )
    .await;
    let client = client_for(&mock_server);

    let (selector, display) = commands::select_user(&client, 1).await.unwrap();
    assert_eq!(display, AvatarDisplay::Shown("a.png".into()));
    assert_eq!(selector.view().visible_avatar(), Some("a.png"));
    assert_eq!(selector.selected(), Some(1));

    mock_server.reset().await;
    mock_users(
        &mock_server,
        serde_json::json!([{"user_id": 2, "name": "Bob"}]),
    )
    .await;

    let (selector, display) = commands::select_user(&client, 2).await.unwrap();
    assert_eq!(display, AvatarDisplay::Hidden);
    assert_eq!(selector.view().visible_avatar(), None);
}

#[tokio::test]
async fn test_select_unknown_user() {
    let mock_server = MockServer::start().await;
    mock_users(&mock_server, serde_json::json!([])).await;

    let result = commands::select_user(&client_for(&mock_server), 42).await;

    assert!(matches!(
        result,
        Err(DashboardError::Presence(PresenceError::UnknownUser(42)))
    ));
}

#[tokio::test]
async fn test_start_end_output() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/presence_start_end/10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            ["Mon", 32400, 61200],
            ["Tue", 34745, 59999.6]
        ])))
        .mount(&mock_server)
        .await;

    let out = commands::start_end(&client_for(&mock_server), 10)
        .await
        .unwrap();

    assert_eq!(out, "Mon  09:00:00 - 17:00:00\nTue  09:39:05 - 16:40:00\n");
}

#[tokio::test]
async fn test_mean_time_and_weekday_output() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/mean_time_weekday/10"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!([["Wed", 3661.0]])),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/presence_weekday/10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            ["Weekday", "Presence (s)"],
            ["Wed", 24123]
        ])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    assert_eq!(
        commands::mean_time(&client, 10).await.unwrap(),
        "Wed  01:01:01\n"
    );
    assert_eq!(
        commands::weekday(&client, 10).await.unwrap(),
        "Wed   24123 s\n"
    );
}
