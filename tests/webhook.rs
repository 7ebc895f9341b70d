//! Drives the HTTP surface through poem's test client with an in-memory Send API.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use poem::{Route, http::StatusCode, test::TestClient};
use serde_json::{Value, json};

use menu_bot::{
    application::services::{
        catalog::{FALLBACK_REPLY, OPTION_2_REPLY},
        menu::{build_back_to_menu, build_main_menu},
    },
    config::Config,
    infrastructure::messaging::in_memory::InMemorySendApi,
    presentation::http::{build_routes, endpoints::root::ApiState},
};

const VERIFY_TOKEN: &str = "verify-me";
const WAIT: Duration = Duration::from_secs(2);

fn app(api: &Arc<InMemorySendApi>, extra: &[(&str, &str)]) -> TestClient<Route> {
    let mut env: HashMap<String, String> = HashMap::from([
        ("PAGE_ACCESS_TOKEN".to_string(), "page-token".to_string()),
        ("VERIFY_TOKEN".to_string(), VERIFY_TOKEN.to_string()),
    ]);
    env.extend(extra.iter().map(|(k, v)| (k.to_string(), v.to_string())));
    let config = Config::from_lookup(|name| env.get(name).cloned()).expect("valid config");

    let state = Arc::new(ApiState::new(&config, api.clone()));
    TestClient::new(build_routes(state, "http://localhost:1337"))
}

fn message_from(sender: &str) -> Value {
    json!({
        "object": "page",
        "entry": [{
            "id": "PAGE_ID",
            "time": 1458692752478u64,
            "messaging": [{
                "sender": { "id": sender },
                "recipient": { "id": "PAGE_ID" },
                "message": { "mid": "m_1", "text": "hi" }
            }]
        }]
    })
}

fn postback_from(sender: &str, payload: &str) -> Value {
    json!({
        "object": "page",
        "entry": [{
            "messaging": [{
                "sender": { "id": sender },
                "postback": { "title": "Option", "payload": payload }
            }]
        }]
    })
}

#[tokio::test]
async fn verification_echoes_challenge_for_matching_token() {
    let api = Arc::new(InMemorySendApi::new());
    let cli = app(&api, &[]);

    for challenge in ["CHALLENGE_ACCEPTED", "1158201444"] {
        let resp = cli
            .get(format!(
                "/webhook?hub.mode=subscribe&hub.verify_token={VERIFY_TOKEN}&hub.challenge={challenge}"
            ))
            .send()
            .await;
        resp.assert_status_is_ok();
        resp.assert_text(challenge).await;
    }
}

#[tokio::test]
async fn verification_rejects_wrong_token_or_missing_mode() {
    let api = Arc::new(InMemorySendApi::new());
    let cli = app(&api, &[]);

    for uri in [
        "/webhook?hub.mode=subscribe&hub.verify_token=nope&hub.challenge=abc",
        "/webhook?hub.mode=subscribe&hub.challenge=abc",
        "/webhook?hub.verify_token=verify-me&hub.challenge=abc",
        "/webhook?hub.mode=&hub.verify_token=verify-me&hub.challenge=abc",
        "/webhook",
    ] {
        let resp = cli.get(uri).send().await;
        resp.assert_status(StatusCode::FORBIDDEN);
        resp.assert_text("").await;
    }
}

#[tokio::test]
async fn message_is_acknowledged_and_answered_with_main_menu() {
    let api = Arc::new(InMemorySendApi::new());
    let cli = app(&api, &[]);

    let resp = cli.post("/webhook").body_json(&message_from("U1")).send().await;
    resp.assert_status_is_ok();
    resp.assert_text("EVENT_RECEIVED").await;

    let sends = api.wait_for(1, WAIT).await;
    assert_eq!(sends.len(), 1);
    assert_eq!(sends[0].request.recipient.id, "U1");
    assert_eq!(sends[0].request.message, build_main_menu());
    assert_eq!(
        sends[0].request.message.button_payloads(),
        vec!["MENU_OPTION_1", "MENU_OPTION_2", "MENU_OPTION_3"]
    );
}

#[tokio::test]
async fn postback_sends_reply_then_back_to_menu() {
    let api = Arc::new(InMemorySendApi::new());
    let cli = app(&api, &[]);

    let resp = cli
        .post("/webhook")
        .body_json(&postback_from("U2", "MENU_OPTION_2"))
        .send()
        .await;
    resp.assert_status_is_ok();
    resp.assert_text("EVENT_RECEIVED").await;

    let sends = api.wait_for(2, WAIT).await;
    assert_eq!(sends.len(), 2);
    assert_eq!(sends[0].request.message.as_text(), Some(OPTION_2_REPLY));
    assert_eq!(sends[1].request.message, build_back_to_menu());
}

#[tokio::test]
async fn unknown_postback_gets_fallback_then_back_to_menu() {
    let api = Arc::new(InMemorySendApi::new());
    let cli = app(&api, &[]);

    cli.post("/webhook")
        .body_json(&postback_from("U3", "UNKNOWN"))
        .send()
        .await
        .assert_status_is_ok();

    let sends = api.wait_for(2, WAIT).await;
    assert_eq!(sends[0].request.message.as_text(), Some(FALLBACK_REPLY));
    assert_eq!(sends[1].request.message, build_back_to_menu());
}

#[tokio::test]
async fn non_page_object_is_not_found_and_sends_nothing() {
    let api = Arc::new(InMemorySendApi::new());
    let cli = app(&api, &[]);

    let mut body = message_from("U4");
    body["object"] = json!("instagram");
    let resp = cli.post("/webhook").body_json(&body).send().await;
    resp.assert_status(StatusCode::NOT_FOUND);

    let sends = api.wait_for(1, Duration::from_millis(100)).await;
    assert!(sends.is_empty());
}

#[tokio::test]
async fn failed_reply_is_still_acknowledged() {
    let api = Arc::new(InMemorySendApi::failing_on(&[1]));
    let cli = app(&api, &[]);

    let resp = cli
        .post("/webhook")
        .body_json(&postback_from("U5", "MENU_OPTION_1"))
        .send()
        .await;
    resp.assert_status_is_ok();
    resp.assert_text("EVENT_RECEIVED").await;

    let sends = api.wait_for(2, WAIT).await;
    assert_eq!(sends.len(), 2);
    assert!(!sends[0].delivered);
    assert_eq!(sends[1].request.message, build_back_to_menu());
    assert!(sends[1].delivered);
}

#[tokio::test]
async fn main_menu_postback_reopens_the_menu() {
    let api = Arc::new(InMemorySendApi::new());
    let cli = app(&api, &[]);

    cli.post("/webhook")
        .body_json(&postback_from("U6", "MAIN_MENU"))
        .send()
        .await
        .assert_status_is_ok();

    let sends = api.wait_for(1, WAIT).await;
    assert_eq!(sends[0].request.message, build_main_menu());
    assert_eq!(api.wait_for(2, Duration::from_millis(100)).await.len(), 1);
}

#[tokio::test]
async fn extra_events_in_an_entry_are_ignored_unless_enabled() {
    let body = json!({
        "object": "page",
        "entry": [{
            "messaging": [
                { "sender": { "id": "U7" }, "message": { "text": "first" } },
                { "sender": { "id": "U7" }, "postback": { "payload": "MENU_OPTION_3" } }
            ]
        }]
    });

    let api = Arc::new(InMemorySendApi::new());
    let cli = app(&api, &[]);
    cli.post("/webhook").body_json(&body).send().await.assert_status_is_ok();
    api.wait_for(1, WAIT).await;
    assert_eq!(api.wait_for(2, Duration::from_millis(100)).await.len(), 1);

    let api = Arc::new(InMemorySendApi::new());
    let cli = app(&api, &[("PROCESS_ALL_EVENTS", "true")]);
    cli.post("/webhook").body_json(&body).send().await.assert_status_is_ok();
    let sends = api.wait_for(3, WAIT).await;
    assert_eq!(sends.len(), 3);
    assert_eq!(sends[0].request.message, build_main_menu());
    assert_eq!(sends[2].request.message, build_back_to_menu());
}

#[tokio::test]
async fn empty_messaging_list_is_still_acknowledged() {
    let api = Arc::new(InMemorySendApi::new());
    let cli = app(&api, &[]);

    let resp = cli
        .post("/webhook")
        .body_json(&json!({ "object": "page", "entry": [{ "messaging": [] }, {}] }))
        .send()
        .await;
    resp.assert_status_is_ok();
    resp.assert_text("EVENT_RECEIVED").await;
    assert!(api.wait_for(1, Duration::from_millis(100)).await.is_empty());
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let api = Arc::new(InMemorySendApi::new());
    let cli = app(&api, &[]);

    let resp = cli
        .post("/webhook")
        .content_type("application/json")
        .body("{not json")
        .send()
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_reports_ok() {
    let api = Arc::new(InMemorySendApi::new());
    let cli = app(&api, &[]);

    let resp = cli.get("/health").send().await;
    resp.assert_status_is_ok();
    resp.assert_text("OK").await;
}
