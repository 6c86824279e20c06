// Shared test helpers: a wiremock stand-in for the community search site plus
// recording progress/event sinks.

// Each test binary uses its own subset of these helpers.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nick_trace::{EventLevel, EventSink, ProgressSink, Settings};

/// Session token the mock bootstrap hands out.
pub const TEST_SESSION_TOKEN: &str = "test-session-token";

/// Settings pointed at a mock server, with small knobs for fast tests.
pub fn test_settings(server_uri: &str) -> Settings {
    Settings {
        search_base_url: format!("{server_uri}/search/SearchCommunityAjax"),
        profile_base_url: format!("{server_uri}/"),
        nickname_history_url: format!("{server_uri}/{{}}/ajaxaliases/"),
        retry_attempts: 1,
        slice_width: 1,
        timeout_seconds: 5,
        ..Settings::default()
    }
}

/// Renders one profile card as the search endpoint would.
///
/// `extra_text` carries the tab-separated name/location tail of the preview
/// (e.g. `"\tJohn\tGermany"`); `icon` adds the country-flag image.
pub fn profile_card(server_uri: &str, id_path: &str, nickname: &str, extra_text: &str, icon: bool) -> String {
    let img = if icon { r#"<img src="flag.gif">"# } else { "" };
    format!(
        r#"<div class="search_row"><a class="searchPersonaName" href="{server_uri}/{id_path}">{nickname}</a>{extra_text}{img}</div>"#
    )
}

/// Builds a search envelope from rendered cards and a result count.
pub fn search_envelope(cards: &[String], result_count: u64) -> Value {
    json!({
        "html": cards.concat(),
        "search_result_count": result_count,
    })
}

/// Mounts the bootstrap responder: a paramless GET on the search path that
/// sets the session cookie. Low priority so search-page mocks win whenever
/// query parameters are present.
pub async fn mount_bootstrap(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/search/SearchCommunityAjax"))
        .respond_with(ResponseTemplate::new(200).insert_header(
            "set-cookie",
            format!("sessionid={TEST_SESSION_TOKEN}; Path=/").as_str(),
        ))
        .with_priority(10)
        .mount(server)
        .await;
}

/// Mounts one search-results page.
pub async fn mount_search_page(server: &MockServer, page: usize, envelope: Value) {
    Mock::given(method("GET"))
        .and(path("/search/SearchCommunityAjax"))
        .and(query_param("filter", "users"))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope))
        .with_priority(1)
        .mount(server)
        .await;
}

/// Mounts a profile page with a description block.
pub async fn mount_profile(server: &MockServer, id_path: &str, description: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/{id_path}")))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<html><body><div class="profile_summary">{description}</div></body></html>"#
        )))
        .mount(server)
        .await;
}

/// Mounts a profile page without any description block.
pub async fn mount_profile_without_description(server: &MockServer, id_path: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/{id_path}")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body></body></html>"))
        .mount(server)
        .await;
}

/// Mounts an alias-history endpoint answering the given nicknames.
pub async fn mount_aliases(server: &MockServer, id_path: &str, nicknames: &[&str]) {
    let payload: Vec<Value> = nicknames
        .iter()
        .map(|nick| json!({ "newname": nick, "timechanged": "Jan 1 @ 0:00am" }))
        .collect();
    Mock::given(method("GET"))
        .and(path(format!("/{id_path}/ajaxaliases/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(payload)))
        .mount(server)
        .await;
}

/// Progress sink recording every reported fraction.
#[derive(Clone, Default)]
pub struct RecordingProgress(Arc<Mutex<Vec<f64>>>);

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> Vec<f64> {
        self.0.lock().unwrap().clone()
    }
}

impl ProgressSink for RecordingProgress {
    fn progress(&self, fraction: f64) {
        self.0.lock().unwrap().push(fraction);
    }
}

/// Event sink recording every event.
#[derive(Clone, Default)]
pub struct RecordingEvents(Arc<Mutex<Vec<(EventLevel, String)>>>);

impl RecordingEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count_at(&self, level: EventLevel) -> usize {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .count()
    }

    pub fn messages_at(&self, level: EventLevel) -> Vec<String> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl EventSink for RecordingEvents {
    fn event(&self, level: EventLevel, message: &str) {
        self.0.lock().unwrap().push((level, message.to_string()));
    }
}
