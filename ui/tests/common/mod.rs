#![allow(dead_code)]

use std::time::Duration;

use egui_kittest::Harness;
use ffgz_ui::FfgzApp;
use ffgz_ui::state::State;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const NETWORK_WAIT: Duration = Duration::from_millis(20);

pub struct TestCtx<'a> {
    _mock_server: MockServer,
    harness: Harness<'a, FfgzApp>,
}

impl<'a> TestCtx<'a> {
    pub async fn new_app(types: Value, data: Value) -> Self {
        let mock_server = MockServer::start().await;
        mount_get(&mock_server, "/api/types", types).await;
        mount_get(&mock_server, "/api/data", data).await;
        mount_get(
            &mock_server,
            "/api/logs",
            json!([{"ts": "2024-05-01T08:30:00", "action": "create type GZ-10"}]),
        )
        .await;

        let state = State::test(mock_server.uri());
        let app = FfgzApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            _mock_server: mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, FfgzApp> {
        &mut self.harness
    }

    /// Step frames while yielding so spawned requests can finish.
    pub async fn settle(&mut self) {
        for _ in 0..20 {
            self.harness.step();
            tokio::time::sleep(NETWORK_WAIT).await;
        }
        self.harness.step();
    }
}

/// Run `n` frames; new windows need one extra frame for their sizing pass.
pub fn frames(harness: &mut Harness<'_, FfgzApp>, n: usize) {
    for _ in 0..n {
        harness.step();
    }
}

async fn mount_get(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub fn sample_types() -> Value {
    json!([
        {"id": 1, "model": "GZ-10", "load": 1500000.0, "damp": 0.05, "kx": 12.5, "ky": null, "kz": null},
        {"id": 2, "model": "GZ-20", "load": 320.0, "damp": 0.0000001, "kx": null, "ky": null, "kz": 7.0}
    ])
}

pub fn sample_data() -> Value {
    json!([
        {"id": 1, "upper_model": "GZ-10", "lower_model": "GZ-20", "freq_range": "1-10", "max_excit": 0.5},
        {"id": 2, "upper_model": "TJ-1", "lower_model": "TJ-2", "freq_range": "10-20", "max_excit": 0.7}
    ])
}
