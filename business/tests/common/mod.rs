//! Mock-server harness for driving the table workflows end to end.

#![allow(dead_code)]

use std::time::Duration;

use ffgz_business::{BusinessConfig, register_all};
use ffgz_states::StateCtx;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestContext {
    pub mock_server: MockServer,
    pub ctx: StateCtx,
}

impl TestContext {
    pub async fn new() -> Self {
        let mock_server = MockServer::start().await;
        let mut ctx = StateCtx::new();
        register_all(&mut ctx, BusinessConfig::new(mock_server.uri()));
        Self { mock_server, ctx }
    }

    /// Start queued commands and wait for all of them, applying results as
    /// each one finishes.
    pub async fn flush_and_wait(&mut self) {
        self.ctx.sync_computes();
        self.ctx.flush_commands();

        let timeout = Duration::from_secs(5);
        let start = std::time::Instant::now();
        while self.ctx.task_count() > 0 {
            if start.elapsed() > timeout {
                panic!(
                    "Timed out waiting for pending tasks ({} still running)",
                    self.ctx.task_count()
                );
            }
            if self.ctx.task_set_mut().join_next().await.is_some() {
                self.ctx.sync_computes();
            }
        }
        self.ctx.sync_computes();
    }

    pub async fn mock_get(&self, route: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_types(&self, body: Value) {
        self.mock_get("/api/types", body).await;
    }

    pub async fn mock_data(&self, body: Value) {
        self.mock_get("/api/data", body).await;
    }
}

pub fn type_json(id: i64, model: &str, load: f64) -> Value {
    json!({
        "id": id,
        "model": model,
        "load": load,
        "damp": 0.05,
        "kx": 1.2e7,
        "ky": null,
        "kz": null
    })
}

pub fn data_json(id: i64, upper: &str, lower: &str, range: &str) -> Value {
    json!({
        "id": id,
        "upper_model": upper,
        "lower_model": lower,
        "freq_range": range,
        "max_excit": 0.5
    })
}
