//! Shared fixtures for attest-core integration tests.

// Each test binary compiles this module; not every binary uses every
// fixture.
#![allow(dead_code)]

use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use attest_core::llm::{ChatModel, ChatRequest};
use attest_core::{AnalyzerError, Result};

/// Default test identifiers used across fixtures.
pub const TEST_NAME: &str = "Search_for_a_product";
pub const RUN_ID: &str = "run_20250607_134626";

/// Builds an execution log document with the given plan text.
pub fn log_document(plan: &str) -> String {
    serde_json::json!({
        "user_proxy_agent": [
            { "name": "user", "content": "please run the test" },
            { "name": "planner_agent", "content": { "plan": plan } },
        ]
    })
    .to_string()
}

/// Writes an artifact tree (log plus screenshots) under a root.
///
/// Layout mirrors production: logs under
/// `<root>/logs/<test>/<run>/log_between_sender-user-rec-chat_manager_1.json`,
/// screenshots under `<root>/proofs/<test>/<run>/screenshots/`.
pub fn write_artifacts(root: &Path, plan: &str, screenshots: &[&str]) {
    let log_dir = root.join("logs").join(TEST_NAME).join(RUN_ID);
    std::fs::create_dir_all(&log_dir).unwrap();
    std::fs::write(
        log_dir.join("log_between_sender-user-rec-chat_manager_1.json"),
        log_document(plan),
    )
    .unwrap();

    let shot_dir = root
        .join("proofs")
        .join(TEST_NAME)
        .join(RUN_ID)
        .join("screenshots");
    std::fs::create_dir_all(&shot_dir).unwrap();
    for name in screenshots {
        std::fs::write(shot_dir.join(name), b"png-bytes").unwrap();
    }
}

/// Scripted chat model returning queued responses in order.
///
/// Records every request so tests can assert on prompts. Runs dry with
/// a configuration error when more calls arrive than responses were
/// scripted.
pub struct ScriptedModel {
    responses: Mutex<Vec<String>>,
    pub requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedModel {
    pub fn new(responses: &[&str]) -> Self {
        let mut queue: Vec<String> = responses.iter().map(|s| (*s).to_string()).collect();
        queue.reverse();
        Self {
            responses: Mutex::new(queue),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatModel for ScriptedModel {
    async fn complete(&self, request: ChatRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop()
            .ok_or_else(|| AnalyzerError::configuration("scripted model ran out of responses"))
    }
}

/// Shareable handle to a [`ScriptedModel`].
///
/// The builder takes boxed models by value; tests keep the `Arc` side
/// to assert on recorded requests afterwards.
pub struct SharedModel(pub std::sync::Arc<ScriptedModel>);

#[async_trait]
impl ChatModel for SharedModel {
    async fn complete(&self, request: ChatRequest) -> Result<String> {
        self.0.complete(request).await
    }
}

/// Sleeper that records delays instead of waiting.
pub struct NoopSleeper;

#[async_trait]
impl attest_core::Sleeper for NoopSleeper {
    async fn sleep(&self, _duration: std::time::Duration) {}
}
