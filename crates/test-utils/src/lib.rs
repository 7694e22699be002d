//! # Shared Test Doubles
//!
//! Test helpers used by the `prodesc` workspace: a scripted, in-memory
//! [`GenerationBackend`] and a tracing setup that tolerates being called from
//! every test.

use async_trait::async_trait;
use prodesc::{GenerationBackend, GenerationError};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};

/// Installs a compact tracing subscriber once; later calls are no-ops.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .with_test_writer()
        .try_init();
}

#[derive(Clone, Debug)]
enum Scripted {
    Reply(String),
    Fail(String),
}

// --- Mock Generation Backend ---

/// A generation backend whose replies are programmed per prompt.
///
/// Rules are matched by substring against the incoming prompt, in the order
/// they were added. Prompts that match no rule get the default reply, or an
/// error when none is set. Every call is recorded, and clones share the
/// recording.
#[derive(Clone, Debug)]
pub struct MockBackend {
    rules: Arc<Mutex<Vec<(String, Scripted)>>>,
    default_reply: Arc<Mutex<Option<String>>>,
    calls: Arc<Mutex<Vec<(String, u32)>>>,
    healthy: Arc<AtomicBool>,
    shut_down: Arc<AtomicBool>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            rules: Arc::new(Mutex::new(Vec::new())),
            default_reply: Arc::new(Mutex::new(None)),
            calls: Arc::new(Mutex::new(Vec::new())),
            healthy: Arc::new(AtomicBool::new(true)),
            shut_down: Arc::new(AtomicBool::new(false)),
        }
    }

    /// A backend that answers every prompt with `reply`.
    pub fn replying(reply: &str) -> Self {
        let backend = Self::new();
        backend.set_default_reply(reply);
        backend
    }

    pub fn set_default_reply(&self, reply: &str) {
        *self.default_reply.lock().unwrap() = Some(reply.to_string());
    }

    /// Answers prompts containing `key` with `reply`.
    pub fn add_reply(&self, key: &str, reply: &str) {
        self.rules
            .lock()
            .unwrap()
            .push((key.to_string(), Scripted::Reply(reply.to_string())));
    }

    /// Fails prompts containing `key` with a backend error carrying `message`.
    pub fn add_failure(&self, key: &str, message: &str) {
        self.rules
            .lock()
            .unwrap()
            .push((key.to_string(), Scripted::Fail(message.to_string())));
    }

    pub fn set_healthy(&self, healthy: bool) {
        self.healthy.store(healthy, Ordering::SeqCst);
    }

    /// Every `(prompt, max_tokens)` pair received so far.
    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn was_shut_down(&self) -> bool {
        self.shut_down.load(Ordering::SeqCst)
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationBackend for MockBackend {
    async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, GenerationError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), max_tokens));

        let scripted = self
            .rules
            .lock()
            .unwrap()
            .iter()
            .find(|(key, _)| prompt.contains(key.as_str()))
            .map(|(_, scripted)| scripted.clone());

        match scripted {
            Some(Scripted::Reply(reply)) => Ok(reply),
            Some(Scripted::Fail(message)) => Err(GenerationError::BackendApi {
                status: 500,
                body: message,
            }),
            None => self
                .default_reply
                .lock()
                .unwrap()
                .clone()
                .ok_or_else(|| GenerationError::BackendApi {
                    status: 404,
                    body: format!("MockBackend: no reply programmed for prompt '{prompt}'"),
                }),
        }
    }

    async fn health_check(&self) -> bool {
        self.healthy.load(Ordering::SeqCst)
    }

    async fn shutdown(&self) {
        self.shut_down.store(true, Ordering::SeqCst);
    }
}
