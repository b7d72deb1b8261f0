use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionService;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Read-only after construction — the template registry is static and the
/// completion client holds no per-request state.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Production: `GroqClient`; tests swap
    /// in a deterministic stand-in.
    pub completion: Arc<dyn CompletionService>,
    pub config: Config,
}
