use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::AuthKeys;
use crate::config::Config;
use crate::linkedin::ProfileSource;
use crate::parsing::ResumeParser;
use crate::storage::ObjectStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub store: ObjectStore,
    pub auth: Arc<AuthKeys>,
    /// The resume pipeline: compiled pattern table, built once, read-only.
    pub parser: Arc<ResumeParser>,
    /// Pluggable LinkedIn profile source. Default: `MockProfileSource`; a real
    /// authorized integration swaps in here without touching handlers.
    pub profiles: Arc<dyn ProfileSource>,
    pub config: Config,
}
