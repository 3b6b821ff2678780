use std::sync::Arc;

use crate::manual::prompts::PromptLibrary;
use crate::profiles::store::ProfileStore;
use crate::render::RenderBackend;
use crate::templates::registry::TemplateRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup; read-only afterwards.
    pub templates: Arc<TemplateRegistry>,
    pub profiles: ProfileStore,
    pub prompts: PromptLibrary,
    /// Pluggable render backend. Default: JsonTreeBackend. Set RENDER_SERVICE_URL for HTTP.
    pub renderer: Arc<dyn RenderBackend>,
}
