pub mod home;
pub mod example;

use std::sync::Arc;

use common::*;
use common::render::TemplateRenderer;

/// Shared dependencies for the page handlers. Built once at startup and then only
/// ever borrowed, so it can live in the global state.
#[derive(Debug, Clone)]
pub struct Handler {
    pub renderer: Arc<TemplateRenderer>,
}

impl Handler {
    pub fn new(renderer: TemplateRenderer) -> Self {
        Self { renderer: Arc::new(renderer) }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new(templates())
    }
}

/// A basic context for use in page rendering, one per request.
pub struct PageContext {
    pub layout_data: MainLayoutData,
    pub renderer: Arc<TemplateRenderer>,
}

/// Every template the site knows about
pub fn templates() -> TemplateRenderer {
    TemplateRenderer::new()
        .register(home::TEMPLATE, home::render)
        .register(example::TEMPLATE, example::render)
}
