use std::collections::HashMap;

use maud::Markup;

use crate::{MainLayoutData, RenderContext};
use crate::layout::layout;
use crate::response::{Error, Response};

/// A template is just a function producing the page body from the context. The layout
/// is wrapped around it by the renderer, so templates never need to know about it.
pub type TemplateFn = fn(&MainLayoutData, &RenderContext) -> Markup;

/// Named templates, built once at startup and then only read
#[derive(Default, Clone)]
pub struct TemplateRenderer {
    templates: HashMap<&'static str, TemplateFn>,
}

impl TemplateRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a template under the given name, replacing any previous one with that name
    pub fn register(mut self, name: &'static str, template: TemplateFn) -> Self {
        self.templates.insert(name, template);
        self
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    pub fn template_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.templates.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn render(&self, status: u16, name: &str, data: &MainLayoutData, context: &RenderContext) -> Result<Response, Error> {
        let template = self.templates.get(name).ok_or_else(|| Error::Template(String::from(name)))?;
        tracing::debug!(template = name, status, title = context.title(), "Rendering template");
        let html = layout(data, name, context, template(data, context)).into_string();
        Ok(Response::RenderWithStatus(html, status))
    }
}

impl std::fmt::Debug for TemplateRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRenderer")
            .field("templates", &self.template_names())
            .finish()
    }
}
