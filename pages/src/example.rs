use common::*;
use common::response::{Error, Response};
use maud::{Markup, html};

use super::Handler;

pub static TEMPLATE: &str = "example";
pub static TITLE: &str = "Example - Art Finder";

pub fn render(_data: &MainLayoutData, context: &RenderContext) -> Markup {
    html!{
        section {
            h1 { (context.title().unwrap_or(TITLE)) }
            p { "This is an example page." }
        }
    }
}

pub fn render_context() -> RenderContext {
    RenderContext::titled(TITLE)
}

impl Handler {
    pub fn example(&self, layout_data: &MainLayoutData) -> Result<Response, Error> {
        self.renderer.render(200, TEMPLATE, layout_data, &render_context())
    }
}
