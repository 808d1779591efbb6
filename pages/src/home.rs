use common::*;
use common::response::{Error, Response};
use maud::{Markup, html};

use super::PageContext;

pub static TEMPLATE: &str = "home";
pub static TITLE: &str = "Home - Art Finder";

pub fn render(data: &MainLayoutData, _context: &RenderContext) -> Markup {
    html!{
        section {
            h1 { "Art Finder" }
            p { "Welcome! Have a look at the " a href={(data.config.http_root) "/example"} { "example" } " page." }
        }
    }
}

pub fn render_context() -> RenderContext {
    RenderContext::titled(TITLE)
}

pub fn get_render(context: PageContext) -> Result<Response, Error> {
    context.renderer.render(200, TEMPLATE, &context.layout_data, &render_context())
}
