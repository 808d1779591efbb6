use maud::{Markup, html, DOCTYPE};

use super::*;

pub fn style(config: &LinkConfig, link: &str) -> Markup {
    html! {
        link rel="stylesheet" href={(config.static_root) (link)};
    }
}

// Produce some metadata for the header that any page can use
pub fn basic_meta(config: &LinkConfig) -> Markup {
    html! {
        meta charset="UTF-8";
        meta name="viewport" content="width=device-width";
        link rel="icon" type="image/svg+xml" sizes="any" href={(config.resource_root) "/favicon.svg"};
    }
}

/// Whether a nav link should be highlighted: the exact path, or anything nested under it.
/// The root link only ever matches exactly.
pub fn is_current(href: &str, current_path: &str) -> bool {
    if current_path == href {
        true
    }
    else if href == "/" {
        false
    }
    else {
        current_path.strip_prefix(href).map_or(false, |rest| rest.starts_with('/'))
    }
}

//Produce a link for site navigation which supports highlighting if on current page
pub fn main_nav_link(config: &LinkConfig, text: &str, href: &str, current_path: &str) -> Markup {
    let mut class = String::from("plainlink headertab");
    if is_current(href, current_path) { class.push_str(" current"); }
    html! {
        a.(class) href={(config.http_root) (href)} { (text) }
    }
}

pub fn header(config: &LinkConfig, current_path: &str) -> Markup {
    html! {
        header."controlbar" {
            nav {
                (main_nav_link(config, "Home", "/", current_path))
                (main_nav_link(config, "Example", "/example", current_path))
            }
        }
    }
}

pub fn footer() -> Markup {
    html! {
        footer class="controlbar" {
            span #"version" { (SITENAME) " - " (env!("CARGO_PKG_VERSION")) }
        }
    }
}

/// Basic skeleton to output a blank page with the required css. The template name goes
/// on the body so the page can be identified (styling, tests, whatever)
pub fn basic_skeleton(data: &MainLayoutData, template: &str, head_inner: Markup, body_inner: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                (basic_meta(&data.config))
                (style(&data.config, "/base.css"))
                (head_inner)
            }
            body data-template=(template) {
                (body_inner)
            }
        }
    }
}

pub fn layout(main_data: &MainLayoutData, template: &str, context: &RenderContext, page: Markup) -> Markup {
    basic_skeleton(main_data, template, html!{
        title { (context.title().unwrap_or(SITENAME)) }
        meta name="description" content="Find art.";
    }, html! {
        (header(&main_data.config, &main_data.current_path))
        main {
            (page)
        }
        (footer())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout_data(path: &str) -> MainLayoutData {
        MainLayoutData {
            config: LinkConfig::from_root(""),
            current_path: String::from(path)
        }
    }

    #[test]
    fn root_only_current_on_root() {
        assert!(is_current("/", "/"));
        assert!(!is_current("/", "/example"));
        assert!(is_current("/example", "/example"));
        assert!(!is_current("/example", "/"));
    }

    #[test]
    fn sibling_prefix_not_current() {
        assert!(!is_current("/example", "/examples"));
        assert!(!is_current("/example", "/example-two"));
        assert!(is_current("/example", "/example/nested"));
    }

    #[test]
    fn header_highlights_one_tab() {
        let markup = header(&layout_data("/example").config, "/example").into_string();
        assert_eq!(markup.matches(" current").count(), 1);
        assert!(markup.contains(r#"<a class="plainlink headertab current" href="/example">Example</a>"#));
        assert!(markup.contains(r#"<a class="plainlink headertab" href="/">Home</a>"#));
    }

    #[test]
    fn layout_uses_context_title() {
        let data = layout_data("/");
        let html = layout(&data, "home", &RenderContext::titled("Some <Title>"), html! { p { "body" } }).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Some &lt;Title&gt;</title>"));
        assert!(html.contains(r#"<body data-template="home">"#));
        assert!(html.contains("<main><p>body</p></main>"));
    }

    #[test]
    fn layout_falls_back_to_site_name() {
        let data = layout_data("/");
        let html = layout(&data, "home", &RenderContext::new(), html! {}).into_string();
        assert!(html.contains("<title>Art Finder</title>"));
    }
}
