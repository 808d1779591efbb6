use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    routing::get,
    Router, extract::{DefaultBodyLimit, FromRequestParts}, async_trait, http::Uri,
};

use tower_http::{services::ServeDir, limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::state::{RequestContext, GlobalState};
use crate::srender;

type StdResponse = Result<common::response::Response, common::response::Error>;

pub fn get_all_routes(gstate: Arc<GlobalState>) -> Router
{
    let app = Router::new()
        .route("/",
            get(|context: RequestContext| srender!(pages::home::get_render(context.page_context))))
        .route("/example",
            get(|context: RequestContext| srender!(
                context.global_state.handler.example(&context.page_context.layout_data))))
        .nest_service("/static", ServeDir::new(&gstate.config.static_dir))
        .fallback(not_found)
        .with_state(gstate.clone())
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(
            gstate.config.body_maxsize as usize
        ))
        .layer(TraceLayer::new_for_http())
    ;

    app
}

async fn not_found(uri: Uri) -> common::response::Error {
    common::response::Error::NotFound(format!("Nothing at {}", uri.path()))
}

#[macro_export]
macro_rules! srender {
    ($render:expr) => {
        async move {
            StdResponse::Ok($render?)
        }
    };
}

#[async_trait]
impl FromRequestParts<Arc<GlobalState>> for RequestContext
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &Arc<GlobalState>) -> Result<Self, Self::Rejection>
    {
        Ok(RequestContext::generate(state.clone(), parts.uri.path()))
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::{Request, StatusCode}};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;

    fn app() -> Router {
        get_all_routes(Arc::new(GlobalState::new(Config::default())))
    }

    async fn get_page(uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn home_route() {
        let (status, body) = get_page("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>Home - Art Finder</title>"));
        assert!(body.contains(r#"data-template="home""#));
        assert!(body.contains(r#"<a class="plainlink headertab current" href="/">Home</a>"#));
    }

    #[tokio::test]
    async fn example_route() {
        let (status, body) = get_page("/example").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>Example - Art Finder</title>"));
        assert!(body.contains(r#"data-template="example""#));
        assert!(body.contains(r#"<a class="plainlink headertab current" href="/example">Example</a>"#));
    }

    #[tokio::test]
    async fn routes_are_idempotent() {
        for uri in ["/", "/example"] {
            let first = get_page(uri).await;
            let second = get_page(uri).await;
            assert_eq!(first, second);
        }
    }

    #[tokio::test]
    async fn query_is_ignored() {
        let (status, body) = get_page("/example?title=nope").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>Example - Art Finder</title>"));
    }

    #[tokio::test]
    async fn unknown_route_not_found() {
        let (status, body) = get_page("/nowhere").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Nothing at /nowhere");
    }

    #[tokio::test]
    async fn static_files_served() {
        let config = Config {
            static_dir: String::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static")),
            ..Config::default()
        };
        let app = get_all_routes(Arc::new(GlobalState::new(config)));

        let response = app.clone()
            .oneshot(Request::builder().uri("/static/base.css").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        assert!(String::from_utf8(body.to_vec()).unwrap().contains(".headertab.current"));

        let response = app
            .oneshot(Request::builder().uri("/static/nope.css").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn html_content_type() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let content_type = response.headers().get(axum::http::header::CONTENT_TYPE).unwrap();
        assert_eq!(content_type, "text/html; charset=utf-8");
    }
}
