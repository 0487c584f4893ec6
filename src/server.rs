//! Web server module for claude-example-web.
//!
//! `app` builds the router (the only route is the index page) without
//! touching any socket, so a test harness can drive it with synthetic
//! requests; `serve` binds the listener and runs until the process is
//! killed. A failed bind is the one fatal error in the system and is
//! reported as `ListenError`.
//!
use std::io;
use std::net::SocketAddr;

use axum::{
    Router,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::info;

use crate::views::VIEWS;

/// The listener could not be bound to the configured port
#[derive(Debug, Error)]
#[error("could not bind port {port}: {source}")]
pub struct ListenError {
    /// Port the bind was attempted on
    pub port: u16,
    source: io::Error,
}

/// Build the application: routes and view engine wired up, no socket
/// bound
pub fn app() -> Router {
    Router::new().route("/", get(index_page))
}

/// Bind `port` and serve the application until the process terminates
pub async fn serve(port: u16) -> Result<(), ListenError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ListenError { port, source })?;

    info!("Server is running on http://localhost:{port}");

    // Does not resolve during normal serving; the process is stopped
    // externally.
    axum::serve(listener, app())
        .await
        .map_err(|source| ListenError { port, source })
}

/// Display the index page
async fn index_page() -> Response {
    match VIEWS.render("index") {
        Some(body) => Html(body).into_response(),
        None => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::{app, serve};

    async fn get_root() -> axum::response::Response {
        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        app().oneshot(req).await.unwrap()
    }

    /// Test that GET / responds 200
    #[tokio::test]
    async fn index_returns_200() {
        let res = get_root().await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    /// Test that the body carries the page heading
    #[tokio::test]
    async fn index_contains_heading() {
        let res = get_root().await;
        let body = res.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("<h1>Claude Example</h1>"));
    }

    /// Test the Content-Type of the index page
    #[tokio::test]
    async fn index_content_type_is_html() {
        let res = get_root().await;
        let content_type = res
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap();
        assert!(content_type.contains("text/html"));
    }

    /// Test that repeated requests produce byte-identical bodies
    #[tokio::test]
    async fn index_body_is_stable() {
        let first = get_root().await.into_body().collect().await.unwrap();
        let second = get_root().await.into_body().collect().await.unwrap();
        assert_eq!(first.to_bytes(), second.to_bytes());
    }

    /// Test that unknown paths fall through to the framework 404
    #[tokio::test]
    async fn unknown_path_is_404() {
        let req = Request::builder()
            .uri("/missing")
            .body(Body::empty())
            .unwrap();
        let res = app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    /// Test that an occupied port surfaces as a ListenError
    #[tokio::test]
    async fn occupied_port_is_a_listen_error() {
        let holder = tokio::net::TcpListener::bind("0.0.0.0:0").await.unwrap();
        let port = holder.local_addr().unwrap().port();

        let err = serve(port).await.unwrap_err();
        assert_eq!(err.port, port);
    }
}
