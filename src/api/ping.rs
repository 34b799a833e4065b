//! Liveness probe endpoint.

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};

/// Exact response body, byte for byte.
pub const PONG: &str = r#"{"message": "pong"}"#;

/// `ANY /ping` — always returns 200 OK with `{"message": "pong"}`.
///
/// Method, headers and body are ignored. No state, never blocks, cannot fail.
pub async fn ping() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        PONG,
    )
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::json;
    use tower::ServiceExt; // oneshot

    use super::PONG;
    use crate::api::router;

    async fn send(req: Request<Body>) -> (StatusCode, Option<String>, Vec<u8>) {
        let response = router().oneshot(req).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_owned());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, body.to_vec())
    }

    fn request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    // -----------------------------------------------------------------------
    // /ping
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn get_ping_returns_exact_pong_body() {
        let (status, _, body) = send(request(Method::GET, "/ping")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, PONG.as_bytes());
        assert_eq!(std::str::from_utf8(&body).unwrap(), r#"{"message": "pong"}"#);
    }

    #[tokio::test]
    async fn pong_body_is_well_formed_json() {
        let (_, _, body) = send(request(Method::GET, "/ping")).await;
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value, json!({ "message": "pong" }));
    }

    #[tokio::test]
    async fn ping_declares_json_content_type() {
        let (_, content_type, _) = send(request(Method::GET, "/ping")).await;
        assert_eq!(content_type.as_deref(), Some("application/json"));
    }

    #[tokio::test]
    async fn ping_ignores_method() {
        for method in [Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
            let (status, _, body) = send(request(method.clone(), "/ping")).await;
            assert_eq!(status, StatusCode::OK, "method {method} should succeed");
            assert_eq!(body, PONG.as_bytes(), "method {method} body mismatch");
        }
    }

    #[tokio::test]
    async fn ping_ignores_headers_and_body() {
        let req = Request::builder()
            .method(Method::POST)
            .uri("/ping?verbose=1")
            .header(header::CONTENT_TYPE, "text/plain")
            .header("x-anything", "ignored")
            .body(Body::from("not json at all {"))
            .unwrap();
        let (status, _, body) = send(req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, PONG.as_bytes());
    }

    // -----------------------------------------------------------------------
    // Unregistered paths
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn unknown_paths_return_404() {
        for uri in ["/", "/pong", "/ping/extra", "/PING", "/healthz"] {
            let (status, _, body) = send(request(Method::GET, uri)).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri} should not be routed");
            assert!(body.is_empty(), "{uri} should use the default empty 404");
        }
    }
}
