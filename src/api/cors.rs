use crate::config::CorsConfig;
use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

/// Build the CORS layer from `[cors]`. A `"*"` entry allows any origin.
pub fn build_cors_layer(cfg: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if cfg.allowed_origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = cfg
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(origins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt as _;

    fn app(origins: &[&str]) -> Router {
        let cfg = CorsConfig {
            allowed_origins: origins.iter().map(|o| o.to_string()).collect(),
        };
        Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(build_cors_layer(&cfg))
    }

    async fn allow_origin_header(app: Router, origin: &str) -> Option<String> {
        let request = Request::builder()
            .uri("/ping")
            .header("origin", origin)
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        response
            .headers()
            .get("access-control-allow-origin")
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn test_wildcard_allows_any_origin() {
        let header = allow_origin_header(app(&["*"]), "https://painel.example.com").await;
        assert_eq!(header.as_deref(), Some("*"));
    }

    #[tokio::test]
    async fn test_explicit_origin_list() {
        let allowed = allow_origin_header(
            app(&["https://painel.example.com"]),
            "https://painel.example.com",
        )
        .await;
        assert_eq!(allowed.as_deref(), Some("https://painel.example.com"));

        let rejected =
            allow_origin_header(app(&["https://painel.example.com"]), "https://evil.example").await;
        assert!(rejected.is_none());
    }
}
