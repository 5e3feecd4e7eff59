//! Integration tests for the static host

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use hb_web::{ServerError, SiteConfig, WebServer};
    use serde_json::Value;
    use tempfile::TempDir;
    use tower::ServiceExt;

    const INDEX: &str = "<!DOCTYPE html><html><body>hopebridge</body></html>";

    fn site_dir() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
        std::fs::write(dir.path().join("hb-web-ui.js"), "export default 1;").unwrap();
        dir
    }

    fn router(dir: &TempDir) -> Router {
        let mut config = SiteConfig::default();
        config.server.static_dir = dir.path().to_path_buf();
        WebServer::new(config).unwrap().router()
    }

    async fn send(router: Router, method: Method, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
        let response = router
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let dir = site_dir();
        let (status, _, body) = send(router(&dir), Method::GET, "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_pages_listing_in_nav_order() {
        let dir = site_dir();
        let (status, _, body) = send(router(&dir), Method::GET, "/api/pages").await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["organization"], "HopeBridge");
        let ids: Vec<_> = json["pages"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, ["home", "about", "work", "get-involved", "contact"]);
        assert_eq!(json["pages"][4]["heading"], "Contact Us");
    }

    #[tokio::test]
    async fn test_unknown_api_path_is_json_404() {
        let dir = site_dir();
        let (status, _, body) = send(router(&dir), Method::GET, "/api/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("not found"));
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let dir = site_dir();
        let (status, headers, body) = send(router(&dir), Method::GET, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);
        assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY");
    }

    #[tokio::test]
    async fn test_static_asset_served() {
        let dir = site_dir();
        let (status, _, body) = send(router(&dir), Method::GET, "/hb-web-ui.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "export default 1;");
    }

    #[tokio::test]
    async fn test_deep_link_falls_back_to_index() {
        let dir = site_dir();
        let (status, _, body) = send(router(&dir), Method::GET, "/get-involved").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);
    }

    #[tokio::test]
    async fn test_contact_submissions_are_not_accepted() {
        let dir = site_dir();
        let (status, _, _) = send(router(&dir), Method::POST, "/contact").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn test_missing_static_dir_rejected() {
        let mut config = SiteConfig::default();
        config.server.static_dir = "/nonexistent/hopebridge-dist".into();
        assert!(matches!(
            WebServer::new(config),
            Err(ServerError::StaticDirMissing(_))
        ));
    }
}
