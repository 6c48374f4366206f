//! Router construction.
//!
//! Builds the axum router with all routes and middleware. Document routes
//! are registered from the static registry at construction time; only the
//! final configured route set exists, nothing is dispatched dynamically.

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::routing::get;
use tower::ServiceBuilder;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;
use crate::static_files;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let mut router = Router::new().route("/", get(handlers::landing::get_landing));

    // One fixed route per configured document
    for doc in state.registry.iter() {
        let route_id = doc.route_id.clone();
        router = router.route(
            &format!("/{}", doc.route_id),
            get(move |State(state): State<Arc<AppState>>| {
                let route_id = route_id.clone();
                async move { handlers::documents::get_document(&state, &route_id) }
            }),
        );
    }

    router = router.route("/static/{*path}", get(static_files::serve_static));

    // Add security headers middleware
    router
        .layer(
            ServiceBuilder::new()
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use pretty_assertions::assert_eq;
    use readup_renderer::{DocumentMapping, DocumentRegistry, RewriteRule};
    use tower::ServiceExt;

    use super::*;
    use crate::shell::PageShell;

    /// Build a complete site layout in a temp directory and return the
    /// router serving it.
    fn test_site() -> (tempfile::TempDir, Router) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        std::fs::create_dir(root.join("templates")).unwrap();
        std::fs::write(
            root.join("templates/index.html"),
            "<html><body><h1>Welcome to readup</h1></body></html>",
        )
        .unwrap();
        std::fs::write(
            root.join("templates/document.html"),
            "<html><body><main>{{ content }}</main></body></html>",
        )
        .unwrap();

        std::fs::create_dir_all(root.join("static/css")).unwrap();
        std::fs::write(root.join("static/css/style.css"), "body { margin: 0; }").unwrap();

        std::fs::write(
            root.join("README.md"),
            "# Title\n![alt](images/pic.png)",
        )
        .unwrap();
        std::fs::write(
            root.join("quickstart.md"),
            "# Quickstart\n![setup](images/setup.png)",
        )
        .unwrap();

        let router = router_for(root);
        (dir, router)
    }

    fn router_for(root: &Path) -> Router {
        let documents = vec![
            DocumentMapping {
                route_id: "readme".to_owned(),
                source_path: root.join("README.md"),
                rewrite: Some(RewriteRule::new(
                    r#"src="images/"#,
                    r#"src="/static/readme-images/images/"#,
                )),
                view_template: "document".to_owned(),
            },
            DocumentMapping {
                route_id: "quickstart".to_owned(),
                source_path: root.join("quickstart.md"),
                rewrite: Some(RewriteRule::new(
                    r#"src="images/"#,
                    r#"src="/static/quickstart-images/images/"#,
                )),
                view_template: "document".to_owned(),
            },
        ];

        let state = Arc::new(AppState {
            registry: DocumentRegistry::new(documents),
            shell: PageShell::load(&root.join("templates")).unwrap(),
            static_dir: root.join("static"),
        });
        create_router(state)
    }

    async fn get(router: &Router, uri: &str) -> Response {
        router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_landing_page() {
        let (_dir, router) = test_site();

        let response = get(&router, "/").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("Welcome to readup"));
    }

    #[tokio::test]
    async fn test_landing_page_without_document_sources() {
        // The landing page never touches the document renderer, so it works
        // even when every configured source file is missing.
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir(root.join("templates")).unwrap();
        std::fs::write(root.join("templates/index.html"), "<h1>Landing</h1>").unwrap();
        std::fs::write(root.join("templates/document.html"), "{{ content }}").unwrap();
        let router = router_for(root);

        let response = get(&router, "/").await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_document_page_rendered_and_rewritten() {
        let (_dir, router) = test_site();

        let response = get(&router, "/readme").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
        let body = body_string(response).await;
        assert!(body.contains("<main>"));
        assert!(body.contains("<h1>Title</h1>"));
        assert!(body.contains(r#"src="/static/readme-images/images/pic.png""#));
        assert!(!body.contains(r#"src="images/"#));
    }

    #[tokio::test]
    async fn test_document_routes_are_isolated() {
        let (_dir, router) = test_site();

        let readme = body_string(get(&router, "/readme").await).await;
        let quickstart = body_string(get(&router, "/quickstart").await).await;

        assert!(readme.contains("/static/readme-images/images/pic.png"));
        assert!(quickstart.contains("/static/quickstart-images/images/setup.png"));
        assert!(!readme.contains("quickstart-images"));
        assert!(!quickstart.contains("readme-images"));
    }

    #[tokio::test]
    async fn test_missing_source_yields_500_and_server_survives() {
        let (dir, router) = test_site();

        std::fs::remove_file(dir.path().join("README.md")).unwrap();

        let response = get(&router, "/readme").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_string(response).await;
        // No document detail leaks to the client
        assert!(!body.contains("README"));

        // The process keeps serving other routes afterwards
        let landing = get(&router, "/").await;
        assert_eq!(landing.status(), StatusCode::OK);
        let quickstart = get(&router, "/quickstart").await;
        assert_eq!(quickstart.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (_dir, router) = test_site();

        let response = get(&router, "/unknown").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_static_file_served_with_mime() {
        let (_dir, router) = test_site();

        let response = get(&router, "/static/css/style.css").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");
        let body = body_string(response).await;
        assert!(body.contains("margin"));
    }

    #[tokio::test]
    async fn test_static_missing_file_is_404() {
        let (_dir, router) = test_site();

        let response = get(&router, "/static/css/missing.css").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_static_path_traversal_rejected() {
        let (_dir, router) = test_site();

        let response = get(&router, "/static/../README.md").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_security_headers_present() {
        let (_dir, router) = test_site();

        let response = get(&router, "/").await;

        assert_eq!(response.headers()["x-content-type-options"], "nosniff");
        assert_eq!(response.headers()["x-frame-options"], "DENY");
        assert!(response.headers().contains_key("content-security-policy"));
    }
}
