use std::any::Any;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Response, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::state::AppState;
use crate::{admin, favorites, people, planets, users};

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(sitemap))
        .merge(people::router())
        .merge(planets::router())
        .merge(users::router())
        .merge(favorites::router())
        .merge(admin::router())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!("http_request", %method, uri = %uri)
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     _latency: std::time::Duration,
                     span: &tracing::Span| {
                        let status = res.status();
                        span.record("status", tracing::field::display(status));
                        if status.is_server_error() {
                            tracing::error!(%status, "response");
                        } else {
                            tracing::info!(%status, "response");
                        }
                    },
                ),
        )
        .layer(CatchPanicLayer::custom(handle_panic))
}

pub async fn serve(app: Router, config: Arc<AppConfig>) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct RouteEntry {
    method: &'static str,
    path: &'static str,
}

const ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/people"),
    ("GET", "/people/:people_id"),
    ("GET", "/planets"),
    ("GET", "/planets/:planet_id"),
    ("GET", "/users"),
    ("GET", "/users/favorites"),
    ("POST", "/favorite/planet/:planet_id"),
    ("DELETE", "/favorite/planet/:planet_id"),
    ("POST", "/favorite/people/:people_id"),
    ("DELETE", "/favorite/people/:people_id"),
    ("POST", "/admin/users"),
    ("POST", "/admin/people"),
    ("POST", "/admin/planets"),
];

/// Machine-readable listing of every exposed route.
async fn sitemap() -> Json<serde_json::Value> {
    let routes: Vec<RouteEntry> = ROUTES
        .iter()
        .map(|(method, path)| RouteEntry { method, path })
        .collect();
    Json(serde_json::json!({ "routes": routes }))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!(%detail, "handler panicked");

    let body = serde_json::json!({
        "error": "internal_server_error",
        "message": detail,
    });
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
