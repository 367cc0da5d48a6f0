//! Sterling Civil Engineering backend - library for app logic and testing

pub mod catalog;
pub mod forms;
pub mod logging;
pub mod routes;
pub mod schema;
pub mod storage;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer,
};

use catalog::Catalog;
use storage::{postgres::DbConfig, MemStorage, PgStorage, Storage};

/// Everything the handlers need, constructed once at process start.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub catalog: Arc<Catalog>,
}

/// Configure CORS from environment variables.
/// Uses ALLOWED_ORIGINS (comma-separated) or FRONTEND_ORIGIN.
/// Falls back to the local dev servers.
pub fn configure_cors() -> CorsLayer {
    let allowed_origins = std::env::var("ALLOWED_ORIGINS")
        .ok()
        .and_then(|s| {
            let origins: Vec<HeaderValue> = s
                .split(',')
                .filter_map(|origin| origin.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                None
            } else {
                Some(origins)
            }
        })
        .or_else(|| {
            std::env::var("FRONTEND_ORIGIN")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(|origin| vec![origin])
        })
        .unwrap_or_else(|| {
            vec![
                HeaderValue::from_static("http://localhost:3000"),
                HeaderValue::from_static("http://127.0.0.1:3000"),
            ]
        });

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .allow_credentials(true)
}

/// Create and configure the application router.
pub fn create_app(state: AppState) -> Router {
    let cors = configure_cors();

    Router::new()
        .route("/api/contact", post(routes::contact::submit_contact))
        .route("/api/contacts", get(routes::contact::list_contacts))
        .route("/api/blog", get(routes::blog::list_posts))
        .route("/api/blog/{slug}", get(routes::blog::get_post))
        .route(
            "/api/careers/apply",
            post(routes::careers::submit_application),
        )
        .route(
            "/api/careers/applications",
            get(routes::careers::list_applications),
        )
        .route("/api/careers/jobs", get(routes::careers::list_jobs))
        .route("/api/projects", get(routes::content::list_projects))
        .route("/api/team", get(routes::content::team_page))
        .route("/api/services", get(routes::content::services_page))
        .route("/health", get(routes::health::health_ping))
        .route("/health/detailed", get(routes::health::health_detailed))
        .layer(logging::propagate_request_id_layer())
        .layer(middleware::from_fn(logging::log_request))
        .layer(logging::request_id_layer())
        .layer(TraceLayer::new_for_http())
        // Compress responses with gzip/br/zstd automatically
        .layer(CompressionLayer::new())
        // Global 2 MB request body cap
        .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024))
        .layer(cors)
        .with_state(state)
}

/// Pick the storage backend: PostgreSQL when DATABASE_URL is set and
/// reachable, the in-memory provider otherwise.
async fn select_storage() -> Arc<dyn Storage> {
    if std::env::var("DATABASE_URL").is_ok() {
        match PgStorage::connect(DbConfig::default()).await {
            Ok(pg) => {
                tracing::info!("Using PostgreSQL storage");
                return Arc::new(pg);
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to initialize database pool: {}. Falling back to in-memory storage.",
                    e
                );
            }
        }
    } else {
        tracing::info!("DATABASE_URL not set. Using in-memory storage.");
    }
    Arc::new(MemStorage::new())
}

/// Run the server (used by main).
pub async fn run() {
    dotenvy::dotenv().ok();

    // Guards MUST be held for the programme's lifetime; dropping them early
    // shuts down background log-writer threads and loses buffered log lines.
    let _log_guards = logging::init();

    routes::health::init_start_time();

    let state = AppState {
        storage: select_storage().await,
        catalog: Arc::new(Catalog::new()),
    };

    let app = create_app(state);

    // Bind address is configurable via HOST / PORT env vars, defaulting to
    // 127.0.0.1:5000 so existing dev setups keep working unchanged.
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(5000);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("Invalid HOST/PORT configuration");
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app).await.expect("Server error");
}
