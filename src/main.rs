use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::MatchedPath;
use dotenvy::dotenv;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

use notes_api::bootstrap::app_context::{AppContext, AppServices};
use notes_api::bootstrap::config::Config;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
        paths(
            notes_api::presentation::http::notes::list_notes,
            notes_api::presentation::http::notes::create_note,
            notes_api::presentation::http::notes::get_note,
            notes_api::presentation::http::notes::update_note,
            notes_api::presentation::http::notes::delete_note,
            notes_api::presentation::http::notes::summarize_note,
            notes_api::presentation::http::health::health,
        ),
        components(schemas(
            notes_api::presentation::http::notes::Note,
            notes_api::presentation::http::notes::CreateNoteRequest,
            notes_api::presentation::http::notes::UpdateNoteRequest,
            notes_api::presentation::http::notes::DeleteNoteResponse,
            notes_api::presentation::http::error::ErrorBody,
            notes_api::presentation::http::health::HealthResp,
        )),
        tags(
            (name = "Notes", description = "Note CRUD and AI summarization"),
            (name = "Health", description = "System health checks")
        )
    )]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "notes_api=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(
        api_port = cfg.api_port,
        model = %cfg.gemini_model,
        "Starting notes backend"
    );

    // Database: fatal at startup if still unreachable after the retry window
    let pool = notes_api::infrastructure::db::connect_pool(
        &cfg.database_url,
        cfg.db_connect_attempts,
    )
    .await?;
    notes_api::infrastructure::db::migrate(&pool).await?;

    let note_repo = Arc::new(
        notes_api::infrastructure::db::repositories::note_repository_sqlx::SqlxNoteRepository::new(
            pool.clone(),
        ),
    );
    let summarizer = Arc::new(notes_api::infrastructure::ai::gemini::GeminiSummarizer::from_config(
        &cfg,
    ));

    let services = AppServices::new(note_repo, summarizer);
    let ctx = AppContext::new(cfg.clone(), services);

    // Build CORS
    let cors = if let Some(origin) = cfg.frontend_url.clone() {
        match HeaderValue::from_str(&origin) {
            Ok(v) => cors_layer(AllowOrigin::exact(v)),
            Err(_) => cors_layer(AllowOrigin::mirror_request()),
        }
    } else if cfg.is_production {
        // FRONTEND_URL is mandatory in production (enforced earlier); deny all as fallback
        cors_layer(AllowOrigin::exact(HeaderValue::from_static("http://invalid")))
    } else {
        // Development convenience
        cors_layer(AllowOrigin::mirror_request())
    };

    let app = Router::new()
        .nest(
            "/api",
            notes_api::presentation::http::health::routes(pool.clone()),
        )
        .nest(
            "/api",
            notes_api::presentation::http::notes::routes(ctx.clone()),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .fallback_service(
            ServeDir::new(&cfg.static_dir)
                .fallback(ServeFile::new(format!("{}/index.html", cfg.static_dir))),
        )
        .layer(cors)
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%api_addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(api_addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down, closing DB pool");
    pool.close().await;
    Ok(())
}

fn cors_layer(origin: AllowOrigin) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            http::Method::GET,
            http::Method::POST,
            http::Method::PUT,
            http::Method::DELETE,
            http::Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE])
        .allow_credentials(true)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?e, "failed to install shutdown signal handler");
    } else {
        info!("Shutdown signal received");
    }
}
