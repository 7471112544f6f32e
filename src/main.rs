use course_ai_server::Config;
use course_ai_server::api::{self, AppState};
use course_ai_server::courses::{CourseRepository, InMemoryCourseRepository};
use course_ai_server::generation::TextGenerator;
use course_ai_server::inference::build_inference_client;
use course_ai_server::security::ApiKeyAuth;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let config = Config::load()?;

    // RUST_LOG wins over LOG_LEVEL when both are set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_line_number(true)
        .init();

    tracing::info!("🚀 Starting Course AI Server");
    tracing::info!(
        "HF_ACCESS_TOKEN available: {}",
        config.inference.access_token.is_some()
    );

    // The inference client is built once and only read afterwards
    let client = build_inference_client(&config.inference);
    if client.is_none() {
        tracing::warn!("⚠️ Hosted inference disabled, all generation uses template output");
    }
    let generator = TextGenerator::new(client);

    let courses: Arc<dyn CourseRepository> = match &config.courses.seed_path {
        Some(path) => Arc::new(InMemoryCourseRepository::from_seed_file(path).await?),
        None => Arc::new(InMemoryCourseRepository::new()),
    };

    let auth = ApiKeyAuth::new(config.auth.api_keys.clone());
    if auth.key_count() == 0 {
        tracing::warn!("⚠️ No API_KEYS configured, protected routes will reject every request");
    }

    let app = api::router(AppState::new(generator, courses, auth));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("🌐 Server starting on http://{}", addr);
    tracing::info!("📡 Available endpoints:");
    tracing::info!("  • GET  /health - Health check");
    tracing::info!("  • POST /api/ai/generate-lesson - Lesson content");
    tracing::info!("  • POST /api/ai/enhance/{{course_id}} - Enhancement suggestions (auth)");
    tracing::info!("  • POST /api/ai/generate-course-structure - Course outline");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("👋 Server shutdown complete");
    Ok(())
}

// Ctrl+C for interactive runs, SIGTERM for containers
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("🛑 Shutdown signal received");
}
