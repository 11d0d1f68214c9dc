mod api;
mod middleware;
mod session;

use std::sync::Arc;

use mindflow_sentiment::{SentimentClassifier, SentimentConfig};
use mindflow_users::UsersClient;
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, default_rate_limit_state, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Arc::new(mindflow_core::load_app_config()?);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!(env = %config.env, bind_addr = %config.bind_addr, "starting mindflow server");

    let pool = mindflow_db::connect_pool(&config.database).await?;
    mindflow_db::run_migrations(&pool).await?;

    let classifier = SentimentClassifier::new(SentimentConfig::from_app_config(&config))?;
    if !classifier.is_configured() {
        tracing::warn!("HUGGING_FACE_API_KEY not set; entries will be saved with a neutral mood");
    }

    let users = UsersClient::new(
        &config.users_service_api_url,
        &config.users_service_api_key,
        config.users_service_timeout_secs,
    )?;

    let app = build_app(
        AppState {
            pool,
            classifier,
            users,
        },
        default_rate_limit_state(),
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
