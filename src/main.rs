use anyhow::Context;

use skillbridge::app::{build_app, serve};
use skillbridge::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "skillbridge=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let state = AppState::init().await?;

    // The service cannot run without its schema; a failed migration aborts startup.
    sqlx::migrate!("./migrations")
        .run(&state.db)
        .await
        .context("apply schema migrations")?;

    serve(build_app(state)).await
}
