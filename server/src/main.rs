//! campus-intake server: wires configuration, Postgres, SMTP and HTTP clients into the router.
//!
//! Run from repo root: `cargo run -p campus-intake-server`

use campus_intake::{
    app, ensure_database_exists, ensure_tables, http_client, AppState, HttpCompanyDirectory, PgCompanyStore,
    PgSchoolStore, SanityClient, SiteConfig, SmtpMailer,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = SiteConfig::load()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("campus_intake=info,tower_http=info")),
        )
        .init();

    ensure_database_exists(&config.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&config.database_url)
        .await?;
    ensure_tables(&pool).await?;

    let http = http_client(config.http_timeout())?;
    let state = AppState {
        mailer: Arc::new(SmtpMailer::from_config(&config.smtp)?),
        companies: Arc::new(PgCompanyStore::new(pool.clone())),
        directory: Arc::new(HttpCompanyDirectory::new(http.clone(), &config.company_upstream_url)),
        schools: Arc::new(PgSchoolStore::new(pool)),
        cms: Arc::new(SanityClient::new(http, &config.cms)),
    };

    let router = app(state, config.body_limit_bytes);
    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
