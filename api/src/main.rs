use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::info;
use tracing_actix_web::TracingLogger;

use otp_api::app::create_app;
use otp_api::routes::otp::AppState;
use otp_api::telemetry::init_tracing;
use otp_core::{CodeStore, OtpManager, OtpManagerConfig};
use otp_infra::create_notifier;
use otp_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("failed to load configuration")?;
    init_tracing(&config.logging)?;

    info!(
        environment = %config.environment,
        event = "server_starting",
        "Starting MailOTP API server"
    );

    let manager_config = OtpManagerConfig::try_from(&config.otp)
        .context("invalid OTP configuration")?;
    let notifier = create_notifier(&config.notifier, config.otp.expiry_minutes())
        .context("failed to initialize notifier")?;
    let store = Arc::new(CodeStore::with_shards(config.otp.store_shards));
    let otp_manager = Arc::new(OtpManager::new(store, notifier, manager_config));
    let app_state = web::Data::new(AppState::new(otp_manager));

    let bind_address = config.server.bind_address();
    info!(
        address = %bind_address,
        cooldown_seconds = config.otp.cooldown_seconds,
        expiry_seconds = config.otp.expiry_seconds,
        "Server will bind to address"
    );

    let mut server = HttpServer::new(move || {
        create_app(app_state.clone()).wrap(TracingLogger::default())
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    info!(event = "server_stopped", "MailOTP API server stopped");
    Ok(())
}
