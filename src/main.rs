use actix_web::HttpServer;
use weather_dashboard::{create_app, telemetry, AppState, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let server_config = ServerConfig::from_env();

    if let Err(e) = telemetry::init_tracing(server_config.log_format) {
        eprintln!("failed to initialise logging: {e}");
    }

    let state = AppState::from_env().map_err(std::io::Error::other)?;

    if state.weather.config().api_key.is_empty() {
        tracing::warn!("OPENWEATHER_API_KEY is not set; every lookup will fail upstream");
    }

    tracing::info!(
        bind_address = %server_config.bind_address,
        default_city = %state.weather.config().default_city,
        forecast_days = state.weather.config().forecast_days,
        "Starting weather dashboard API"
    );

    HttpServer::new(move || create_app(state.clone()))
        .bind(&server_config.bind_address)?
        .run()
        .await
}
