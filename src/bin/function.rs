use summary::{api, app_state::AppState, config::Config, telemetry};
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    telemetry::init_tracing();

    let config = Config::from_env().inspect_err(|e| error!("configuration error: {}", e))?;
    let state = AppState::from_config(&config)?;

    lambda_http::run(api::function_router(state)).await
}
