use alzheimer_risk::risk_prediction::classifier::load_model;
use alzheimer_risk::risk_prediction::risk_prediction::RiskPredictor;
use alzheimer_risk::server::run_server;
use alzheimer_risk::utils::load_config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_config();

    // Loaded once; on failure the server still runs with prediction disabled
    let model = load_model(&config.model_path);
    let predictor = RiskPredictor::new(model, config.language);

    run_server(&config, predictor).await?;
    Ok(())
}
