//! GeoQuiz reveal demo entry point.

use std::error::Error;

use geoquiz_demo::config::DemoConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting GeoQuiz reveal demo");

    let config = DemoConfig::from_env()?;
    let view = geoquiz_demo::run(config).await?;

    println!("{}", serde_json::to_string_pretty(&view)?);

    Ok(())
}
