use carechat::config::Config;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!("Loaded configuration: {:?}", config);

    carechat::serve(config).await;
}
