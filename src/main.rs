use review_notifier::config::{environment::log_file_from_env, init_tracing, Config};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let log_file = log_file_from_env();
    if let Err(e) = init_tracing(log_file.as_deref()) {
        eprintln!("Cannot open log file {:?}: {}; logging to stdout only", log_file, e);
        init_tracing(None).expect("Failed to initialize logging");
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("CRITICAL: {}. The bot is stopped.", e);
            std::process::exit(1);
        }
    };

    let engine = review_notifier::create_engine(&config);

    engine
        .run_until(config.initial_watermark, async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Cannot listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await;
}
