use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use article_shelf::{
    config::Config,
    api::routes::create_router,
    AppState,
};

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    init_tracing(config.log_json);

    let server_addr = config.server_addr;
    tracing::info!(
        addr = %server_addr,
        data_path = %config.data_path.display(),
        public_dir = %config.public_dir.display(),
        "starting server"
    );

    let app_state = AppState::new(config);
    let app = create_router(app_state);

    let listener = TcpListener::bind(server_addr).await?;
    tracing::info!(addr = %server_addr, "server is listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
