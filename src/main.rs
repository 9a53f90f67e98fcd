use clap::Parser;
use hotel_assistant::{
    assistant::{build_resolver, ResponseCatalog},
    config::Config,
    hotel::{HotelContent, HotelService},
    orders::{Menu, OrderService},
    router,
    shared::AppState,
    websockets::{ChatRelay, InMemoryRoomRegistry, RoomRegistry},
};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Pick up a local .env before clap reads the environment
    dotenvy::dotenv().ok();
    let config = Config::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hotel_assistant=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting hotel assistant server");

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Server stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = match &config.responses_path {
        Some(path) => {
            info!(path = %path.display(), "Loading response catalog");
            ResponseCatalog::load(path)?
        }
        None => ResponseCatalog::bundled()?,
    };
    let catalog = Arc::new(catalog);
    info!(templates = catalog.len(), "Response catalog ready");

    let resolver = build_resolver(&config, catalog)?;

    // Create shared application state with dependency injection
    let registry: Arc<dyn RoomRegistry> = Arc::new(InMemoryRoomRegistry::new());
    let relay = Arc::new(ChatRelay::new(Arc::clone(&registry), resolver));
    let hotel_service = Arc::new(HotelService::new(Arc::new(HotelContent::bundled()?)));
    let order_service = Arc::new(OrderService::new(Arc::new(Menu::bundled()?)));

    let app_state = AppState::new(
        registry,
        relay,
        hotel_service,
        order_service,
        config.public_base_url.clone(),
    );

    let app = router::app(app_state, &config.static_dir);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(
        address = %address,
        public_base_url = %config.public_base_url,
        static_dir = %config.static_dir.display(),
        "Server listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
