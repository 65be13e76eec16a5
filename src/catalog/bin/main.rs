use std::error::Error;
use tracing::info;
use bookshelf::books::factory::create_book_repository;
use bookshelf::catalog::controller::router;
use bookshelf::core::controller::AppState;
use bookshelf::core::domain::Configuration;
use bookshelf::utils::logs::setup_tracing;

const BRANCH: &str = "main";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    setup_tracing();

    let config = Configuration::from_env(BRANCH);
    let addr = config.bind_addr();
    let state = AppState::new(config, create_book_repository());

    let app = router(state);

    info!("catalog listening on http://{}", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
