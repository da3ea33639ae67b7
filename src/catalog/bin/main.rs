use std::net::SocketAddr;
use lambda_http::{run, Error};
use tracing::{error, info};
use book_catalog::books::factory::create_book_repository;
use book_catalog::books::repository::BookRepository;
use book_catalog::catalog::controller::build_router;
use book_catalog::catalog::seed::seed_catalog;
use book_catalog::core::controller::AppState;
use book_catalog::core::domain::{Configuration, ServeMode};
use book_catalog::utils::logs::setup_tracing;

// See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Configuration::from_env()?;
    setup_tracing(config.log_level.as_str());
    info!("starting catalog branch={} store={} mode={}", config.branch_id, config.store, config.serve_mode);

    let repository = create_book_repository(&config).await?;
    if config.reset_and_seed {
        seed_catalog(repository.as_ref()).await?;
    }
    let state = AppState::new(&config, repository.clone());

    let res = match config.serve_mode {
        ServeMode::Lambda => run(build_router::<lambda_http::Body>(state)).await,
        ServeMode::Http => {
            let addr: SocketAddr = config.bind_addr.parse()?;
            info!("listening on {}", addr);
            axum::Server::bind(&addr)
                .serve(build_router::<axum::body::Body>(state).into_make_service())
                .with_graceful_shutdown(shutdown_signal())
                .await
                .map_err(Error::from)
        }
    };

    repository.close().await;
    info!("catalog stopped");
    res
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
}
