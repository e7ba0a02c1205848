use cab_booking::config::{Config, Mode};
use cab_booking::engine::Engine;
use cab_booking::error::Error;
use cab_booking::{demo, server};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env().map_err(|err| {
        tracing::error!("configuration error: {}", err);
        err
    })?;

    let mut engine = Engine::new();

    match config.mode {
        Mode::Demo => demo::run(&mut engine),
        Mode::Serve => server::serve(engine.into_shared(), config.addr).await,
    }
}
