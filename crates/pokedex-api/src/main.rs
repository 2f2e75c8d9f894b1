//! pokedex API server entry point.

use pokedex_api::{
    config::ApiConfig,
    db::connect_and_migrate,
    pokeapi::PokeApiClient,
    router::{build_router, AppState},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = ApiConfig::from_env()?;
    let pool = connect_and_migrate(&config.database_url).await?;
    let state = AppState {
        pool,
        jwt_secret: config.jwt_secret.clone(),
        pokeapi: PokeApiClient::new(config.pokeapi_url.clone()),
    };
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    log::info!("listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
