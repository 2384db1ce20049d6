use std::{env, net::SocketAddr, sync::Arc};

use directors_cut_api::{
    app::{config::DEFAULT_APP_ENV, env::Envy, router},
    genai::apis::gemini::client::{config::Config, gemini_client::GeminiClient},
    AppState,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or(DEFAULT_APP_ENV.to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("invalid environment: {}", e);
            std::process::exit(1);
        }
    };

    // generator
    let gemini = match GeminiClient::new(Config::from_envy(&envy)) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("failed to build gemini client: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        env = envy.app_env(),
        model = %gemini.config.model,
        "using gemini"
    );

    let port = envy.port();
    let state = AppState {
        envy: Arc::new(envy),
        generator: Arc::new(gemini),
    };

    // app
    let app = router::create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    if let Err(e) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!(%e);
        std::process::exit(1);
    }
}
