use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use lifestyle_architect_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

fn cors(config: &Config) -> Cors {
    match &config.cors_allowed_origin {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header()
            .max_age(3600),
        None => Cors::permissive(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    for missing in config.missing_credentials() {
        log::warn!("{} is not configured", missing);
    }

    let state = AppState::new(config.clone())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    log::info!(
        "starting HTTP server on {}:{} with {} variants (default '{}')",
        config.web_server_host,
        config.web_server_port,
        state.variants.all().len(),
        state.variants.default_id()
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .wrap(cors(&state.config))
            .configure(handlers::configure)
    })
    .bind((config.web_server_host.clone(), config.web_server_port))?
    .run()
    .await
}
