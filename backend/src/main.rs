mod api;
mod auth;
mod config;
mod error;
mod models;
mod payment;
mod store;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;

use migration::{sea_orm::Database, Migrator, MigratorTrait};

use crate::config::Config;
use crate::payment::{PaymentProvider, StripeClient};
use crate::store::{SeaOrmStore, Store};

fn build_cors(origins: &[String]) -> Cors {
    if origins.iter().any(|o| o == "*") {
        log::warn!("Using permissive CORS (allow_any_origin) - not recommended for production");
        return Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .supports_credentials()
            .max_age(3600);
    }

    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let dotenv_loaded = dotenv().is_ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    if dotenv_loaded {
        log::info!("Loaded environment variables from .env");
    } else {
        log::warn!("No .env file found. Using environment variables from the system.");
    }

    let config = Config::from_env();

    // Connect to the database
    let db = Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    db.ping().await.expect("Failed to ping database");
    log::info!("Pinged the database. Successfully connected!");

    // Run migrations
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let store: Arc<dyn Store> = Arc::new(SeaOrmStore::new(db));
    let store = web::Data::from(store);

    let payments: Arc<dyn PaymentProvider> = Arc::new(StripeClient::new(
        config.stripe_secret_key.clone(),
        config.stripe_api_base.clone(),
    ));
    let payments = web::Data::from(payments);

    let auth_settings = web::Data::new(config.auth.clone());
    let cors_origins = config.cors_origins.clone();

    log::info!("Server listening on http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(build_cors(&cors_origins))
            .app_data(store.clone())
            .app_data(payments.clone())
            .app_data(auth_settings.clone())
            .configure(api::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
