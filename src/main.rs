mod config;
mod constants;
mod errors;
mod handlers;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{debug, info};
use sqlx::postgres::PgPoolOptions;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::CONFIG;
use crate::constants::ERR_INVALID_REQUEST_BODY;
use crate::errors::ApiError;
use crate::openapi::ApiDoc;
use crate::services::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Connect to PostgreSQL
    info!("Connecting to PostgreSQL...");
    let pool = PgPoolOptions::new()
        .max_connections(CONFIG.db_max_connections)
        .connect(&CONFIG.database_url)
        .await
        .expect("Failed to connect to PostgreSQL");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");
    info!("Connected to PostgreSQL successfully!");

    // Initialize services
    let user_service = web::Data::new(UserService::new(pool));

    // Start HTTP server
    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(user_service.clone())
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                debug!("Rejected request body: {}", err);
                ApiError::BadRequest(ERR_INVALID_REQUEST_BODY.to_string()).into()
            }))
            .configure(routes::configure_routes)
            .service(
                SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(&server_addr)?
    .run()
    .await
}
