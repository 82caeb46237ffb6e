mod config;
mod error;
mod generator;
mod locale;
mod query;
mod services;

use crate::config::AppConfig;
use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;
use std::io;

const HOST: &str = "0.0.0.0";

#[actix_web::main]
async fn main() -> io::Result<()> {
    let dotenv = config::load_dotenv();
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    config::log_dotenv(dotenv);

    let config = AppConfig::from_env().map_err(io::Error::other)?;
    let port = config.port;
    let form_limit = config.max_upload_bytes;

    info!("Server running at http://{}:{}", HOST, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(web::FormConfig::default().limit(form_limit))
            .app_data(web::Data::new(config.clone()))
            .service(services::api::configure_routes())
            .service(services::page::configure_routes())
    })
    .bind((HOST, port))?
    .run()
    .await
}
