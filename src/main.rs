mod client;
mod config;
mod errors;
mod handlers;
mod models;
mod services;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};

use crate::client::HttpEmployeeClient;
use crate::config::Config;
use crate::services::employee::EmployeeService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|err| {
        error!("Invalid configuration: {}", err);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string())
    })?;

    let client = Arc::new(HttpEmployeeClient::new(config.employee_api_url.clone()));
    let service = web::Data::new(EmployeeService::new(client));

    info!("Proxying employee API at {}", config.employee_api_url);
    info!("Starting server at {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(service.clone())
            .configure(handlers::employee::configure)
    })
    .bind(config.bind_addr())?
    .run()
    .await
}
