//! main file for the server

pub(crate) mod controller;
pub(crate) mod database;
pub(crate) mod model;
pub(crate) mod service;
pub(crate) mod state;
pub(crate) mod util;

use actix_web::{middleware::Logger, web, App, HttpServer};
use tokio_postgres::Client;
use crate::server::model::config::ServerConfig;
use crate::server::state::AppState;

/// Run the server
pub(crate) async fn run(ServerConfig { addr, .. }: ServerConfig, state: AppState) -> std::io::Result<()> {
    let data = web::Data::new(state);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(data.clone())
            .configure(controller::configure::<Client>)
    })
        .bind(addr)?
        .run()
        .await
}
