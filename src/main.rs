use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local; // timestamp in log lines
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter
use std::sync::Arc;

use lucky_wheel_backend::{
    config::Config,
    database::{create_pools, run_migrations},
    handlers,
    middlewares::create_cors,
    services::*,
    swagger::swagger_config,
    wheel::{PrizeTable, ThreadRandom},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    let config = Config::from_toml().expect("Failed to load configuration");

    // customers and history live in separate databases
    let pools = create_pools(&config.database)
        .await
        .expect("Failed to open databases");

    run_migrations(&pools)
        .await
        .expect("Failed to run database migrations");

    let customer_service = CustomerService::new(pools.customers.clone());
    let history_service = HistoryService::new(pools.history.clone());
    let spin_service = SpinService::new(
        customer_service.clone(),
        history_service.clone(),
        PrizeTable::standard(),
        Arc::new(ThreadRandom),
    );

    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .app_data(handlers::json_config())
            .app_data(web::Data::new(customer_service.clone()))
            .app_data(web::Data::new(history_service.clone()))
            .app_data(web::Data::new(spin_service.clone()))
            .configure(swagger_config)
            .configure(handlers::api_config)
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
