use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, web};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{Layer, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod cli;
mod config;
mod db;
mod email;
mod shutdown;

use crate::api::admin::handlers::admin_config;
use crate::api::application::ApplicationService;
use crate::api::application::handlers::application_config;
use crate::api::auth::AuthService;
use crate::api::auth::handlers::auth_config;
use crate::api::health::health_config;
use crate::api::job::JobService;
use crate::api::job::handlers::job_config;
use crate::api::validation;
use crate::config::Config;
use crate::shutdown::ShutdownCoordinator;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");

    // Create directories for logs and uploaded resumes
    std::fs::create_dir_all(&config.log_dir).expect("Failed to create logs directory");
    std::fs::create_dir_all(&config.upload_dir).expect("Failed to create uploads directory");

    // Initialize file-based logging with daily rotation and level separation
    // Log files will be created as: logs/info.2024-12-22.log, logs/error.2024-12-22.log, etc.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    let info_file = tracing_appender::rolling::daily(&config.log_dir, "info.log");
    let warn_file = tracing_appender::rolling::daily(&config.log_dir, "warn.log");
    let error_file = tracing_appender::rolling::daily(&config.log_dir, "error.log");

    let info_layer = tracing_subscriber::fmt::layer()
        .with_writer(info_file)
        .with_ansi(false)
        .with_filter(LevelFilter::INFO);

    let warn_layer = tracing_subscriber::fmt::layer()
        .with_writer(warn_file)
        .with_ansi(false)
        .with_filter(LevelFilter::WARN);

    let error_layer = tracing_subscriber::fmt::layer()
        .with_writer(error_file)
        .with_ansi(false)
        .with_filter(LevelFilter::ERROR);

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(info_layer)
        .with(warn_layer)
        .with(error_layer)
        .init();

    // Get database connection pool
    let pool = db::connection::get_connection(&config.database_url, config.max_db_connections)
        .await
        .expect("Failed to connect to database");

    // Run migrations on startup
    db::migrations::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    // One-shot administrative commands run against the pool and exit
    let cli = cli::Cli::parse();
    if let Some(command) = cli.command {
        let result = cli::run(command, &pool).await;
        pool.close().await;
        result.expect("Command failed");
        return Ok(());
    }

    info!("Starting hireboard application");
    info!("Configuration loaded:");
    info!("  - Bind address: {}", config.bind_addr);
    info!("  - Max payload size: {} bytes", config.max_payload_size);
    info!("  - Max upload size: {} bytes", config.max_upload_size);
    info!("  - Max database connections: {}", config.max_db_connections);
    info!("  - Upload directory: {}", config.upload_dir.display());

    let mailer = email::Mailer::from_config(&config);

    let server_pool = pool.clone();
    let server_config = config.clone();

    let server = HttpServer::new(move || {
        let auth_service = web::Data::new(AuthService::new(
            server_pool.clone(),
            server_config.jwt_secret.clone(),
            server_config.google_client_id.clone(),
        ));
        let job_service = web::Data::new(JobService::new(server_pool.clone()));
        let application_service = web::Data::new(ApplicationService::new(
            server_pool.clone(),
            mailer.clone(),
            server_config.upload_dir.clone(),
        ));

        // Credentialed CORS restricted to the configured origins
        let mut cors = Cors::default()
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();
        for origin in &server_config.cors_origins {
            cors = cors.allowed_origin(origin);
        }

        let payload_config = web::PayloadConfig::default().limit(server_config.max_payload_size);

        let multipart_config =
            validation::multipart_config(server_config.max_upload_size + 64 * 1024);

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(server_pool.clone())) // Share DB pool across workers
            .app_data(web::Data::new(server_config.clone()))
            .app_data(auth_service)
            .app_data(job_service)
            .app_data(application_service)
            .app_data(payload_config) // Global payload size limit
            .app_data(multipart_config) // Upload size limit
            .app_data(validation::json_config()) // Global validation config
            .app_data(validation::web_json_config()) // Same error shape for plain Json bodies
            .configure(health_config)
            .configure(auth_config)
            .configure(application_config) // must precede job_config for /api/jobs/{id}/apply
            .configure(job_config)
            .configure(admin_config)
            .service(Files::new("/uploads", server_config.upload_dir.clone()))
    });

    info!("Server starting on http://{}", config.bind_addr);

    let server = server.bind(&config.bind_addr)?.run();
    let server_handle = server.handle();
    let server_task = tokio::spawn(server);

    let coordinator = ShutdownCoordinator::new(server_handle, server_task, pool);
    coordinator.wait_for_shutdown().await
}
