mod core;
mod features;
mod modules;
mod shared;

use crate::core::config::Config;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::{database, middleware};
use crate::features::admin::{
    routes as admin_routes, AdminAuthService, AdminService, PgAdminRepository, SessionTokenService,
};
use crate::features::contacts::{routes as contacts_routes, ContactService, PgContactRepository};
use crate::features::freelancers::{
    routes as freelancers_routes, ListingService, PgFreelancerRepository, RegistrationService,
};
use crate::features::notifications::{
    routes as notifications_routes, ContactEmailService, HttpNotificationDispatcher,
};
use crate::features::showcase::{routes as showcase_routes, PgShowcaseRepository, ShowcaseService};
use crate::modules::mailer::ResendClient;
use crate::modules::storage::MinIOClient;
use axum::extract::DefaultBodyLimit;
use axum::{middleware::from_fn, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(
        "System info: tokio_worker_threads={}, pid={}",
        worker_threads,
        std::process::id()
    );
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    database::run_migrations(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    tracing::info!("Database migrations completed successfully");

    // Repositories
    let freelancer_repository = Arc::new(PgFreelancerRepository::new(pool.clone()));
    let contact_repository = Arc::new(PgContactRepository::new(pool.clone()));
    let admin_repository = Arc::new(PgAdminRepository::new(pool.clone()));
    let showcase_repository = Arc::new(PgShowcaseRepository::new(pool.clone()));

    // Initialize MinIO client for profile photos
    let minio_client = Arc::new(
        MinIOClient::new(config.minio.clone())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to initialize MinIO client: {}", e))?,
    );
    minio_client
        .ensure_bucket_exists()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to ensure MinIO bucket exists: {}", e))?;
    tracing::info!(
        "MinIO client initialized for bucket: {}",
        minio_client.bucket_name()
    );

    // Mail provider behind the email function
    let mailer = Arc::new(ResendClient::new(&config.mail));
    if !mailer.is_configured() {
        tracing::warn!("RESEND_API_KEY not set; contact emails will fail until it is configured");
    }
    let contact_email_service = Arc::new(ContactEmailService::new(
        mailer,
        config.mail.from.clone(),
    ));

    let dispatcher = Arc::new(
        HttpNotificationDispatcher::new(&config.notification)
            .map_err(|e| anyhow::anyhow!("Failed to build notification client: {}", e))?,
    );
    tracing::info!(
        "Contact notifications go to {}",
        config.notification.function_url
    );

    // Feature services
    let registration_service = Arc::new(RegistrationService::new(
        freelancer_repository.clone(),
        minio_client.clone(),
    ));
    let listing_service = Arc::new(ListingService::new(freelancer_repository.clone()));
    let contact_service = Arc::new(ContactService::new(
        contact_repository.clone(),
        freelancer_repository.clone(),
        dispatcher,
    ));
    let showcase_service = Arc::new(ShowcaseService::new(showcase_repository));

    let session_tokens = Arc::new(SessionTokenService::new(&config.admin_auth));
    let admin_auth_service = Arc::new(AdminAuthService::new(
        admin_repository.clone(),
        session_tokens.clone(),
    ));
    let admin_service = Arc::new(AdminService::new(
        admin_repository,
        freelancer_repository,
        contact_repository,
    ));
    tracing::info!("Feature services initialized");

    if let Some((username, password)) = config.admin_auth.bootstrap_credentials() {
        admin_auth_service
            .ensure_admin(username, password)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bootstrap admin account: {}", e))?;
    }

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    // Simple health check endpoint
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    // Public routes
    let public_routes = Router::new()
        .merge(freelancers_routes::routes(registration_service, listing_service))
        .merge(contacts_routes::routes(contact_service))
        .merge(showcase_routes::routes(showcase_service));

    let mut cors_origins = config.app.cors_allowed_origins.clone();
    if !cors_origins.iter().any(|o| o == "*" || *o == config.app.frontend_url) {
        cors_origins.push(config.app.frontend_url.clone());
    }

    let api = Router::new()
        .merge(swagger)
        .merge(public_routes)
        .nest(
            "/api/admin",
            admin_routes::routes(admin_service, admin_auth_service, session_tokens),
        )
        .merge(health_route)
        .layer(DefaultBodyLimit::max(config.app.max_request_body_size))
        .layer(middleware::cors_layer(cors_origins));

    // The email function answers its own preflight, so it sits outside the CORS layer
    let app = Router::new()
        .merge(api)
        .merge(notifications_routes::function_routes(contact_email_service))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nodelay(true)?;

    #[cfg(target_os = "linux")]
    {
        let keepalive = socket2::TcpKeepalive::new()
            .with_time(std::time::Duration::from_secs(60))
            .with_interval(std::time::Duration::from_secs(10))
            .with_retries(3);
        socket.set_tcp_keepalive(&keepalive)?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
        socket.set_tcp_keepalive(&keepalive)?;
    }

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
