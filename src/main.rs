mod api;
mod database;
mod jobs;
mod middleware;
mod models;
mod seeds;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "3002".to_string());
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    log::info!("🚀 Starting Ruwa Admin Service...");
    log::info!("📊 Database: {}", database_url);

    // Initialize MongoDB connection
    let db = database::MongoDB::new(&database_url)
        .await
        .expect("Failed to connect to MongoDB");

    let db_data = web::Data::new(db.clone());

    log::info!("✅ MongoDB connected successfully");

    // 🌱 Bootstrap the first admin account when the collection is empty
    seeds::admin_seed::seed_default_admin(&db).await;

    // 📡 Start the employee presence sweeper
    log::info!("📅 Starting background jobs...");
    jobs::presence_sweeper::start_presence_sweeper(db.clone()).await;
    log::info!("✅ Background jobs started");

    // Dashboard origins; extras via CORS_ORIGINS (comma separated)
    let extra_origins: Vec<String> = env::var("CORS_ORIGINS")
        .map(|v| {
            v.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default();

    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);
    log::info!("📄 OpenAPI spec at: http://{}:{}/api-docs/openapi.json", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_origin("http://localhost:3000") // Dashboard dev server (CRA)
            .allowed_origin("http://localhost:5173") // Dashboard dev server (Vite)
            .allowed_origin("http://127.0.0.1:3000")
            .allowed_origin("http://127.0.0.1:5173")
            .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .expose_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::CONTENT_DISPOSITION,
            ])
            .supports_credentials()
            .max_age(3600);

        for origin in &extra_origins {
            cors = cors.allowed_origin(origin);
        }

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(db_data.clone())
            .wrap(cors)
            .wrap(middleware::SecurityHeaders)
            .wrap(Logger::default())
            // Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            // Health check
            .route("/health", web::get().to(api::health::health_check))
            // Metrics
            .route("/metrics", web::get().to(api::metrics::get_metrics))
            // Auth endpoints
            .service(
                web::scope("/api/auth")
                    .route("/login", web::post().to(api::auth::login))
                    .route("/register", web::post().to(api::auth::register))
                    .route("/verify", web::get().to(api::auth::verify_token))
                    .route("/me", web::get().to(api::auth::get_me)),
            )
            // ==================== SERVICE APPLICATIONS ====================
            // One parameterized scope instead of a copy per domain; the
            // {domain} segment is validated against the known set.
            .service(
                web::scope("/api/services/{domain}/admin")
                    .wrap(middleware::auth::AuthMiddleware)
                    .service(api::applications::list_applications)
                    .service(api::applications::export_applications)
                    .service(api::applications::update_application_status)
                    .service(api::applications::get_application) // catch-all, stays last
                    .service(api::applications::delete_application),
            )
            // ==================== EMPLOYEES ====================
            .service(
                web::scope("/api/admin/employees")
                    .wrap(middleware::auth::AuthMiddleware)
                    .service(api::employees::list_employees)
                    .service(api::employees::create_employee)
                    .service(api::employees::employee_locations)
                    .service(api::employees::employee_heartbeat)
                    .service(api::employees::get_employee)
                    .service(api::employees::update_employee)
                    .service(api::employees::delete_employee),
            )
            // ==================== PLATFORM USERS (read-only) ====================
            .service(
                web::scope("/api/admin/users")
                    .wrap(middleware::auth::AuthMiddleware)
                    .service(api::users::list_users)
                    .service(api::users::user_services),
            )
            // ==================== CONTENT BLOCKS ====================
            .service(
                web::scope("/api/admin/content")
                    .wrap(middleware::auth::AuthMiddleware)
                    .service(api::content::get_hero)
                    .service(api::content::put_hero)
                    .service(api::content::get_about)
                    .service(api::content::put_about)
                    .service(api::content::list_slides)
                    .service(api::content::create_slide)
                    .service(api::content::update_slide)
                    .service(api::content::delete_slide)
                    .service(api::content::list_service_cards)
                    .service(api::content::create_service_card)
                    .service(api::content::update_service_card)
                    .service(api::content::delete_service_card)
                    .service(api::content::list_testimonials)
                    .service(api::content::create_testimonial)
                    .service(api::content::update_testimonial)
                    .service(api::content::delete_testimonial),
            )
            // ==================== CONTACT MESSAGES ====================
            .service(
                web::scope("/api/admin/messages")
                    .wrap(middleware::auth::AuthMiddleware)
                    .service(api::messages::messages_today)
                    .service(api::messages::list_messages),
            )
            // ==================== DASHBOARD ====================
            // Registered last: the bare /api/admin scope
            .service(
                web::scope("/api/admin")
                    .wrap(middleware::auth::AuthMiddleware)
                    .service(api::dashboard::get_summary)
                    .service(api::dashboard::leads_today)
                    .service(api::dashboard::todays_leads_hourly),
            )
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
