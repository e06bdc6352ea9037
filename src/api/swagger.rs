use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ruwa Admin Service API",
        version = "1.0.0",
        description = "REST backend for the Ruwa admin dashboard.\n\n**Authentication:** All `/api/admin` and `/api/services/*/admin` endpoints require a JWT Bearer token.\n\n**Features:**\n- Service application triage (ambulance, jeevan-suraksha, kendra, card-apply)\n- Employee management with live presence\n- Platform user directory\n- Public-site content blocks\n- Dashboard aggregation",
        contact(
            name = "Ruwa Platform Team",
            email = "support@ruwa.in"
        )
    ),
    paths(
        // Auth
        crate::api::auth::login,
        crate::api::auth::register,
        crate::api::auth::verify_token,
        crate::api::auth::get_me,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,

        // Applications
        crate::api::applications::list_applications,
        crate::api::applications::update_application_status,

        // Employees
        crate::api::employees::list_employees,
        crate::api::employees::create_employee,

        // Users
        crate::api::users::list_users,

        // Dashboard
        crate::api::dashboard::get_summary,
        crate::api::dashboard::todays_leads_hourly,
    ),
    components(
        schemas(
            // Auth
            crate::services::auth_service::LoginRequest,
            crate::services::auth_service::RegisterRequest,
            crate::services::auth_service::AuthResponse,
            crate::services::auth_service::AdminInfo,

            // Health & Metrics
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,

            // Applications
            crate::models::application::ServiceDomain,
            crate::models::application::ApplicationStatus,
            crate::models::application::UpdateStatusRequest,
            crate::models::application::DocumentRef,

            // Employees
            crate::models::employee::CreateEmployeeRequest,
            crate::models::employee::UpdateEmployeeRequest,
            crate::models::employee::Qualification,
            crate::models::employee::GeoPoint,
            crate::models::employee::HeartbeatRequest,
            crate::models::employee::EmployeeLocation,

            // Dashboard
            crate::services::dashboard_service::DashboardSummary,
            crate::services::dashboard_service::DomainCount,
        )
    ),
    tags(
        (name = "Auth", description = "Admin authentication endpoints. Local email/password with HS256 JWT bearer tokens."),
        (name = "Health", description = "Health check and system metrics endpoints for monitoring service status."),
        (name = "Applications", description = "Triage endpoints for service applications: list, review, approve/reject, export."),
        (name = "Employees", description = "Employee CRUD, presence heartbeat, and the location feed."),
        (name = "Users", description = "Read-only platform user directory with services-applied drill-down."),
        (name = "Dashboard", description = "Summary counts and today's hourly lead series."),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            );
        }
    }
}
