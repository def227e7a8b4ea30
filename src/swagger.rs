use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::customer::register,
        handlers::customer::validate_code,
        handlers::spin::spin,
        handlers::spin::get_history,
        handlers::admin::get_pending,
        handlers::admin::get_approved,
        handlers::admin::approve,
        handlers::admin::delete_customer,
        handlers::admin::reset_customers,
        handlers::admin::reset_history,
    ),
    components(
        schemas(
            RegisterRequest,
            CodeRequest,
            PendingCustomerResponse,
            ApprovedCustomerResponse,
            ValidateCodeResponse,
            HistoryEntryResponse,
            WonPrize,
            SpinOutcome,
            MessageResponse,
            ErrorResponse,
            ApiError,
        )
    ),
    tags(
        (name = "customer", description = "Registration and code checks"),
        (name = "spin", description = "Wheel spins and the public winners feed"),
        (name = "admin", description = "Staff approval and maintenance"),
    ),
    info(
        title = "Lucky Wheel API",
        version = "1.0.0",
        description = "Lucky wheel promotion backend REST API documentation"
    ),
    servers(
        (url = "/api", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
