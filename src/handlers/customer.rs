use crate::models::*;
use crate::services::CustomerService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    post,
    path = "/register",
    tag = "customer",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Registration received, waiting for staff approval", body = MessageResponse),
        (status = 400, description = "Blank name", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
/// Registers a customer. The generated code is not returned; staff hand it
/// out after approving the request.
pub async fn register(
    service: web::Data<CustomerService>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse> {
    match service.register(&request.name).await {
        Ok(_code) => Ok(HttpResponse::Ok().json(MessageResponse::ok(
            "Request sent! Please wait for a staff member to confirm.",
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/validate-code",
    tag = "customer",
    request_body = CodeRequest,
    responses(
        (status = 200, description = "Code may spin", body = ValidateCodeResponse),
        (status = 400, description = "Code not activated yet or already used", body = ValidateCodeResponse),
        (status = 404, description = "Code does not exist", body = ValidateCodeResponse)
    )
)]
/// Checks whether a code may spin right now, without consuming it.
pub async fn validate_code(
    service: web::Data<CustomerService>,
    request: web::Json<CodeRequest>,
) -> Result<HttpResponse> {
    match service.check_spinnable(&request.code).await {
        Ok(customer) => Ok(HttpResponse::Ok().json(ValidateCodeResponse {
            valid: true,
            name: Some(customer.name),
            message: "Code is valid. Good luck!".to_string(),
        })),
        Err(e) => {
            let (status, _, message) = e.parts();
            if status.is_server_error() {
                return Ok(e.error_response());
            }
            log::warn!("Code validation failed: {message}");
            Ok(HttpResponse::build(status).json(ValidateCodeResponse {
                valid: false,
                name: None,
                message,
            }))
        }
    }
}

pub fn customer_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/register", web::post().to(register))
        .route("/validate-code", web::post().to(validate_code));
}
