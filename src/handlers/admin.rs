use crate::error::AppError;
use crate::models::*;
use crate::services::{CustomerService, HistoryService};
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/admin/pending",
    tag = "admin",
    responses(
        (status = 200, description = "Customers waiting for approval, newest first", body = [PendingCustomerResponse]),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
/// Codes waiting for a staff member to approve them.
pub async fn get_pending(service: web::Data<CustomerService>) -> Result<HttpResponse> {
    match service.list_pending().await {
        Ok(list) => {
            let data: Vec<PendingCustomerResponse> = list.into_iter().map(Into::into).collect();
            Ok(HttpResponse::Ok().json(json!({ "success": true, "data": data })))
        }
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/admin/approved",
    tag = "admin",
    responses(
        (status = 200, description = "Approved codes not spun yet, newest first", body = [ApprovedCustomerResponse]),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
/// Codes that can spin but have not yet.
pub async fn get_approved(service: web::Data<CustomerService>) -> Result<HttpResponse> {
    match service.list_approved().await {
        Ok(list) => {
            let data: Vec<ApprovedCustomerResponse> = list.into_iter().map(Into::into).collect();
            Ok(HttpResponse::Ok().json(json!({ "data": data })))
        }
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/admin/approve",
    tag = "admin",
    request_body = CodeRequest,
    responses(
        (status = 200, description = "Code activated", body = MessageResponse),
        (status = 400, description = "Missing code, unknown code or code not pending", body = ErrorResponse)
    )
)]
/// Activates a pending code. Approved and used codes are left untouched.
pub async fn approve(
    service: web::Data<CustomerService>,
    request: web::Json<CodeRequest>,
) -> Result<HttpResponse> {
    match service.approve(&request.code).await {
        Ok(true) => Ok(HttpResponse::Ok().json(
            MessageResponse::ok("Code activated! The customer can spin now.")
                .with_code(request.code.trim()),
        )),
        Ok(false) => Ok(AppError::StateConflict(
            "Code does not exist or is not awaiting approval".into(),
        )
        .error_response()),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/admin/delete",
    tag = "admin",
    request_body = CodeRequest,
    responses(
        (status = 200, description = "Customer deleted", body = MessageResponse),
        (status = 400, description = "Missing code", body = ErrorResponse),
        (status = 404, description = "Code does not exist", body = ErrorResponse)
    )
)]
/// Deletes a customer by code, whatever its status.
pub async fn delete_customer(
    service: web::Data<CustomerService>,
    request: web::Json<CodeRequest>,
) -> Result<HttpResponse> {
    match service.delete(&request.code).await {
        Ok(true) => Ok(HttpResponse::Ok().json(MessageResponse::ok("Customer deleted"))),
        Ok(false) => Ok(AppError::NotFound("No customer with this code".into()).error_response()),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/admin/reset",
    tag = "admin",
    responses(
        (status = 200, description = "All customers removed", body = MessageResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
/// Removes every customer to start a new day. History is kept.
pub async fn reset_customers(service: web::Data<CustomerService>) -> Result<HttpResponse> {
    match service.reset_all().await {
        Ok(_) => Ok(HttpResponse::Ok().json(MessageResponse::ok("All customer data cleared"))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/admin/reset-history",
    tag = "admin",
    responses(
        (status = 200, description = "History cleared, numbering restarts at 1", body = MessageResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
/// Clears the winners feed. Customers are kept.
pub async fn reset_history(service: web::Data<HistoryService>) -> Result<HttpResponse> {
    match service.reset_all().await {
        Ok(_) => Ok(HttpResponse::Ok().json(MessageResponse::ok("History has been cleared"))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn admin_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/pending", web::get().to(get_pending))
            .route("/approved", web::get().to(get_approved))
            .route("/approve", web::post().to(approve))
            .route("/delete", web::post().to(delete_customer))
            .route("/reset", web::post().to(reset_customers))
            .route("/reset-history", web::post().to(reset_history)),
    );
}
