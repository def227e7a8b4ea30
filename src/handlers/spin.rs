use crate::models::*;
use crate::services::{HistoryService, SpinService};
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    post,
    path = "/spin",
    tag = "spin",
    request_body = CodeRequest,
    responses(
        (status = 200, description = "Prize won. A SpinOutcome with a warning when history could not be saved", body = WonPrize),
        (status = 400, description = "Code not activated yet or already used", body = ErrorResponse),
        (status = 404, description = "Code does not exist", body = ErrorResponse),
        (status = 500, description = "Storage failure, no prize awarded", body = ErrorResponse)
    )
)]
/// Spins the wheel once for an approved code.
pub async fn spin(
    service: web::Data<SpinService>,
    request: web::Json<CodeRequest>,
) -> Result<HttpResponse> {
    match service.spin(&request.code).await {
        Ok(outcome) if outcome.warning.is_some() => Ok(HttpResponse::Ok().json(outcome)),
        Ok(outcome) => Ok(HttpResponse::Ok().json(outcome.prize)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/history",
    tag = "spin",
    responses(
        (status = 200, description = "Latest winners, newest first", body = [HistoryEntryResponse]),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
/// Public feed of the latest 20 wins.
pub async fn get_history(service: web::Data<HistoryService>) -> Result<HttpResponse> {
    match service.list_recent(HISTORY_LIMIT).await {
        Ok(list) => {
            let items: Vec<HistoryEntryResponse> = list.into_iter().map(Into::into).collect();
            Ok(HttpResponse::Ok().json(items))
        }
        Err(e) => Ok(e.error_response()),
    }
}

pub fn spin_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/spin", web::post().to(spin))
        .route("/history", web::get().to(get_history));
}
