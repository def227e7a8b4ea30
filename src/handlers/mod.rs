pub mod admin;
pub mod customer;
pub mod spin;

pub use admin::admin_config;
pub use customer::customer_config;
pub use spin::spin_config;

use crate::error::AppError;
use actix_web::web;

/// Malformed or missing JSON bodies get the same envelope as other validation errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("Invalid request body: {err}")).into()
    })
}

/// Every route, mounted under `/api`.
pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(customer_config)
            .configure(spin_config)
            .configure(admin_config),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::Pools;
    use crate::database::connection::testing::{memory_pool, memory_pools};
    use crate::services::spin_service::MSG_HISTORY_NOT_SAVED;
    use crate::services::{CustomerService, HistoryService, SpinService};
    use crate::wheel::{PrizeTable, ThreadRandom};
    use actix_web::body::MessageBody;
    use actix_web::dev::{Service, ServiceResponse};
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::{Value, json};
    use std::sync::Arc;

    /// Registers the services over `pools` the same way `main` does.
    fn wire(pools: Pools) -> impl FnOnce(&mut web::ServiceConfig) {
        move |cfg| {
            let customers = CustomerService::new(pools.customers);
            let history = HistoryService::new(pools.history);
            let spin = SpinService::new(
                customers.clone(),
                history.clone(),
                PrizeTable::standard(),
                Arc::new(ThreadRandom),
            );
            cfg.app_data(json_config())
                .app_data(web::Data::new(customers))
                .app_data(web::Data::new(history))
                .app_data(web::Data::new(spin));
            api_config(cfg);
        }
    }

    async fn send<S, R, B>(app: &S, req: R) -> (StatusCode, Value)
    where
        S: Service<R, Response = ServiceResponse<B>, Error = actix_web::Error>,
        B: MessageBody,
    {
        let resp = test::call_service(app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    fn post(uri: &str, body: Value) -> test::TestRequest {
        test::TestRequest::post().uri(uri).set_json(body)
    }

    fn get(uri: &str) -> test::TestRequest {
        test::TestRequest::get().uri(uri)
    }

    /// The code is never echoed to the caller; staff read it from storage.
    async fn code_of(customers: &CustomerService, name: &str) -> String {
        customers
            .list_pending()
            .await
            .unwrap()
            .into_iter()
            .find(|c| c.name == name)
            .map(|c| c.code)
            .unwrap()
    }

    #[actix_web::test]
    async fn test_register_approve_validate_spin() {
        let pools = memory_pools().await;
        let customers = CustomerService::new(pools.customers.clone());
        let app = test::init_service(App::new().configure(wire(pools))).await;

        let (status, body) =
            send(&app, post("/api/register", json!({ "name": "Alice" })).to_request()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body.get("code").is_none());
        let code = code_of(&customers, "Alice").await;

        let (status, body) =
            send(&app, post("/api/validate-code", json!({ "code": code })).to_request()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["valid"], false);

        let (status, body) =
            send(&app, post("/api/spin", json!({ "code": code })).to_request()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "STATE_CONFLICT");

        let (status, body) =
            send(&app, post("/api/admin/approve", json!({ "code": code })).to_request()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["code"], code.as_str());

        let (_, approved) = send(&app, get("/api/admin/approved").to_request()).await;
        assert_eq!(approved["data"][0]["code"], code.as_str());
        assert_eq!(approved["data"][0]["name"], "Alice");

        let (status, body) =
            send(&app, post("/api/validate-code", json!({ "code": code })).to_request()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid"], true);
        assert_eq!(body["name"], "Alice");

        let (status, prize) =
            send(&app, post("/api/spin", json!({ "code": code })).to_request()).await;
        assert_eq!(status, StatusCode::OK);
        let id = prize["id"].as_i64().unwrap();
        assert!((1..=3).contains(&id));
        assert!(prize["name"].is_string());
        assert!(prize.get("weight").is_none());

        let (status, body) =
            send(&app, post("/api/spin", json!({ "code": code })).to_request()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);

        let (status, history) = send(&app, get("/api/history").to_request()).await;
        assert_eq!(status, StatusCode::OK);
        let history = history.as_array().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0]["name"], "Alice");
        assert_eq!(history[0]["prize"], prize["name"]);
        assert!(history[0]["won_at"].is_string());

        let (_, approved) = send(&app, get("/api/admin/approved").to_request()).await;
        assert!(approved["data"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_register_validation() {
        let app = test::init_service(App::new().configure(wire(memory_pools().await))).await;

        let (status, body) =
            send(&app, post("/api/register", json!({ "name": "   " })).to_request()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, _) = send(&app, post("/api/register", json!({})).to_request()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/register")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (_, pending) = send(&app, get("/api/admin/pending").to_request()).await;
        assert_eq!(pending["success"], true);
        assert!(pending["data"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_pending_listing_shape() {
        let app = test::init_service(App::new().configure(wire(memory_pools().await))).await;
        send(&app, post("/api/register", json!({ "name": "Bob" })).to_request()).await;

        let (status, pending) = send(&app, get("/api/admin/pending").to_request()).await;
        assert_eq!(status, StatusCode::OK);
        let entry = &pending["data"][0];
        assert!(entry["id"].is_number());
        assert_eq!(entry["name"], "Bob");
        assert!(entry["code"].as_str().unwrap().starts_with("SPIN-"));
        assert_eq!(entry["status"], false);
        assert!(entry["created_at"].is_string());
    }

    #[actix_web::test]
    async fn test_unknown_codes() {
        let app = test::init_service(App::new().configure(wire(memory_pools().await))).await;
        let unknown = json!({ "code": "SPIN-00000000" });

        let (status, body) =
            send(&app, post("/api/validate-code", unknown.clone()).to_request()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["valid"], false);

        let (status, _) = send(&app, post("/api/spin", unknown.clone()).to_request()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) =
            send(&app, post("/api/admin/approve", unknown.clone()).to_request()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, post("/api/admin/approve", json!({})).to_request()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, post("/api/admin/delete", unknown).to_request()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_delete_and_reset() {
        let pools = memory_pools().await;
        let customers = CustomerService::new(pools.customers.clone());
        let app = test::init_service(App::new().configure(wire(pools))).await;

        let first = customers.register("Carol").await.unwrap();
        let second = customers.register("Dave").await.unwrap();
        send(&app, post("/api/admin/approve", json!({ "code": second })).to_request()).await;

        let (status, body) =
            send(&app, post("/api/admin/delete", json!({ "code": second })).to_request()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        let (_, approved) = send(&app, get("/api/admin/approved").to_request()).await;
        assert!(approved["data"].as_array().unwrap().is_empty());

        let (status, _) = send(&app, post("/api/admin/reset", json!({})).to_request()).await;
        assert_eq!(status, StatusCode::OK);
        let (_, pending) = send(&app, get("/api/admin/pending").to_request()).await;
        assert!(pending["data"].as_array().unwrap().is_empty());

        let (status, _) =
            send(&app, post("/api/validate-code", json!({ "code": first })).to_request()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_reset_history() {
        let pools = memory_pools().await;
        let history = HistoryService::new(pools.history.clone());
        history.append("Erin", "Voucher 5%").await.unwrap();
        history.append("Frank", "Free Drink").await.unwrap();
        let app = test::init_service(App::new().configure(wire(pools))).await;

        let (_, list) = send(&app, get("/api/history").to_request()).await;
        assert_eq!(list.as_array().unwrap().len(), 2);
        assert_eq!(list[0]["name"], "Frank");

        let (status, body) =
            send(&app, post("/api/admin/reset-history", json!({})).to_request()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        let (_, list) = send(&app, get("/api/history").to_request()).await;
        assert!(list.as_array().unwrap().is_empty());
        assert_eq!(history.append("Gina", "Voucher 10%").await.unwrap().id, 1);
    }

    #[actix_web::test]
    async fn test_history_write_failure_is_a_warning() {
        let pools = Pools {
            customers: memory_pools().await.customers,
            // never migrated, so history reads and writes fail
            history: memory_pool().await,
        };
        let customers = CustomerService::new(pools.customers.clone());
        let app = test::init_service(App::new().configure(wire(pools))).await;

        let code = customers.register("Hank").await.unwrap();
        customers.approve(&code).await.unwrap();

        let (status, body) =
            send(&app, post("/api/spin", json!({ "code": code })).to_request()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["warning"], MSG_HISTORY_NOT_SAVED);
        assert!(body["prize"]["id"].is_number());
        assert!(body["prize"].get("weight").is_none());
        assert_eq!(body.as_object().unwrap().len(), 2);

        let (status, body) = send(&app, get("/api/history").to_request()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["message"], "Database error");
    }
}
