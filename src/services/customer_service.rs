use crate::entities::{CodeStatus, customer_entity as customers};
use crate::error::{AppError, AppResult};
use crate::utils::generate_code;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    SqlErr,
};

/// Fresh codes tried before registration gives up on unique-key collisions.
const CODE_ATTEMPTS: usize = 5;

pub const MSG_CODE_NOT_FOUND: &str = "Code does not exist";
pub const MSG_NOT_ACTIVATED: &str = "Code has not been activated by staff yet";
pub const MSG_ALREADY_USED: &str = "Code has already been used";

/// Customer ledger: registrations and the lifecycle of their spin codes.
#[derive(Clone)]
pub struct CustomerService {
    pool: DatabaseConnection,
}

impl CustomerService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// Registers a customer and returns the new pending code.
    pub async fn register(&self, name: &str) -> AppResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::ValidationError("Name must not be empty".into()));
        }

        for attempt in 1..=CODE_ATTEMPTS {
            let code = generate_code();
            let inserted = customers::ActiveModel {
                name: Set(name.to_string()),
                code: Set(code.clone()),
                status: Set(CodeStatus::Pending),
                created_at: Set(Utc::now()),
                ..Default::default()
            }
            .insert(&self.pool)
            .await;

            match inserted {
                Ok(model) => {
                    log::info!(
                        "Registered customer #{} '{}' with code {}",
                        model.id,
                        model.name,
                        model.code
                    );
                    return Ok(model.code);
                }
                Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                    log::warn!("Generated code {code} already taken (attempt {attempt})");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(AppError::InternalError(
            "Could not allocate a unique code".into(),
        ))
    }

    pub async fn find_by_code(&self, code: &str) -> AppResult<customers::Model> {
        let code = require_code(code)?;
        customers::Entity::find()
            .filter(customers::Column::Code.eq(code))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(MSG_CODE_NOT_FOUND.into()))
    }

    /// Looks the code up and checks it may be spun right now.
    pub async fn check_spinnable(&self, code: &str) -> AppResult<customers::Model> {
        let customer = self.find_by_code(code).await?;
        ensure_spinnable(&customer)?;
        Ok(customer)
    }

    /// Pending -> Approved. `false` when the code is unknown or not pending;
    /// the status check and the write are one statement.
    pub async fn approve(&self, code: &str) -> AppResult<bool> {
        let code = require_code(code)?;
        let result = customers::Entity::update_many()
            .col_expr(customers::Column::Status, Expr::value(CodeStatus::Approved))
            .filter(customers::Column::Code.eq(code))
            .filter(customers::Column::Status.eq(CodeStatus::Pending))
            .exec(&self.pool)
            .await?;

        let approved = result.rows_affected == 1;
        if approved {
            log::info!("Approved code {code}");
        }
        Ok(approved)
    }

    /// Approved -> Used. `false` means another request consumed the code first.
    pub async fn mark_used(&self, id: i32) -> AppResult<bool> {
        let result = customers::Entity::update_many()
            .col_expr(customers::Column::Status, Expr::value(CodeStatus::Used))
            .filter(customers::Column::Id.eq(id))
            .filter(customers::Column::Status.eq(CodeStatus::Approved))
            .exec(&self.pool)
            .await?;
        Ok(result.rows_affected == 1)
    }

    /// Newest first.
    pub async fn list_pending(&self) -> AppResult<Vec<customers::Model>> {
        self.list_by_status(CodeStatus::Pending).await
    }

    /// Newest first.
    pub async fn list_approved(&self) -> AppResult<Vec<customers::Model>> {
        self.list_by_status(CodeStatus::Approved).await
    }

    async fn list_by_status(&self, status: CodeStatus) -> AppResult<Vec<customers::Model>> {
        let list = customers::Entity::find()
            .filter(customers::Column::Status.eq(status))
            .order_by_desc(customers::Column::CreatedAt)
            .order_by_desc(customers::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(list)
    }

    /// Removes the customer whatever its status. `false` when the code is unknown.
    pub async fn delete(&self, code: &str) -> AppResult<bool> {
        let code = require_code(code)?;
        let result = customers::Entity::delete_many()
            .filter(customers::Column::Code.eq(code))
            .exec(&self.pool)
            .await?;

        let deleted = result.rows_affected > 0;
        if deleted {
            log::info!("Deleted customer with code {code}");
        }
        Ok(deleted)
    }

    /// Wipes every customer. Returns the number removed.
    pub async fn reset_all(&self) -> AppResult<u64> {
        let result = customers::Entity::delete_many().exec(&self.pool).await?;
        log::warn!("Customer ledger reset, {} records removed", result.rows_affected);
        Ok(result.rows_affected)
    }
}

/// A spin consumes the code, so only codes that may still move to `Used` can spin.
pub fn ensure_spinnable(customer: &customers::Model) -> AppResult<()> {
    if customer.status.can_transition_to(CodeStatus::Used) {
        return Ok(());
    }
    let msg = match customer.status {
        CodeStatus::Pending => MSG_NOT_ACTIVATED,
        _ => MSG_ALREADY_USED,
    };
    Err(AppError::StateConflict(msg.into()))
}

fn require_code(code: &str) -> AppResult<&str> {
    let code = code.trim();
    if code.is_empty() {
        return Err(AppError::ValidationError("Code is required".into()));
    }
    Ok(code)
}
