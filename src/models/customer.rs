use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::customer_entity;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "Alice")]
    #[serde(default)]
    pub name: String,
}

/// Body shared by every endpoint that takes a spin code.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CodeRequest {
    #[schema(example = "SPIN-3FA85F64")]
    #[serde(default)]
    pub code: String,
}

/// Customer waiting for staff approval.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PendingCustomerResponse {
    pub id: i32,
    pub name: String,
    pub code: String,
    /// Always `false`: the code has not been approved yet
    pub status: bool,
    pub created_at: DateTime<Utc>,
}

impl From<customer_entity::Model> for PendingCustomerResponse {
    fn from(m: customer_entity::Model) -> Self {
        PendingCustomerResponse {
            id: m.id,
            name: m.name,
            code: m.code,
            status: false,
            created_at: m.created_at,
        }
    }
}

/// Approved customer that has not spun yet.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApprovedCustomerResponse {
    pub name: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
}

impl From<customer_entity::Model> for ApprovedCustomerResponse {
    fn from(m: customer_entity::Model) -> Self {
        ApprovedCustomerResponse {
            name: m.name,
            code: m.code,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValidateCodeResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub message: String,
}
