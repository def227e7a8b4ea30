use serde::Serialize;
use utoipa::ToSchema;

use crate::wheel::Prize;

/// Prize as shown to the player. The weight is left out so odds do not leak.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct WonPrize {
    #[schema(example = 3)]
    pub id: i32,
    #[schema(example = "Free Drink")]
    pub name: String,
}

impl From<Prize> for WonPrize {
    fn from(p: Prize) -> Self {
        WonPrize {
            id: p.id,
            name: p.name,
        }
    }
}

/// Result of a spin. `warning` is set when the code was consumed but the
/// win could not be written to history.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SpinOutcome {
    pub prize: WonPrize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
