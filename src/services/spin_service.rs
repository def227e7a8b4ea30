use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::{SpinOutcome, WonPrize};
use crate::services::customer_service::MSG_ALREADY_USED;
use crate::services::{CustomerService, HistoryService};
use crate::wheel::{PrizeTable, RandomSource};

pub const MSG_HISTORY_NOT_SAVED: &str = "Prize won, but it could not be saved to history";

/// Runs a spin across both ledgers.
#[derive(Clone)]
pub struct SpinService {
    customers: CustomerService,
    history: HistoryService,
    wheel: Arc<PrizeTable>,
    random: Arc<dyn RandomSource>,
}

impl SpinService {
    pub fn new(
        customers: CustomerService,
        history: HistoryService,
        wheel: PrizeTable,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            customers,
            history,
            wheel: Arc::new(wheel),
            random,
        }
    }

    /// Spin (one per approved code)
    ///
    /// 1. Look the code up; unknown, pending and used codes stop here, before any draw
    /// 2. Draw a prize from the wheel
    /// 3. Mark the code used, conditional on it still being approved
    /// 4. Append the win to history
    ///
    /// Steps 3 and 4 hit different databases and are not atomic. If step 3 fails
    /// the draw is discarded. If step 4 fails the code stays consumed and the
    /// prize is still returned, flagged with a warning.
    pub async fn spin(&self, code: &str) -> AppResult<SpinOutcome> {
        let customer = self.customers.check_spinnable(code).await?;

        let prize = self.wheel.draw(self.random.as_ref())?;

        if !self.customers.mark_used(customer.id).await? {
            // lost the race against a concurrent spin of the same code
            return Err(AppError::StateConflict(MSG_ALREADY_USED.into()));
        }

        let warning = match self.history.append(&customer.name, &prize.name).await {
            Ok(_) => None,
            Err(e) => {
                log::error!(
                    "Code {} consumed but history write failed for prize '{}': {e}",
                    customer.code,
                    prize.name
                );
                Some(MSG_HISTORY_NOT_SAVED.to_string())
            }
        };

        log::info!("Code {} ({}) won '{}'", customer.code, customer.name, prize.name);

        Ok(SpinOutcome {
            prize: WonPrize::from(prize),
            warning,
        })
    }
}
