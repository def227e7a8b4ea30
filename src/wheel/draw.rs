use super::{Prize, PrizeTable, RandomSource};
use crate::error::{AppError, AppResult};

impl PrizeTable {
    /// Weighted draw: pick r in [0, W) and return the first prize whose
    /// running weight is strictly greater than r.
    pub fn draw(&self, random: &dyn RandomSource) -> AppResult<Prize> {
        let pick = random.below(self.total_weight());
        self.select(pick).cloned().ok_or_else(|| {
            AppError::InternalError(format!(
                "Random pick {pick} outside wheel of weight {}",
                self.total_weight()
            ))
        })
    }

    /// Maps a pick in [0, W) to its prize. A zero-weight prize adds nothing
    /// to the running sum, so `pick < acc` can never first hold on it.
    pub fn select(&self, pick: u64) -> Option<&Prize> {
        let mut acc = 0u64;
        for p in self.prizes() {
            acc += u64::from(p.weight);
            if pick < acc {
                return Some(p);
            }
        }
        None
    }
}
