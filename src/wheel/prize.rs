use crate::error::{AppError, AppResult};

/// A wheel segment. The weight stays server side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prize {
    pub id: i32,
    pub name: String,
    /// Relative likelihood; 0 means the prize can never be drawn.
    pub weight: u32,
}

impl Prize {
    pub fn new(id: i32, name: impl Into<String>, weight: u32) -> Self {
        Self {
            id,
            name: name.into(),
            weight,
        }
    }
}

/// The fixed list of prizes, loaded once at startup.
#[derive(Debug, Clone)]
pub struct PrizeTable {
    prizes: Vec<Prize>,
    total_weight: u64,
}

impl PrizeTable {
    /// Fails when nothing on the table can ever be drawn.
    pub fn new(prizes: Vec<Prize>) -> AppResult<Self> {
        let total_weight: u64 = prizes.iter().map(|p| u64::from(p.weight)).sum();
        if total_weight == 0 {
            return Err(AppError::ConfigError(
                "Prize table must have a total weight above zero".into(),
            ));
        }
        Ok(Self {
            prizes,
            total_weight,
        })
    }

    /// Voucher 5% 60%, Voucher 10% 30%, Free Drink 10%, Voucher 50% never.
    pub fn standard() -> Self {
        Self {
            prizes: vec![
                Prize::new(1, "Voucher 5%", 60),
                Prize::new(2, "Voucher 10%", 30),
                Prize::new(3, "Free Drink", 10),
                Prize::new(4, "Voucher 50%", 0),
            ],
            total_weight: 100,
        }
    }

    pub fn prizes(&self) -> &[Prize] {
        &self.prizes
    }

    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_total_matches_weights() {
        let table = PrizeTable::standard();
        let sum: u64 = table.prizes().iter().map(|p| u64::from(p.weight)).sum();
        assert_eq!(table.total_weight(), sum);
        assert_eq!(table.prizes().len(), 4);
    }

    #[test]
    fn test_zero_total_weight_is_rejected() {
        let err = PrizeTable::new(vec![Prize::new(1, "Nothing", 0)]).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
        assert!(PrizeTable::new(Vec::new()).is_err());
    }
}
