//! Stock availability display status.

use serde::{Deserialize, Serialize};

/// Threshold below which remaining stock is called out as low.
const LOW_STOCK_THRESHOLD: u32 = 5;

/// Display classification of a line item's stock availability.
///
/// Derived from the last-known authoritative stock count; `Unknown` until the
/// first reconciliation pass has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// No reconciliation has run yet for this item.
    Unknown,
    /// The stock collaborator reports zero availability.
    OutOfStock,
    /// Fewer than five units remain.
    Low,
    /// Comfortably in stock.
    InStock,
}

impl StockStatus {
    /// Classify an availability count. `None` means not yet reconciled.
    #[must_use]
    pub const fn from_available(available: Option<u32>) -> Self {
        match available {
            None => Self::Unknown,
            Some(0) => Self::OutOfStock,
            Some(n) if n < LOW_STOCK_THRESHOLD => Self::Low,
            Some(_) => Self::InStock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_available() {
        assert_eq!(StockStatus::from_available(None), StockStatus::Unknown);
        assert_eq!(StockStatus::from_available(Some(0)), StockStatus::OutOfStock);
        assert_eq!(StockStatus::from_available(Some(4)), StockStatus::Low);
        assert_eq!(StockStatus::from_available(Some(5)), StockStatus::InStock);
        assert_eq!(StockStatus::from_available(Some(100)), StockStatus::InStock);
    }
}
