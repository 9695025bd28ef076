//! Portfolio aggregation
//!
//! Pure totals over a snapshot of wallet records. Nothing is cached; each
//! call recomputes from the records it is given.

use crate::domain::entities::WalletRecord;
use serde::Serialize;

/// Totals across a set of wallets, all in USD
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PortfolioSummary {
    pub total_value: f64,
    pub total_change: f64,
    pub total_change_percent: f64,
    pub wallet_count: usize,
}

/// Sum of `balance_usd`
pub fn total_value(records: &[WalletRecord]) -> f64 {
    records.iter().map(|r| r.balance_usd).sum()
}

/// Sum of `change_24h`
pub fn total_change(records: &[WalletRecord]) -> f64 {
    records.iter().map(|r| r.change_24h).sum()
}

/// 24h change relative to the value a day ago, in percent.
///
/// Zero for an empty or worthless portfolio, and whenever the value a day
/// ago is zero (everything held was gained today).
pub fn total_change_percent(records: &[WalletRecord]) -> f64 {
    change_percent(total_value(records), total_change(records))
}

fn change_percent(value: f64, change: f64) -> f64 {
    if value <= 0.0 {
        return 0.0;
    }
    let previous = value - change;
    if previous == 0.0 {
        return 0.0;
    }
    let percent = change / previous * 100.0;
    if percent.is_finite() {
        percent
    } else {
        0.0
    }
}

pub fn aggregate(records: &[WalletRecord]) -> PortfolioSummary {
    let total_value = total_value(records);
    let total_change = total_change(records);
    PortfolioSummary {
        total_value,
        total_change,
        total_change_percent: change_percent(total_value, total_change),
        wallet_count: records.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::types::Network;

    fn wallet(balance_usd: f64, change_24h: f64) -> WalletRecord {
        let mut record = WalletRecord::manual(
            "wallet_t".to_string(),
            "T".to_string(),
            "0x1".to_string(),
            Network::Ethereum,
            0.0,
            balance_usd,
        );
        record.change_24h = change_24h;
        record
    }

    #[test]
    fn test_aggregate_example() {
        let records = vec![wallet(100.0, 10.0), wallet(250.0, -5.0)];
        let summary = aggregate(&records);

        assert_eq!(summary.total_value, 350.0);
        assert_eq!(summary.total_change, 5.0);
        assert!((summary.total_change_percent - 1.4493).abs() < 1e-3);
        assert_eq!(summary.wallet_count, 2);
        assert_eq!(summary.total_change_percent, total_change_percent(&records));
    }

    #[test]
    fn test_empty_portfolio_is_zero() {
        assert_eq!(aggregate(&[]), PortfolioSummary::default());
    }

    #[test]
    fn test_zero_value_gives_zero_percent() {
        let records = vec![wallet(0.0, 0.0), wallet(0.0, 0.0)];
        assert_eq!(total_change_percent(&records), 0.0);
    }

    #[test]
    fn test_all_value_gained_today_gives_zero_percent() {
        let records = vec![wallet(50.0, 50.0)];
        assert_eq!(total_value(&records), 50.0);
        assert_eq!(total_change_percent(&records), 0.0);
    }

    #[test]
    fn test_negative_change() {
        let records = vec![wallet(90.0, -10.0)];
        assert!((total_change_percent(&records) + 10.0).abs() < 1e-9);
    }
}
