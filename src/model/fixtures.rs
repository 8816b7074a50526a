//! Demo data backing every screen. Nothing here is fetched or derived; values are fixed.

use crate::imports::transactions::{read_transactions_from_reader, ImportError};
use crate::model::constants::DEMO_TRANSACTIONS_CSV;
use crate::model::{Stats, Transaction};
use chrono::{NaiveDateTime, TimeDelta};
use rust_decimal::Decimal;

/// A wallet holding as shown by the asset selectors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WalletAsset {
    pub symbol: &'static str,
    pub name: &'static str,
    pub balance: Decimal,
    pub usd_value: Decimal,
    /// Mock unit price in USD, used for amount conversion previews.
    pub price: Decimal,
}

/// A dashboard asset card.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketAsset {
    pub symbol: &'static str,
    pub name: &'static str,
    pub balance: Decimal,
    pub price: Decimal,
    pub value: Decimal,
    /// Percent change over the last 24 hours.
    pub change_24h: Decimal,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PortfolioSummary {
    pub total_value: Decimal,
    pub change_24h: Decimal,
    pub change_amount: Decimal,
}

/// A previously issued receiving address.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecentAddress {
    pub address: String,
    pub created_at: NaiveDateTime,
    pub used: bool,
    /// Requested amount, empty when none was requested.
    pub amount: String,
    pub asset: String,
}

/// The demo transaction history.
pub fn demo_transactions() -> Result<Vec<Transaction>, ImportError> {
    let mut stats = Stats::default();

    read_transactions_from_reader(&mut stats, DEMO_TRANSACTIONS_CSV.as_bytes())
}

/// Holdings offered by the send and receive asset selectors.
pub fn wallet_assets() -> Vec<WalletAsset> {
    vec![
        WalletAsset {
            symbol: "BTC",
            name: "Bitcoin",
            balance: Decimal::new(12_345_678, 8),
            usd_value: Decimal::new(617_284, 2),
            price: Decimal::from(50_000),
        },
        WalletAsset {
            symbol: "ETH",
            name: "Ethereum",
            balance: Decimal::new(245_678_901, 8),
            usd_value: Decimal::new(491_358, 2),
            price: Decimal::from(2_000),
        },
        WalletAsset {
            symbol: "USDT",
            name: "Tether",
            balance: Decimal::new(150_000, 2),
            usd_value: Decimal::new(150_000, 2),
            price: Decimal::ONE,
        },
        WalletAsset {
            symbol: "BNB",
            name: "Binance Coin",
            balance: Decimal::new(512_345, 5),
            usd_value: Decimal::new(153_704, 2),
            price: Decimal::from(300),
        },
    ]
}

pub fn dashboard_assets() -> Vec<MarketAsset> {
    vec![
        MarketAsset {
            symbol: "BTC",
            name: "Bitcoin",
            balance: Decimal::new(234_567, 8),
            price: Decimal::new(6_723_456, 2),
            value: Decimal::new(15_768, 2),
            change_24h: Decimal::new(234, 2),
        },
        MarketAsset {
            symbol: "ETH",
            name: "Ethereum",
            balance: Decimal::new(125_678, 5),
            price: Decimal::new(246_900, 2),
            value: Decimal::new(310_245, 2),
            change_24h: Decimal::new(-123, 2),
        },
        MarketAsset {
            symbol: "USDT",
            name: "Tether",
            balance: Decimal::new(500_000, 2),
            price: Decimal::new(100, 2),
            value: Decimal::new(500_000, 2),
            change_24h: Decimal::new(1, 2),
        },
    ]
}

pub fn portfolio_summary() -> PortfolioSummary {
    PortfolioSummary {
        total_value: Decimal::new(4_567_892, 2),
        change_24h: Decimal::new(567, 2),
        change_amount: Decimal::new(245_678, 2),
    }
}

/// The base receiving address for an asset.
pub fn receive_address(symbol: &str) -> Option<&'static str> {
    match symbol {
        "BTC" => Some("bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh"),
        "ETH" | "USDT" => Some("0x742d35Cc6634C0532925a3b8D4C2F8b4C2F8b4C2"),
        "BNB" => Some("bnb1xy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh"),
        _ => None,
    }
}

/// Previously issued addresses for an asset, relative to `now`.
pub fn recent_addresses(symbol: &str, now: NaiveDateTime) -> Vec<RecentAddress> {
    let recent = |address: &str, ago: TimeDelta, used: bool, amount: &str| RecentAddress {
        address: address.to_string(),
        created_at: now - ago,
        used,
        amount: amount.to_string(),
        asset: symbol.to_string(),
    };

    match symbol {
        "BTC" => vec![
            recent(
                "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh",
                TimeDelta::hours(1),
                true,
                "0.001",
            ),
            recent(
                "bc1qab3kgdygjrsqtzq2n0yrf2493p83kkfjhx0abc",
                TimeDelta::hours(2),
                false,
                "",
            ),
        ],
        "ETH" => vec![recent(
            "0x742d35Cc6634C0532925a3b8D4C2F8b4C2F8b4C2",
            TimeDelta::minutes(30),
            false,
            "0.5",
        )],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn demo_history_loads() {
        let txs = demo_transactions().unwrap();
        let ids: Vec<_> = txs.iter().map(|tx| tx.id.as_str()).collect();

        assert_eq!(
            ids,
            ["tx1", "tx2", "tx3", "tx4", "tx5", "tx6", "tx7", "tx8"]
        );
        assert_eq!(txs[0].usd_value, Decimal::from(21_500));
        assert_eq!(txs[3].amount, Decimal::from(10));
    }

    #[test]
    #[traced_test]
    fn every_wallet_asset_has_an_address() {
        for asset in wallet_assets() {
            assert!(receive_address(asset.symbol).is_some(), "{}", asset.symbol);
        }
        assert_eq!(receive_address("DOGE"), None);
    }
}
