use crate::model::fixtures::{receive_address, recent_addresses, RecentAddress};
use chrono::NaiveDateTime;
use rand::Rng;
use tracing::debug;

/// The recent address list never grows beyond this.
pub const MAX_RECENT_ADDRESSES: usize = 5;

const ADDRESS_SUFFIX_LEN: usize = 5;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReceiveScreen {
    selected_asset: String,
    request_amount: String,
    current_address: String,
    recent: Vec<RecentAddress>,
}

impl ReceiveScreen {
    pub fn new(now: NaiveDateTime) -> Self {
        let mut screen = Self {
            selected_asset: String::new(),
            request_amount: String::new(),
            current_address: String::new(),
            recent: Vec::new(),
        };
        screen.select_asset("BTC", now);

        screen
    }

    pub fn selected_asset(&self) -> &str {
        &self.selected_asset
    }

    pub fn request_amount(&self) -> &str {
        &self.request_amount
    }

    pub fn current_address(&self) -> &str {
        &self.current_address
    }

    pub fn recent_addresses(&self) -> &[RecentAddress] {
        &self.recent
    }

    /// Switch assets. The requested amount is cleared and the address list reloaded.
    pub fn select_asset(&mut self, symbol: &str, now: NaiveDateTime) {
        self.selected_asset = symbol.to_string();
        self.request_amount.clear();
        self.current_address = receive_address(symbol).unwrap_or_default().to_string();
        self.recent = recent_addresses(symbol, now);
    }

    pub fn set_request_amount(&mut self, amount: &str) {
        self.request_amount = amount.to_string();
    }

    /// Issue a fresh address and put it at the top of the recent list.
    pub fn generate_address(&mut self, rng: &mut impl Rng, now: NaiveDateTime) -> &str {
        let base = receive_address(&self.selected_asset).unwrap_or_default();
        let suffix: String = (0..ADDRESS_SUFFIX_LEN)
            .map(|_| char::from(BASE36[rng.gen_range(0..BASE36.len())]))
            .collect();
        let address = format!("{base}{suffix}");
        debug!("Generated {} address {address}", self.selected_asset);

        self.recent.insert(
            0,
            RecentAddress {
                address: address.clone(),
                created_at: now,
                used: false,
                amount: self.request_amount.clone(),
                asset: self.selected_asset.clone(),
            },
        );
        self.recent.truncate(MAX_RECENT_ADDRESSES);
        self.current_address = address;

        &self.current_address
    }

    /// Reuse an earlier address along with the amount it requested.
    pub fn select_recent(&mut self, index: usize) -> bool {
        let Some(recent) = self.recent.get(index) else {
            return false;
        };

        self.current_address = recent.address.clone();
        self.request_amount = recent.amount.clone();

        true
    }

    /// Payload encoded into the QR code.
    pub fn qr_payload(&self) -> String {
        if self.request_amount.is_empty() {
            self.current_address.clone()
        } else {
            format!("{}?amount={}", self.current_address, self.request_amount)
        }
    }

    /// Message offered by the share actions.
    pub fn share_text(&self) -> String {
        let amount = if self.request_amount.is_empty() {
            String::new()
        } else {
            format!("{} ", self.request_amount)
        };

        format!(
            "Send {amount}{} to this address: {}",
            self.selected_asset, self.current_address
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tracing_test::traced_test;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 8, 24)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    #[traced_test]
    fn asset_change_resets_amount_and_addresses() {
        let mut screen = ReceiveScreen::new(now());
        assert_eq!(screen.recent_addresses().len(), 2);

        screen.set_request_amount("0.25");
        screen.select_asset("ETH", now());
        assert_eq!(screen.request_amount(), "");
        assert_eq!(
            screen.current_address(),
            "0x742d35Cc6634C0532925a3b8D4C2F8b4C2F8b4C2"
        );
        assert_eq!(screen.recent_addresses().len(), 1);

        screen.select_asset("BNB", now());
        assert!(screen.recent_addresses().is_empty());
    }

    #[test]
    #[traced_test]
    fn generated_addresses_are_capped() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut screen = ReceiveScreen::new(now());
        let base = screen.current_address().to_string();

        for _ in 0..7 {
            let address = screen.generate_address(&mut rng, now()).to_string();
            let suffix = address.strip_prefix(&base).unwrap();
            assert_eq!(suffix.len(), ADDRESS_SUFFIX_LEN);
            assert!(suffix
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
            assert_eq!(screen.recent_addresses()[0].address, address);
            assert!(screen.recent_addresses().len() <= MAX_RECENT_ADDRESSES);
        }
        assert_eq!(screen.recent_addresses().len(), MAX_RECENT_ADDRESSES);
    }

    #[test]
    #[traced_test]
    fn selecting_recent_restores_amount() {
        let mut screen = ReceiveScreen::new(now());
        assert!(screen.select_recent(0));
        assert_eq!(screen.request_amount(), "0.001");
        assert_eq!(
            screen.qr_payload(),
            "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh?amount=0.001"
        );
        assert_eq!(
            screen.share_text(),
            "Send 0.001 BTC to this address: bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh"
        );

        assert!(!screen.select_recent(10));
    }
}
