use super::{fixed, AppEvent, FormErrors};
use crate::nav::ModalType;
use crate::util::timer::{Lifetime, Scheduler};
use rust_decimal::Decimal;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

pub const SUBMIT_DELAY: Duration = Duration::from_millis(2000);

/// Address shown in receive mode until one is generated.
pub const MOCK_RECEIVE_ADDRESS: &str = "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh";

/// Flat fee estimate shown in the send summary.
pub const ESTIMATED_FEE: Decimal = Decimal::from_parts(1, 0, 0, false, 4);

/// Currencies offered by the modal, as `(symbol, label)`.
pub const CURRENCIES: [(&str, &str); 4] = [
    ("BTC", "Bitcoin (BTC)"),
    ("ETH", "Ethereum (ETH)"),
    ("USDT", "Tether (USDT)"),
    ("BNB", "Binance Coin (BNB)"),
];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Completion {
    Submitted,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum QuickField {
    Amount,
    Address,
}

/// The send/receive form inside the route-driven transaction modal.
#[derive(Debug)]
pub struct QuickTransferForm {
    lifetime: Lifetime,
    kind: ModalType,
    currency: String,
    amount: String,
    address: String,
    note: String,
    errors: FormErrors<QuickField>,
    is_loading: bool,
}

impl QuickTransferForm {
    pub fn new(kind: ModalType) -> Self {
        Self {
            lifetime: Lifetime::new(),
            kind,
            currency: CURRENCIES[0].0.to_string(),
            amount: String::new(),
            address: String::new(),
            note: String::new(),
            errors: FormErrors::new(),
            is_loading: false,
        }
    }

    pub fn kind(&self) -> ModalType {
        self.kind
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            ModalType::Send => "Send Crypto",
            ModalType::Receive => "Receive Crypto",
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn errors(&self) -> &FormErrors<QuickField> {
        &self.errors
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn set_currency(&mut self, currency: &str) {
        self.currency = currency.to_string();
    }

    pub fn set_amount(&mut self, amount: &str) {
        self.amount = amount.to_string();
        self.errors.remove(&QuickField::Amount);
    }

    pub fn set_address(&mut self, address: &str) {
        self.address = address.to_string();
        self.errors.remove(&QuickField::Address);
    }

    pub fn set_note(&mut self, note: &str) {
        self.note = note.to_string();
    }

    /// Fill in the wallet's receiving address.
    pub fn generate_address(&mut self) {
        self.set_address(MOCK_RECEIVE_ADDRESS);
    }

    /// The receiving address to display and copy.
    pub fn display_address(&self) -> &str {
        if self.address.is_empty() {
            MOCK_RECEIVE_ADDRESS
        } else {
            &self.address
        }
    }

    /// Amount plus the estimated fee, four decimal places. Amounts that are not valid count
    /// as zero.
    pub fn estimated_total(&self) -> String {
        let total = self.parsed_total().unwrap_or(ESTIMATED_FEE);

        fixed(total, 4)
    }

    fn parsed_total(&self) -> Option<Decimal> {
        Decimal::from_str(self.amount.trim())
            .ok()
            .and_then(|amount| amount.checked_add(ESTIMATED_FEE))
    }

    pub fn validate(&mut self) -> bool {
        self.errors.clear();

        // The total saturates at `Decimal::MAX` when the amount is too large to add the fee to.
        let amount = Decimal::from_str(self.amount.trim()).ok();
        let in_range = self.parsed_total().is_some_and(|total| total < Decimal::MAX);
        if !in_range || !amount.is_some_and(|amount| amount > Decimal::ZERO) {
            self.errors.insert(
                QuickField::Amount,
                "Please enter a valid amount".to_string(),
            );
        }
        if self.kind == ModalType::Send && self.address.trim().is_empty() {
            self.errors.insert(
                QuickField::Address,
                "Please enter a recipient address".to_string(),
            );
        }

        self.errors.is_empty()
    }

    /// Validate and start the simulated submission. Returns `false` when validation fails.
    pub fn submit(&mut self, scheduler: &mut Scheduler<AppEvent>) -> bool {
        if !self.validate() {
            debug!("Quick transfer rejected: {:?}", self.errors);
            return false;
        }

        self.is_loading = true;
        scheduler.schedule(
            SUBMIT_DELAY,
            self.lifetime.token(),
            AppEvent::QuickTransfer(Completion::Submitted),
        );

        true
    }

    /// Apply a completion. Returns `true` when the modal should close.
    pub fn handle(&mut self, completion: Completion) -> bool {
        match completion {
            Completion::Submitted => {
                self.is_loading = false;
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn send_requires_amount_and_address() {
        let mut scheduler = Scheduler::new();
        let mut form = QuickTransferForm::new(ModalType::Send);
        assert_eq!(form.currency(), "BTC");

        assert!(!form.submit(&mut scheduler));
        assert_eq!(form.errors().len(), 2);

        form.set_amount("-1");
        assert!(!form.errors().contains_key(&QuickField::Amount));
        assert!(!form.validate());
        assert_eq!(
            form.errors()[&QuickField::Amount],
            "Please enter a valid amount"
        );

        form.set_amount("0.5");
        form.set_address("  ");
        assert!(!form.validate());
        assert_eq!(
            form.errors().keys().collect::<Vec<_>>(),
            [&QuickField::Address]
        );

        form.set_address("0x742d35Cc6634C0532925a3b8D4C2F8b4C2F8b4C2");
        assert!(form.submit(&mut scheduler));
        assert!(form.is_loading());
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    #[traced_test]
    fn receive_needs_only_amount() {
        let mut form = QuickTransferForm::new(ModalType::Receive);
        assert_eq!(form.title(), "Receive Crypto");
        assert_eq!(form.display_address(), MOCK_RECEIVE_ADDRESS);

        form.set_amount("2");
        assert!(form.validate());

        form.generate_address();
        assert_eq!(form.address(), MOCK_RECEIVE_ADDRESS);
    }

    #[test]
    #[traced_test]
    fn summary_total_includes_fee() {
        let mut form = QuickTransferForm::new(ModalType::Send);
        assert_eq!(form.estimated_total(), "0.0001");

        form.set_amount("1.5");
        assert_eq!(form.estimated_total(), "1.5001");
    }

    #[test]
    #[traced_test]
    fn oversized_amount_is_invalid() {
        let mut form = QuickTransferForm::new(ModalType::Receive);
        form.set_amount(&Decimal::MAX.to_string());

        form.estimated_total();
        assert!(!form.validate());
        assert_eq!(
            form.errors()[&QuickField::Amount],
            "Please enter a valid amount"
        );
    }
}
