//! The full-page send flow: form, live recipient check, preview and confirmation.

use super::{fixed, AppEvent, FormErrors};
use crate::model::fixtures::{wallet_assets, WalletAsset};
use crate::model::{truncate_middle, TxStatus};
use crate::nav::Route;
use crate::util::timer::{Lifetime, Scheduler};
use chrono::NaiveDateTime;
use rand::Rng;
use rust_decimal::Decimal;
use std::{str::FromStr, time::Duration};
use tracing::{debug, info};

pub const RECIPIENT_CHECK_DELAY: Duration = Duration::from_millis(500);
pub const AUTH_DELAY: Duration = Duration::from_millis(1000);
pub const PROCESSING_DELAY: Duration = Duration::from_millis(3000);
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1000);

/// Password accepted by the demo confirmation step.
pub const DEMO_PASSWORD: &str = "wallet123";

/// Shortest recipient accepted by form validation.
pub const MIN_ADDRESS_LEN: usize = 26;
/// Longest recipient the live check accepts.
pub const MAX_ADDRESS_LEN: usize = 62;
/// Recipients this long or shorter are not live-checked at all.
const LIVE_CHECK_MIN_LEN: usize = 10;

/// Address returned by the mock QR scanner.
pub const SCANNED_ADDRESS: &str = "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh";

/// Saved recipients, as `(address, label)`.
pub const RECENT_RECIPIENTS: [(&str, &str); 2] = [
    (
        "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh",
        "Personal Wallet",
    ),
    ("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", "Exchange Deposit"),
];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Completion {
    RecipientChecked,
    Authenticated,
    Processed,
    Redirect,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum FeeSpeed {
    Slow,
    #[default]
    Standard,
    Fast,
}

impl FeeSpeed {
    pub const ALL: [FeeSpeed; 3] = [FeeSpeed::Slow, FeeSpeed::Standard, FeeSpeed::Fast];

    /// Unknown names fall back to the standard speed.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "slow" => Self::Slow,
            "fast" => Self::Fast,
            _ => Self::Standard,
        }
    }

    /// Network fee in units of the asset being sent.
    pub fn fee(&self) -> Decimal {
        match self {
            Self::Slow => Decimal::new(1, 5),
            Self::Standard => Decimal::new(5, 5),
            Self::Fast => Decimal::new(1, 4),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Slow => "Slow",
            Self::Standard => "Standard",
            Self::Fast => "Fast",
        }
    }

    pub fn eta(&self) -> &'static str {
        match self {
            Self::Slow => "30-60 min",
            Self::Standard => "10-30 min",
            Self::Fast => "1-10 min",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum SendField {
    Recipient,
    Amount,
}

/// Which unit the amount field is typed in.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum AmountMode {
    #[default]
    Crypto,
    Usd,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AddressCheck {
    Validating,
    Valid,
    Invalid,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfirmStep {
    Auth,
    Processing,
    Success,
    Error,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SendForm {
    pub asset: String,
    pub recipient: String,
    pub amount: String,
    pub fee_speed: FeeSpeed,
}

impl Default for SendForm {
    fn default() -> Self {
        Self {
            asset: "BTC".to_string(),
            recipient: String::new(),
            amount: String::new(),
            fee_speed: FeeSpeed::default(),
        }
    }
}

/// Display strings for the transaction preview card.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferPreview {
    pub asset: String,
    /// Recipient shortened to its first and last six characters.
    pub recipient: String,
    pub amount: String,
    pub fee: String,
    pub total: String,
    pub usd_amount: String,
    pub usd_fee: String,
    pub usd_total: String,
    /// Balance left after sending, when an amount is entered.
    pub remaining: Option<String>,
}

/// A transfer accepted by the confirmation flow.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfirmedTransfer {
    pub asset: String,
    pub amount: String,
    pub recipient: String,
    pub fee: String,
    pub total: String,
    pub hash: String,
    pub status: TxStatus,
    pub timestamp: NaiveDateTime,
}

/// State of the confirmation modal.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Confirmation {
    step: ConfirmStep,
    password: String,
    error: Option<String>,
    is_loading: bool,
    hash: Option<String>,
}

impl Confirmation {
    fn new() -> Self {
        Self {
            step: ConfirmStep::Auth,
            password: String::new(),
            error: None,
            is_loading: false,
            hash: None,
        }
    }

    pub fn step(&self) -> ConfirmStep {
        self.step
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }
}

#[derive(Debug)]
pub struct SendScreen {
    lifetime: Lifetime,
    recipient_check: Lifetime,
    confirmation_lifetime: Lifetime,
    assets: Vec<WalletAsset>,
    form: SendForm,
    errors: FormErrors<SendField>,
    amount_mode: AmountMode,
    usd_amount: String,
    address_check: Option<AddressCheck>,
    confirmation: Option<Confirmation>,
    confirmed: Option<ConfirmedTransfer>,
}

impl Default for SendScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SendScreen {
    pub fn new() -> Self {
        let mut screen = Self {
            lifetime: Lifetime::new(),
            recipient_check: Lifetime::new(),
            confirmation_lifetime: Lifetime::new(),
            assets: wallet_assets(),
            form: SendForm::default(),
            errors: FormErrors::new(),
            amount_mode: AmountMode::default(),
            usd_amount: String::new(),
            address_check: None,
            confirmation: None,
            confirmed: None,
        };
        screen.revalidate();

        screen
    }

    pub fn form(&self) -> &SendForm {
        &self.form
    }

    pub fn assets(&self) -> &[WalletAsset] {
        &self.assets
    }

    pub fn errors(&self) -> &FormErrors<SendField> {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn amount_mode(&self) -> AmountMode {
        self.amount_mode
    }

    pub fn usd_amount(&self) -> &str {
        &self.usd_amount
    }

    pub fn address_check(&self) -> Option<AddressCheck> {
        self.address_check
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        self.confirmation.as_ref()
    }

    pub fn confirmed(&self) -> Option<&ConfirmedTransfer> {
        self.confirmed.as_ref()
    }

    pub fn network_fee(&self) -> Decimal {
        self.form.fee_speed.fee()
    }

    pub fn selected_asset(&self) -> Option<&WalletAsset> {
        self.assets
            .iter()
            .find(|asset| asset.symbol == self.form.asset)
    }

    fn price(&self) -> Decimal {
        self.selected_asset()
            .map(|asset| asset.price)
            .unwrap_or(Decimal::from(50_000))
    }

    pub fn select_asset(&mut self, symbol: &str) {
        self.form.asset = symbol.to_string();
        self.refresh_usd_amount();
        self.revalidate();
    }

    pub fn set_fee_speed(&mut self, speed: FeeSpeed) {
        self.form.fee_speed = speed;
        self.revalidate();
    }

    /// Change the recipient and restart the live address check.
    pub fn set_recipient(&mut self, address: &str, scheduler: &mut Scheduler<AppEvent>) {
        self.form.recipient = address.to_string();
        self.revalidate();

        // Any check still in flight is for an older address.
        self.recipient_check.renew();
        if address.chars().count() > LIVE_CHECK_MIN_LEN {
            self.address_check = Some(AddressCheck::Validating);
            scheduler.schedule(
                RECIPIENT_CHECK_DELAY,
                self.recipient_check.token(),
                AppEvent::Send(Completion::RecipientChecked),
            );
        } else {
            self.address_check = None;
        }
    }

    pub fn scan_qr(&mut self, scheduler: &mut Scheduler<AppEvent>) {
        self.set_recipient(SCANNED_ADDRESS, scheduler);
    }

    pub fn toggle_amount_mode(&mut self) {
        self.amount_mode = match self.amount_mode {
            AmountMode::Crypto => AmountMode::Usd,
            AmountMode::Usd => AmountMode::Crypto,
        };
    }

    /// Set the amount in asset units.
    pub fn set_amount(&mut self, amount: &str) {
        self.form.amount = amount.to_string();
        self.refresh_usd_amount();
        self.revalidate();
    }

    /// Set the amount in USD, converting to asset units at the mock price.
    pub fn set_usd_amount(&mut self, usd: &str) {
        self.usd_amount = usd.to_string();

        let price = self.price();
        self.form.amount = parse_amount(usd)
            .and_then(|usd| usd.checked_div(price))
            .map(|amount| fixed(amount, 8))
            .unwrap_or_default();
        self.revalidate();
    }

    /// Send the whole balance of the selected asset.
    pub fn fill_max(&mut self) {
        if let Some(balance) = self.selected_asset().map(|asset| asset.balance) {
            self.set_amount(&balance.normalize().to_string());
        }
    }

    fn refresh_usd_amount(&mut self) {
        self.usd_amount = parse_amount(&self.form.amount)
            .and_then(|amount| amount.checked_mul(self.price()))
            .map(|usd| fixed(usd, 2))
            .unwrap_or_default();
    }

    fn revalidate(&mut self) {
        self.errors = validate(&self.form, self.selected_asset());
    }

    pub fn preview(&self) -> TransferPreview {
        let price = self.price();
        let fee = self.network_fee();
        // Amounts too large to price are previewed as if nothing was entered.
        let amount = parse_amount(&self.form.amount).filter(|amount| {
            amount.checked_mul(price).is_some()
                && amount
                    .checked_add(fee)
                    .and_then(|total| total.checked_mul(price))
                    .is_some()
        });
        let total = amount.map(|amount| amount + fee).unwrap_or_default();

        let remaining = match (self.selected_asset(), amount) {
            (Some(asset), Some(_)) => asset.balance.checked_sub(total).map(|r| fixed(r, 8)),
            _ => None,
        };

        TransferPreview {
            asset: self.form.asset.clone(),
            recipient: truncate_middle(&self.form.recipient, 6, 6),
            amount: if self.form.amount.is_empty() {
                "0.00000000".to_string()
            } else {
                self.form.amount.clone()
            },
            fee: fixed(fee, 8),
            total: fixed(total, 8),
            usd_amount: fixed(amount.unwrap_or_default() * price, 2),
            usd_fee: fixed(fee * price, 2),
            usd_total: fixed(total * price, 2),
            remaining,
        }
    }

    /// Open the confirmation modal. Refused while the form has errors.
    pub fn open_confirmation(&mut self) -> bool {
        if !self.is_valid() {
            return false;
        }

        self.confirmation_lifetime.renew();
        self.confirmation = Some(Confirmation::new());

        true
    }

    pub fn set_password(&mut self, password: &str) {
        if let Some(confirmation) = self.confirmation.as_mut() {
            confirmation.password = password.to_string();
        }
    }

    /// Check the password and, when it matches, start the simulated submission.
    pub fn authenticate(&mut self, scheduler: &mut Scheduler<AppEvent>) -> bool {
        let Some(confirmation) = self.confirmation.as_mut() else {
            return false;
        };
        if confirmation.step != ConfirmStep::Auth || confirmation.is_loading {
            return false;
        }

        if confirmation.password.is_empty() {
            confirmation.error = Some("Please enter your password".to_string());
            return false;
        }
        if confirmation.password != DEMO_PASSWORD {
            confirmation.error = Some(format!("Incorrect password. Try: {DEMO_PASSWORD}"));
            return false;
        }

        confirmation.error = None;
        confirmation.is_loading = true;
        scheduler.schedule(
            AUTH_DELAY,
            self.confirmation_lifetime.token(),
            AppEvent::Send(Completion::Authenticated),
        );

        true
    }

    /// Dismiss the confirmation modal. After a successful send this leads to the history.
    pub fn close_confirmation(&mut self) -> Option<Route> {
        let confirmation = self.confirmation.take()?;
        self.confirmation_lifetime.renew();

        (confirmation.step == ConfirmStep::Success).then_some(Route::Transactions)
    }

    /// Escape only dismisses the modal before the transfer is underway.
    pub fn escape(&mut self) -> Option<Route> {
        match self.confirmation.as_ref().map(|c| c.step) {
            Some(ConfirmStep::Auth) => self.close_confirmation(),
            _ => None,
        }
    }

    pub fn handle(
        &mut self,
        completion: Completion,
        scheduler: &mut Scheduler<AppEvent>,
        rng: &mut impl Rng,
    ) -> Option<Route> {
        match completion {
            Completion::RecipientChecked => {
                let len = self.form.recipient.chars().count();
                let valid = (MIN_ADDRESS_LEN..=MAX_ADDRESS_LEN).contains(&len);
                self.address_check = Some(if valid {
                    AddressCheck::Valid
                } else {
                    AddressCheck::Invalid
                });
            }
            Completion::Authenticated => {
                let confirmation = self.confirmation.as_mut()?;
                confirmation.step = ConfirmStep::Processing;
                confirmation.is_loading = false;
                scheduler.schedule(
                    PROCESSING_DELAY,
                    self.confirmation_lifetime.token(),
                    AppEvent::Send(Completion::Processed),
                );
            }
            Completion::Processed => {
                let hash = random_tx_hash(rng);
                let preview = self.preview();
                let confirmation = self.confirmation.as_mut()?;
                confirmation.step = ConfirmStep::Success;
                confirmation.hash = Some(hash.clone());

                info!("Submitted {} {} as {hash}", preview.amount, preview.asset);
                self.confirmed = Some(ConfirmedTransfer {
                    asset: preview.asset,
                    amount: self.form.amount.clone(),
                    recipient: self.form.recipient.clone(),
                    fee: preview.fee,
                    total: preview.total,
                    hash,
                    status: TxStatus::Pending,
                    timestamp: chrono::Utc::now().naive_utc(),
                });

                // Leaves for the history whether or not the modal is dismissed.
                scheduler.schedule(
                    REDIRECT_DELAY,
                    self.lifetime.token(),
                    AppEvent::Send(Completion::Redirect),
                );
            }
            Completion::Redirect => {
                debug!("Send complete, leaving for the transaction history");
                return Some(Route::Transactions);
            }
        }

        None
    }
}

/// Form validation, re-run on every edit.
pub fn validate(form: &SendForm, asset: Option<&WalletAsset>) -> FormErrors<SendField> {
    let mut errors = FormErrors::new();

    if form.recipient.trim().is_empty() {
        errors.insert(
            SendField::Recipient,
            "Recipient address is required".to_string(),
        );
    } else if form.recipient.chars().count() < MIN_ADDRESS_LEN {
        errors.insert(SendField::Recipient, "Invalid address format".to_string());
    }

    // Amounts that cannot be priced in USD are not valid amounts either.
    let total = parse_amount(&form.amount)
        .filter(|amount| *amount > Decimal::ZERO)
        .filter(|amount| asset.map_or(true, |asset| amount.checked_mul(asset.price).is_some()))
        .and_then(|amount| amount.checked_add(form.fee_speed.fee()));
    match total {
        Some(total) if asset.is_some_and(|asset| total > asset.balance) => {
            errors.insert(
                SendField::Amount,
                "Insufficient balance including network fee".to_string(),
            );
        }
        Some(_) => {}
        None => {
            errors.insert(SendField::Amount, "Please enter a valid amount".to_string());
        }
    }

    errors
}

/// A `0x`-prefixed, 64 hex digit transaction hash.
pub fn random_tx_hash(rng: &mut impl Rng) -> String {
    format!("0x{}", hex::encode(rng.gen::<[u8; 32]>()))
}

fn parse_amount(s: &str) -> Option<Decimal> {
    Decimal::from_str(s.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use similar_asserts::assert_eq;
    use tracing_test::traced_test;

    const RECIPIENT: &str = "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh";

    fn deliver(
        screen: &mut SendScreen,
        scheduler: &mut Scheduler<AppEvent>,
        rng: &mut StdRng,
        by: Duration,
    ) -> Vec<Route> {
        let until = scheduler.now() + by;
        let mut routes = Vec::new();
        while let Some(event) = scheduler.pop_due(until) {
            let AppEvent::Send(completion) = event else {
                panic!("Unexpected event {event:?}");
            };
            routes.extend(screen.handle(completion, scheduler, rng));
        }

        routes
    }

    #[test]
    #[traced_test]
    fn validation_messages() {
        let mut scheduler = Scheduler::new();
        let mut screen = SendScreen::new();
        assert_eq!(screen.errors().len(), 2);

        screen.set_recipient("bc1qshort", &mut scheduler);
        assert_eq!(
            screen.errors()[&SendField::Recipient],
            "Invalid address format"
        );

        screen.set_recipient(RECIPIENT, &mut scheduler);
        screen.set_amount("0.12345678");
        assert_eq!(
            screen.errors()[&SendField::Amount],
            "Insufficient balance including network fee"
        );

        screen.set_fee_speed(FeeSpeed::Slow);
        screen.set_amount("0.12344678");
        assert!(screen.is_valid());

        screen.set_amount("zero");
        assert_eq!(
            screen.errors()[&SendField::Amount],
            "Please enter a valid amount"
        );
        assert!(!screen.open_confirmation());
    }

    #[test]
    #[traced_test]
    fn preview_formats_amounts() {
        let mut scheduler = Scheduler::new();
        let mut screen = SendScreen::new();
        screen.set_recipient(RECIPIENT, &mut scheduler);
        screen.set_amount("0.01");

        let preview = screen.preview();
        assert_eq!(preview.recipient, "bc1qxy...hx0wlh");
        assert_eq!(preview.fee, "0.00005000");
        assert_eq!(preview.total, "0.01005000");
        assert_eq!(preview.usd_amount, "500.00");
        assert_eq!(preview.usd_fee, "2.50");
        assert_eq!(preview.usd_total, "502.50");
        assert_eq!(preview.remaining.as_deref(), Some("0.11340678"));
    }

    #[test]
    #[traced_test]
    fn oversized_amounts_are_invalid() {
        let mut scheduler = Scheduler::new();
        let mut screen = SendScreen::new();
        screen.set_recipient(RECIPIENT, &mut scheduler);

        let max = Decimal::MAX.to_string();
        screen.set_amount(&max);
        assert_eq!(screen.usd_amount(), "");
        assert_eq!(
            screen.errors()[&SendField::Amount],
            "Please enter a valid amount"
        );

        let preview = screen.preview();
        assert_eq!(preview.usd_amount, "0.00");
        assert_eq!(preview.total, "0.00005000");
        assert_eq!(preview.remaining, None);

        screen.toggle_amount_mode();
        screen.set_usd_amount(&max);
        assert!(!screen.form().amount.is_empty());
        assert!(screen.errors().contains_key(&SendField::Amount));
        screen.preview();
    }

    #[test]
    #[traced_test]
    fn hash_is_lowercase_hex() {
        let mut rng = StdRng::seed_from_u64(5);
        let hash = random_tx_hash(&mut rng);

        let digits = hash.strip_prefix("0x").unwrap();
        assert_eq!(digits.len(), 64);
        assert!(digits
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    #[traced_test]
    fn amount_modes_and_max() {
        let mut screen = SendScreen::new();
        screen.select_asset("ETH");

        screen.set_amount("1.5");
        assert_eq!(screen.usd_amount(), "3000.00");

        screen.toggle_amount_mode();
        assert_eq!(screen.amount_mode(), AmountMode::Usd);
        screen.set_usd_amount("100");
        assert_eq!(screen.form().amount, "0.05000000");

        screen.set_usd_amount("abc");
        assert_eq!(screen.form().amount, "");

        screen.fill_max();
        assert_eq!(screen.form().amount, "2.45678901");
        assert_eq!(FeeSpeed::from_name("ludicrous"), FeeSpeed::Standard);
    }

    #[test]
    #[traced_test]
    fn live_recipient_check_uses_latest_address() {
        let mut scheduler = Scheduler::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut screen = SendScreen::new();

        screen.set_recipient("0x742d35Cc66", &mut scheduler);
        assert_eq!(screen.address_check(), Some(AddressCheck::Validating));
        deliver(&mut screen, &mut scheduler, &mut rng, Duration::from_millis(300));

        screen.set_recipient(RECIPIENT, &mut scheduler);
        deliver(&mut screen, &mut scheduler, &mut rng, Duration::from_millis(300));
        assert_eq!(screen.address_check(), Some(AddressCheck::Validating));
        deliver(&mut screen, &mut scheduler, &mut rng, Duration::from_millis(200));
        assert_eq!(screen.address_check(), Some(AddressCheck::Valid));

        screen.set_recipient("short", &mut scheduler);
        assert_eq!(screen.address_check(), None);
    }

    #[test]
    #[traced_test]
    fn confirmation_flow() {
        let mut scheduler = Scheduler::new();
        let mut rng = StdRng::seed_from_u64(42);
        let mut screen = SendScreen::new();
        screen.scan_qr(&mut scheduler);
        screen.set_amount("0.01");
        assert!(screen.open_confirmation());

        assert!(!screen.authenticate(&mut scheduler));
        assert_eq!(
            screen.confirmation().unwrap().error(),
            Some("Please enter your password")
        );
        screen.set_password("hunter2");
        assert!(!screen.authenticate(&mut scheduler));
        assert_eq!(
            screen.confirmation().unwrap().error(),
            Some("Incorrect password. Try: wallet123")
        );

        screen.set_password(DEMO_PASSWORD);
        assert!(screen.authenticate(&mut scheduler));
        deliver(&mut screen, &mut scheduler, &mut rng, AUTH_DELAY);
        assert_eq!(
            screen.confirmation().unwrap().step(),
            ConfirmStep::Processing
        );
        assert_eq!(screen.escape(), None);

        deliver(&mut screen, &mut scheduler, &mut rng, PROCESSING_DELAY);
        let confirmation = screen.confirmation().unwrap();
        assert_eq!(confirmation.step(), ConfirmStep::Success);
        let hash = confirmation.hash().unwrap();
        assert!(hash.starts_with("0x"));
        assert_eq!(hash.len(), 66);

        let confirmed = screen.confirmed().unwrap();
        assert_eq!(confirmed.status, TxStatus::Pending);
        assert_eq!(confirmed.total, "0.01005000");

        let routes = deliver(&mut screen, &mut scheduler, &mut rng, REDIRECT_DELAY);
        assert_eq!(routes, [Route::Transactions]);
        assert_eq!(screen.close_confirmation(), Some(Route::Transactions));
    }

    #[test]
    #[traced_test]
    fn closing_during_auth_cancels_submission() {
        let mut scheduler = Scheduler::new();
        let mut rng = StdRng::seed_from_u64(3);
        let mut screen = SendScreen::new();
        screen.scan_qr(&mut scheduler);
        screen.set_amount("0.01");
        screen.open_confirmation();
        screen.set_password(DEMO_PASSWORD);
        screen.authenticate(&mut scheduler);

        assert_eq!(screen.escape(), None);
        assert!(screen.confirmation().is_none());

        let routes = deliver(&mut screen, &mut scheduler, &mut rng, Duration::from_secs(10));
        assert!(routes.is_empty());
        assert!(screen.confirmed().is_none());
    }
}
