use super::{AppEvent, FormErrors};
use crate::nav::Route;
use crate::util::timer::{Lifetime, Scheduler};
use std::time::Duration;
use tracing::{debug, info};

pub const SIGN_IN_DELAY: Duration = Duration::from_millis(1500);
pub const TWO_FACTOR_DELAY: Duration = Duration::from_millis(1000);
pub const BIOMETRIC_DELAY: Duration = Duration::from_millis(2000);
pub const SOCIAL_DELAY: Duration = Duration::from_millis(1500);

pub const DEMO_EMAIL: &str = "demo@vaultpay.com";
pub const DEMO_PASSWORD: &str = "VaultPay123!";
pub const DEMO_TWO_FACTOR_CODE: &str = "123456";

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Completion {
    /// Credentials as they were when the form was submitted.
    CredentialsChecked { email: String, password: String },
    CodeChecked { code: String },
    Biometric,
    Social(SocialProvider),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SocialProvider {
    Google,
    Apple,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum LoginField {
    Email,
    Password,
    TwoFactor,
    /// Errors not tied to a single field.
    General,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LoginStep {
    #[default]
    Credentials,
    TwoFactor,
}

#[derive(Debug, Default)]
pub struct LoginScreen {
    lifetime: Lifetime,
    step: LoginStep,
    email: String,
    password: String,
    show_password: bool,
    code: String,
    errors: FormErrors<LoginField>,
    is_loading: bool,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> LoginStep {
        self.step
    }

    pub fn errors(&self) -> &FormErrors<LoginField> {
        &self.errors
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }

    pub fn toggle_show_password(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.to_string();
        self.errors.remove(&LoginField::Email);
    }

    pub fn set_password(&mut self, password: &str) {
        self.password = password.to_string();
        self.errors.remove(&LoginField::Password);
    }

    pub fn set_code(&mut self, code: &str) {
        self.code = code.to_string();
        self.errors.remove(&LoginField::TwoFactor);
    }

    pub fn validate(&mut self) -> bool {
        self.errors.clear();

        if self.email.trim().is_empty() {
            self.errors
                .insert(LoginField::Email, "Email is required".to_string());
        } else if !looks_like_email(&self.email) {
            self.errors.insert(
                LoginField::Email,
                "Please enter a valid email address".to_string(),
            );
        }

        if self.password.trim().is_empty() {
            self.errors
                .insert(LoginField::Password, "Password is required".to_string());
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            self.errors.insert(
                LoginField::Password,
                format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
            );
        }

        self.errors.is_empty()
    }

    /// Validate and start the simulated sign-in.
    pub fn submit(&mut self, scheduler: &mut Scheduler<AppEvent>) -> bool {
        if !self.validate() {
            return false;
        }

        self.start(
            scheduler,
            SIGN_IN_DELAY,
            Completion::CredentialsChecked {
                email: self.email.clone(),
                password: self.password.clone(),
            },
        );

        true
    }

    pub fn verify_code(&mut self, scheduler: &mut Scheduler<AppEvent>) -> bool {
        if self.code.trim().is_empty() {
            self.errors = FormErrors::from([(
                LoginField::TwoFactor,
                "Verification code is required".to_string(),
            )]);
            return false;
        }

        self.start(
            scheduler,
            TWO_FACTOR_DELAY,
            Completion::CodeChecked {
                code: self.code.clone(),
            },
        );

        true
    }

    pub fn back_to_credentials(&mut self) {
        self.step = LoginStep::Credentials;
    }

    pub fn biometric(&mut self, scheduler: &mut Scheduler<AppEvent>) {
        self.start(scheduler, BIOMETRIC_DELAY, Completion::Biometric);
    }

    pub fn social(&mut self, provider: SocialProvider, scheduler: &mut Scheduler<AppEvent>) {
        self.start(scheduler, SOCIAL_DELAY, Completion::Social(provider));
    }

    fn start(&mut self, scheduler: &mut Scheduler<AppEvent>, delay: Duration, call: Completion) {
        self.is_loading = true;
        scheduler.schedule(delay, self.lifetime.token(), AppEvent::Login(call));
    }

    pub fn handle(
        &mut self,
        completion: Completion,
        _scheduler: &mut Scheduler<AppEvent>,
    ) -> Option<Route> {
        self.is_loading = false;

        match completion {
            Completion::CredentialsChecked { email, password } => {
                if email != DEMO_EMAIL || password != DEMO_PASSWORD {
                    debug!("Rejected credentials for `{email}`");
                    self.errors = FormErrors::from([(
                        LoginField::General,
                        format!(
                            "Invalid credentials. Use email: {DEMO_EMAIL} and password: {DEMO_PASSWORD}"
                        ),
                    )]);
                    return None;
                }
                self.step = LoginStep::TwoFactor;
                None
            }
            Completion::CodeChecked { code } => {
                if code != DEMO_TWO_FACTOR_CODE {
                    self.errors = FormErrors::from([(
                        LoginField::TwoFactor,
                        format!("Invalid code. Use: {DEMO_TWO_FACTOR_CODE}"),
                    )]);
                    return None;
                }
                info!("Signed in as {DEMO_EMAIL}");
                Some(Route::Dashboard)
            }
            Completion::Biometric => Some(Route::Dashboard),
            Completion::Social(provider) => {
                info!("Signed in with {provider:?}");
                Some(Route::Dashboard)
            }
        }
    }
}

/// Loose `x@y.z` shape check: somewhere in the text, a run without whitespace holding an `@`
/// with something before it, then a `.` with something on either side.
fn looks_like_email(s: &str) -> bool {
    s.split_whitespace().any(|token| {
        let chars: Vec<char> = token.chars().collect();
        let Some(at) = chars.iter().skip(1).position(|c| *c == '@').map(|i| i + 1) else {
            return false;
        };

        chars
            .iter()
            .enumerate()
            .any(|(i, c)| *c == '.' && i > at + 1 && i + 1 < chars.len())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn deliver(screen: &mut LoginScreen, scheduler: &mut Scheduler<AppEvent>, by: Duration) -> Option<Route> {
        let until = scheduler.now() + by;
        let mut route = None;
        while let Some(event) = scheduler.pop_due(until) {
            let AppEvent::Login(completion) = event else {
                panic!("Unexpected event {event:?}");
            };
            route = screen.handle(completion, scheduler).or(route);
        }

        route
    }

    #[test]
    #[traced_test]
    fn email_shape() {
        assert!(looks_like_email("demo@vaultpay.com"));
        assert!(looks_like_email("a@b.c"));
        assert!(looks_like_email("  x@y.z  "));
        assert!(!looks_like_email("@vaultpay.com"));
        assert!(!looks_like_email("demo@vaultpay"));
        assert!(!looks_like_email("demo@.com"));
        assert!(!looks_like_email("demo@vaultpay."));
        assert!(!looks_like_email("demo @vaultpay.com"));
    }

    #[test]
    #[traced_test]
    fn validation_messages() {
        let mut scheduler = Scheduler::new();
        let mut screen = LoginScreen::new();
        assert!(!screen.submit(&mut scheduler));
        assert_eq!(screen.errors()[&LoginField::Email], "Email is required");
        assert_eq!(screen.errors()[&LoginField::Password], "Password is required");

        screen.set_email("demo");
        screen.set_password("12345");
        assert!(!screen.validate());
        assert_eq!(
            screen.errors()[&LoginField::Email],
            "Please enter a valid email address"
        );
        assert_eq!(
            screen.errors()[&LoginField::Password],
            "Password must be at least 6 characters"
        );

        screen.set_email(DEMO_EMAIL);
        assert!(!screen.errors().contains_key(&LoginField::Email));
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    #[traced_test]
    fn sign_in_with_two_factor() {
        let mut scheduler = Scheduler::new();
        let mut screen = LoginScreen::new();

        screen.set_email(DEMO_EMAIL);
        screen.set_password("wrong-password");
        assert!(screen.submit(&mut scheduler));
        assert!(screen.is_loading());
        assert_eq!(deliver(&mut screen, &mut scheduler, SIGN_IN_DELAY), None);
        assert!(screen.errors()[&LoginField::General].starts_with("Invalid credentials"));
        assert_eq!(screen.step(), LoginStep::Credentials);

        screen.set_password(DEMO_PASSWORD);
        assert!(screen.submit(&mut scheduler));
        assert_eq!(deliver(&mut screen, &mut scheduler, SIGN_IN_DELAY), None);
        assert_eq!(screen.step(), LoginStep::TwoFactor);

        assert!(!screen.verify_code(&mut scheduler));
        screen.set_code("000000");
        assert!(screen.verify_code(&mut scheduler));
        assert_eq!(deliver(&mut screen, &mut scheduler, TWO_FACTOR_DELAY), None);
        assert_eq!(
            screen.errors()[&LoginField::TwoFactor],
            "Invalid code. Use: 123456"
        );

        screen.set_code(DEMO_TWO_FACTOR_CODE);
        screen.verify_code(&mut scheduler);
        assert_eq!(
            deliver(&mut screen, &mut scheduler, TWO_FACTOR_DELAY),
            Some(Route::Dashboard)
        );
    }

    #[test]
    #[traced_test]
    fn biometric_and_social() {
        let mut scheduler = Scheduler::new();
        let mut screen = LoginScreen::new();

        screen.biometric(&mut scheduler);
        assert_eq!(deliver(&mut screen, &mut scheduler, Duration::from_millis(1999)), None);
        assert_eq!(
            deliver(&mut screen, &mut scheduler, Duration::from_millis(1)),
            Some(Route::Dashboard)
        );

        screen.social(SocialProvider::Apple, &mut scheduler);
        assert_eq!(
            deliver(&mut screen, &mut scheduler, SOCIAL_DELAY),
            Some(Route::Dashboard)
        );
    }
}
