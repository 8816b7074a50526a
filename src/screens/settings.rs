use crate::util::toggles::Toggles;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Unknown settings section `{0}`")]
    Section(String),

    #[error("Unsupported currency `{0}`, expected one of: USD, EUR, GBP, JPY")]
    Currency(String),

    #[error("Unsupported language `{0}`, expected one of: en, es, fr, de, zh")]
    Language(String),
}

/// Collapsible panels of the settings page.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsSection {
    Security,
    Profile,
    Preferences,
    Privacy,
    Support,
}

impl SettingsSection {
    pub const ALL: [SettingsSection; 5] = [
        SettingsSection::Security,
        SettingsSection::Profile,
        SettingsSection::Preferences,
        SettingsSection::Privacy,
        SettingsSection::Support,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Security => "security",
            Self::Profile => "profile",
            Self::Preferences => "preferences",
            Self::Privacy => "privacy",
            Self::Support => "support",
        }
    }
}

impl FromStr for SettingsSection {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| SettingsError::Section(s.to_string()))
    }
}

/// Display currency.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Jpy,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Usd, Currency::Eur, Currency::Gbp, Currency::Jpy];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Usd => "US Dollar (USD)",
            Self::Eur => "Euro (EUR)",
            Self::Gbp => "British Pound (GBP)",
            Self::Jpy => "Japanese Yen (JPY)",
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|currency| currency.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SettingsError::Currency(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    De,
    Zh,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::En,
        Language::Es,
        Language::Fr,
        Language::De,
        Language::Zh,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
            Self::Zh => "zh",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Spanish",
            Self::Fr => "French",
            Self::De => "German",
            Self::Zh => "Chinese",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|language| language.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SettingsError::Language(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Transactions,
    PriceAlerts,
    Security,
    Marketing,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 4] = [
        NotificationKind::Transactions,
        NotificationKind::PriceAlerts,
        NotificationKind::Security,
        NotificationKind::Marketing,
    ];
}

/// User preferences, persisted as RON.
///
/// Every field has a default, so a preferences file only needs to name what it changes.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Preferences {
    pub dark_mode: bool,
    pub currency: Currency,
    pub language: Language,
    pub notifications: Toggles<NotificationKind>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_mode: true,
            currency: Currency::default(),
            language: Language::default(),
            notifications: Toggles::from_iter([
                (NotificationKind::Transactions, true),
                (NotificationKind::PriceAlerts, false),
                (NotificationKind::Security, true),
                (NotificationKind::Marketing, false),
            ]),
        }
    }
}

/// The settings page: which sections are expanded, and the preferences being edited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsScreen {
    expanded: Toggles<SettingsSection>,
    preferences: Preferences,
}

impl SettingsScreen {
    /// All sections start collapsed.
    pub fn new(preferences: Preferences) -> Self {
        Self {
            expanded: SettingsSection::ALL
                .into_iter()
                .map(|section| (section, false))
                .collect(),
            preferences,
        }
    }

    pub fn is_expanded(&self, section: SettingsSection) -> bool {
        self.expanded.is_on(&section)
    }

    /// Expand or collapse one section, returning whether it is now expanded.
    pub fn toggle_section(&mut self, section: SettingsSection) -> bool {
        self.expanded.toggle(section)
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn into_preferences(self) -> Preferences {
        self.preferences
    }

    pub fn set_dark_mode(&mut self, on: bool) {
        self.preferences.dark_mode = on;
    }

    pub fn set_currency(&mut self, currency: Currency) {
        self.preferences.currency = currency;
    }

    pub fn set_language(&mut self, language: Language) {
        self.preferences.language = language;
    }

    pub fn toggle_notification(&mut self, kind: NotificationKind) -> bool {
        self.preferences.notifications.toggle(kind)
    }
}
