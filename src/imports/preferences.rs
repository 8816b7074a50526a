use crate::screens::settings::Preferences;
use directories::ProjectDirs;
use std::{fs, io, path::Path, path::PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

const PREFERENCES_FILENAME: &str = "preferences.ron";

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("Preferences parse error")]
    Parse(#[from] ron::de::SpannedError),
}

/// Where preferences live when no explicit path is given, e.g.
/// `~/.config/vaultpay/preferences.ron` on Linux.
pub fn default_preferences_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "VaultPay", "vaultpay")
        .map(|dirs| dirs.config_dir().join(PREFERENCES_FILENAME))
}

/// Read preferences from a RON file. Missing fields take their defaults.
pub fn load_preferences(path: impl AsRef<Path>) -> Result<Preferences, PreferencesError> {
    let path = path.as_ref();
    debug!("Loading preferences from {path:?}");

    let data = fs::read_to_string(path)?;
    let preferences: Preferences = ron::from_str(&data)?;
    debug!("Parsed: {preferences:#?}");

    Ok(preferences)
}

/// Load preferences from the user's config directory.
///
/// Preferences are optional here: a missing file means defaults, and an unreadable one is
/// reported and then ignored.
pub fn load_default_preferences() -> Preferences {
    let Some(path) = default_preferences_path() else {
        debug!("No config directory available, using default preferences");
        return Preferences::default();
    };
    if !path.exists() {
        return Preferences::default();
    }

    load_preferences(&path).unwrap_or_else(|err| {
        warn!("Ignoring preferences at {path:?}: {err}");
        Preferences::default()
    })
}
