pub use crate::imports::preferences::PreferencesError;
pub use crate::imports::transactions::ImportError;
pub use crate::model::{SortKeyError, TxStatusError, TxTypeError};
pub use crate::nav::RouteError;
pub use crate::screens::settings::SettingsError;
