//! User settings for expense-guard
//!
//! Holds the monthly budget ceiling handed to the budget service, so the
//! ceiling is an explicit value rather than a constant baked into the code.

use serde::{Deserialize, Serialize};

use super::paths::GuardPaths;
use crate::error::GuardError;

/// User settings for expense-guard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Spending ceiling for the month
    #[serde(default = "default_monthly_budget")]
    pub monthly_budget: f64,

    /// Currency label shown next to amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_monthly_budget() -> f64 {
    10_000.0
}

fn default_currency() -> String {
    "KES".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            monthly_budget: default_monthly_budget(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &GuardPaths) -> Result<Self, GuardError> {
        let settings_path = paths.settings_file();

        let settings = if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<Settings>(&contents)?
        } else {
            // Don't save yet - let caller decide when to persist
            Settings::default()
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &GuardPaths) -> Result<(), GuardError> {
        self.validate()?;
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(paths.settings_file(), contents)?;
        Ok(())
    }

    /// The budget ceiling is a divisor, so it must be a positive finite number
    pub fn validate(&self) -> Result<(), GuardError> {
        if !self.monthly_budget.is_finite() || self.monthly_budget <= 0.0 {
            return Err(GuardError::Config(format!(
                "Monthly budget must be a positive number, got {}",
                self.monthly_budget
            )));
        }
        Ok(())
    }
}
