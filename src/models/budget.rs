//! Budget zones
//!
//! The four tiers a month's spending falls into, by share of the ceiling used.

use std::fmt;

/// Spending status relative to the monthly ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetZone {
    /// Under 40% used
    Safe,
    /// 40% up to 70%
    Caution,
    /// 70% up to 90%
    Warning,
    /// 90% and above, including anything past the ceiling
    Exceeded,
}

impl BudgetZone {
    /// Classify a percentage of the ceiling used. Values above 100 are fine.
    pub fn from_percent_used(percent: f64) -> Self {
        if percent < 40.0 {
            Self::Safe
        } else if percent < 70.0 {
            Self::Caution
        } else if percent < 90.0 {
            Self::Warning
        } else {
            Self::Exceeded
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Safe => "SAFE",
            Self::Caution => "CAUTION",
            Self::Warning => "WARNING",
            Self::Exceeded => "EXCEEDED",
        }
    }

    /// One-line advice shown with the status
    pub fn advice(&self) -> &'static str {
        match self {
            Self::Safe => "You're doing great. Keep the discipline.",
            Self::Caution => "Time to switch to cheaper meals.",
            Self::Warning => "Spending is high. Cut back until the month ends.",
            Self::Exceeded => "The budget is spent.",
        }
    }
}

impl fmt::Display for BudgetZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
