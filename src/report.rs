//! Config validation report types.

use std::fmt;

use crate::League;

/// Result of validating a [`PricingConfig`](crate::PricingConfig).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationReport {
    pub valid: bool,
    /// Every problem found, leagues first then transitions, in ladder order.
    pub errors: Vec<ConfigIssue>,
}

/// A single problem in a pricing config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    MissingBasePrice(League),
    NegativeBasePrice(League),
    MissingTransitionCost(String),
    NegativeTransitionCost(String),
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigIssue::MissingBasePrice(l) => write!(f, "Missing base price for league {l}"),
            ConfigIssue::NegativeBasePrice(l) => {
                write!(f, "Base price for {l} cannot be negative")
            }
            ConfigIssue::MissingTransitionCost(k) => write!(f, "Missing transition cost for {k}"),
            ConfigIssue::NegativeTransitionCost(k) => {
                write!(f, "Transition cost for {k} cannot be negative")
            }
        }
    }
}

// Serialized as the message, so a response body carries a plain list of strings.
#[cfg(feature = "serde")]
impl serde::Serialize for ConfigIssue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl ValidationReport {
    pub(crate) fn from_issues(errors: Vec<ConfigIssue>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Messages of every problem, in order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            return writeln!(f, "CONFIG OK");
        }
        writeln!(f, "CONFIG INVALID ({} problems):", self.errors.len())?;
        for issue in &self.errors {
            writeln!(f, "  - {issue}")?;
        }
        Ok(())
    }
}
