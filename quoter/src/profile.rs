//! Booster profile loading and validation.
//!
//! A profile is a booster's pricing config with its quoted steps and duo
//! discount, stored as TOML (`.toml`) or JSON (anything else):
//!
//! ```toml
//! duo_discount_pct = 15
//!
//! [leagueBasePrices]
//! Iron = 15
//! Bronze = 20
//!
//! [transitionCosts]
//! "Iron->Bronze" = 2
//!
//! [[overrides]]
//! from_rank = "Iron"
//! from_division = "I"
//! to_rank = "Bronze"
//! to_division = "IV"
//! price = 10
//! ```

use std::path::Path;

use boostbook::{IndividualPriceOverride, PricingConfig, PricingEngine, PricingError};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoosterProfile {
    #[serde(flatten)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub overrides: Vec<IndividualPriceOverride>,
    /// Percent taken off duo boosts.
    #[serde(default)]
    pub duo_discount_pct: u8,
}

impl BoosterProfile {
    /// Load and validate a profile file.
    pub fn load(path: &Path) -> Result<Self> {
        let profile = Self::load_unchecked(path)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Load a profile file without validating its price table.
    pub fn load_unchecked(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::ProfileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let profile = Self::parse_unchecked(&contents, is_toml)?;
        log::info!(
            "loaded profile {} ({} quoted steps)",
            path.display(),
            profile.overrides.len()
        );
        Ok(profile)
    }

    /// Parse and validate a TOML profile.
    pub fn from_toml(toml: &str) -> Result<Self> {
        let profile: BoosterProfile = toml::from_str(toml)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Parse and validate a JSON profile.
    pub fn from_json(json: &str) -> Result<Self> {
        let profile: BoosterProfile = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Parse without validating.
    pub fn parse_unchecked(contents: &str, is_toml: bool) -> Result<Self> {
        Ok(if is_toml {
            toml::from_str(contents)?
        } else {
            serde_json::from_str(contents)?
        })
    }

    fn validate(&self) -> Result<()> {
        if self.duo_discount_pct > 100 {
            return Err(PricingError::InvalidDiscount(self.duo_discount_pct).into());
        }
        let report = self.pricing.validate();
        if !report.valid {
            log::warn!("profile rejected: {} problem(s)", report.errors.len());
            return Err(Error::InvalidProfile(report.messages()));
        }
        Ok(())
    }

    /// An engine over this profile's prices and quoted steps.
    pub fn engine(&self) -> PricingEngine<'_> {
        PricingEngine::new(&self.pricing).with_overrides(&self.overrides)
    }
}
