//! Booster pricing configuration and individual quote rows.

use std::collections::BTreeMap;

use crate::league::{Division, League, Rank};
use crate::report::{ConfigIssue, ValidationReport};
use crate::types::Price;

/// A booster's bulk pricing policy.
///
/// Maps are ordered so a serialized config is stable across runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct PricingConfig {
    /// Price of a single step inside each league.
    #[cfg_attr(feature = "serde", serde(default))]
    pub league_base_prices: BTreeMap<League, Price>,
    /// Surcharge for crossing a league boundary, keyed `"Iron->Bronze"`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub transition_costs: BTreeMap<String, Price>,
    /// Client-defined per-division hints, stored verbatim with the config
    /// and never read when pricing.
    #[cfg(feature = "serde")]
    #[serde(default)]
    pub division_overrides: BTreeMap<String, serde_json::Value>,
}

/// Key of the boundary between two leagues in `transition_costs`.
pub fn transition_key(from: League, to: League) -> String {
    format!("{from}->{to}")
}

/// Boundaries every complete config prices: `Iron->Bronze` through
/// `Diamond->Master`.
pub fn required_transitions() -> impl Iterator<Item = (League, League)> {
    League::ALL[..League::DIVISIONED]
        .iter()
        .filter_map(|&l| l.next().map(|next| (l, next)))
}

impl PricingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-step price of `league`.
    pub fn with_base_price(mut self, league: League, price: Price) -> Self {
        self.league_base_prices.insert(league, price);
        self
    }

    /// Set the surcharge for crossing `from -> to`.
    pub fn with_transition(mut self, from: League, to: League, cost: Price) -> Self {
        self.transition_costs.insert(transition_key(from, to), cost);
        self
    }

    pub fn base_price(&self, league: League) -> Option<Price> {
        self.league_base_prices.get(&league).copied()
    }

    pub fn transition_cost(&self, from: League, to: League) -> Option<Price> {
        self.transition_costs
            .get(&transition_key(from, to))
            .copied()
    }

    /// Check every league has a non-negative base price and every boundary
    /// below Master has a non-negative transition cost.
    ///
    /// Collects all problems rather than stopping at the first.
    pub fn validate(&self) -> ValidationReport {
        let mut errors = Vec::new();

        for league in League::ALL {
            match self.base_price(league) {
                None => errors.push(ConfigIssue::MissingBasePrice(league)),
                Some(p) if p.is_negative() => errors.push(ConfigIssue::NegativeBasePrice(league)),
                Some(_) => {}
            }
        }

        for (from, to) in required_transitions() {
            let key = transition_key(from, to);
            match self.transition_cost(from, to) {
                None => errors.push(ConfigIssue::MissingTransitionCost(key)),
                Some(c) if c.is_negative() => errors.push(ConfigIssue::NegativeTransitionCost(key)),
                Some(_) => {}
            }
        }

        if errors.is_empty() {
            log::debug!("pricing config valid");
        } else {
            log::debug!("pricing config has {} problem(s)", errors.len());
        }
        ValidationReport::from_issues(errors)
    }
}

/// A quoted price for one exact step, overriding the bulk price of that step.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndividualPriceOverride {
    pub from_rank: League,
    pub from_division: Division,
    pub to_rank: League,
    pub to_division: Division,
    pub price: Price,
    /// Booster's estimate; informational only.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub estimated_hours: Option<f64>,
}

impl IndividualPriceOverride {
    pub fn new(from: Rank, to: Rank, price: Price) -> Self {
        Self {
            from_rank: from.league,
            from_division: from.division,
            to_rank: to.league,
            to_division: to.division,
            price,
            estimated_hours: None,
        }
    }

    pub fn from(&self) -> Rank {
        Rank {
            league: self.from_rank,
            division: self.from_division,
        }
    }

    pub fn to(&self) -> Rank {
        Rank {
            league: self.to_rank,
            division: self.to_division,
        }
    }
}
