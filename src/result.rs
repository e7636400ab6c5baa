//! Quote result types.

use std::fmt;

use crate::error::{PricingError, Result};
use crate::types::{LeaguePoints, Price};
use crate::{League, Rank};

/// One itemized entry of a quote.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum PriceBreakdownLine {
    /// A run of consecutive division steps billed at the league's bulk price.
    LeagueSteps {
        league: League,
        steps: u32,
        #[cfg_attr(feature = "serde", serde(rename = "pricePerStep"))]
        price_per_step: Price,
        cost: Price,
    },
    /// Surcharge for crossing a league boundary.
    Transition {
        from: League,
        to: League,
        cost: Price,
    },
    /// A single step billed at its individually quoted price.
    IndividualStep {
        from: Rank,
        to: Rank,
        price: Price,
        cost: Price,
    },
    /// LP progress inside a Master+ league.
    LpSteps {
        league: League,
        from_lp: LeaguePoints,
        to_lp: LeaguePoints,
        lp_diff: LeaguePoints,
        steps: u32,
        #[cfg_attr(feature = "serde", serde(rename = "pricePerStep"))]
        price_per_step: Price,
        cost: Price,
    },
    /// Duo discount; `cost` is negative.
    DuoDiscount { percent: u8, cost: Price },
}

impl PriceBreakdownLine {
    pub fn cost(&self) -> Price {
        match self {
            PriceBreakdownLine::LeagueSteps { cost, .. }
            | PriceBreakdownLine::Transition { cost, .. }
            | PriceBreakdownLine::IndividualStep { cost, .. }
            | PriceBreakdownLine::LpSteps { cost, .. }
            | PriceBreakdownLine::DuoDiscount { cost, .. } => *cost,
        }
    }
}

impl fmt::Display for PriceBreakdownLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceBreakdownLine::LeagueSteps {
                league,
                steps,
                price_per_step,
                cost,
            } => write!(f, "{league} x{steps} @ {price_per_step}: {cost}"),
            PriceBreakdownLine::Transition { from, to, cost } => {
                write!(f, "transition {from}->{to}: {cost}")
            }
            PriceBreakdownLine::IndividualStep { from, to, cost, .. } => {
                write!(f, "{from} -> {to} (quoted): {cost}")
            }
            PriceBreakdownLine::LpSteps {
                league,
                from_lp,
                to_lp,
                steps,
                price_per_step,
                cost,
                ..
            } => write!(
                f,
                "{league} {from_lp}-{to_lp} LP x{steps} @ {price_per_step}: {cost}"
            ),
            PriceBreakdownLine::DuoDiscount { percent, cost } => {
                write!(f, "duo discount {percent}%: {cost}")
            }
        }
    }
}

/// Solo boosts are played by the booster alone; duo boosts with the client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum BoostType {
    #[default]
    Solo,
    Duo,
}

/// A fully itemized quote.
///
/// Line costs are exact; `total` is their sum rounded to the cent.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceResult {
    pub total: Price,
    pub breakdown: Vec<PriceBreakdownLine>,
}

impl PriceResult {
    /// Build a result whose total is the sum of `breakdown`, rounded to the
    /// cent.
    pub fn from_breakdown(breakdown: Vec<PriceBreakdownLine>) -> Self {
        let total = breakdown
            .iter()
            .map(PriceBreakdownLine::cost)
            .sum::<Price>()
            .round_cents();
        Self { total, breakdown }
    }

    /// Exact sum of every line's cost, before rounding.
    pub fn itemized_total(&self) -> Price {
        self.breakdown.iter().map(PriceBreakdownLine::cost).sum()
    }

    /// True if the itemized lines round to the reported total.
    pub fn is_consistent(&self) -> bool {
        self.itemized_total().round_cents() == self.total
    }

    /// Take `percent`% off the quote as a trailing `duo_discount` line.
    ///
    /// The discount is taken from the exact itemized sum and the total is
    /// rounded again afterwards. A zero percent discount leaves the result
    /// untouched.
    pub fn apply_duo_discount(mut self, percent: u8) -> Result<Self> {
        if percent > 100 {
            return Err(PricingError::InvalidDiscount(percent));
        }
        if percent == 0 {
            return Ok(self);
        }
        let discount = self.itemized_total().percent(percent);
        self.breakdown.push(PriceBreakdownLine::DuoDiscount {
            percent,
            cost: -discount,
        });
        self.total = self.itemized_total().round_cents();
        Ok(self)
    }

    /// Apply `discount_pct` only when `boost_type` is [`BoostType::Duo`].
    pub fn for_boost_type(self, boost_type: BoostType, discount_pct: u8) -> Result<Self> {
        match boost_type {
            BoostType::Solo => Ok(self),
            BoostType::Duo => self.apply_duo_discount(discount_pct),
        }
    }
}

impl fmt::Display for PriceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "QUOTE:")?;
        for line in &self.breakdown {
            writeln!(f, "  {line}")?;
        }
        writeln!(f, "TOTAL: {}", self.total)
    }
}
