//! Boost price calculation.
//!
//! A quote walks the ladder from origin to destination and emits one
//! breakdown line per billed item, in traversal order. Three strategies:
//!
//! - **normal**: both endpoints in divisioned leagues. Steps are grouped by
//!   the league they leave; each group is billed at that league's base price
//!   (individually quoted steps interleaved), and a transition surcharge
//!   follows every group whose last step crosses into the next league.
//! - **high-elo**: both endpoints in Master+, priced by LP in
//!   [`LP_PER_STEP`](crate::ladder::LP_PER_STEP) chunks.
//! - **mixed**: divisioned origin, Master+ destination. The normal walk up to
//!   `Master I`, then LP segments up to the destination.
//!
//! ```
//! use boostbook::{calculate, League, Price, PricingConfig, RankPoint};
//!
//! let config = PricingConfig::new()
//!     .with_base_price(League::Iron, Price::cents(15_00))
//!     .with_transition(League::Iron, League::Bronze, Price::cents(2_00));
//!
//! let from = RankPoint::parse("Iron", Some("I"), None).unwrap();
//! let to = RankPoint::parse("Bronze", Some("IV"), None).unwrap();
//! let quote = calculate(&config, &from, &to, &[]).unwrap();
//!
//! assert_eq!(quote.total, Price::cents(17_00));
//! assert_eq!(quote.breakdown.len(), 2);
//! ```

use std::fmt;

use rustc_hash::FxHashMap;

use crate::config::{IndividualPriceOverride, PricingConfig, transition_key};
use crate::error::{PricingError, Result};
use crate::ladder::{self, PROMOTION_LP};
use crate::league::{Division, League, Rank};
use crate::result::{PriceBreakdownLine, PriceResult};
use crate::types::{LeaguePoints, Price};

/// One end of a boost: a league with a division (below Master) or LP
/// (Master and above).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankPoint {
    pub league: League,
    #[cfg_attr(feature = "serde", serde(default))]
    pub division: Option<Division>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub lp: Option<LeaguePoints>,
}

impl RankPoint {
    /// A divisioned rung.
    pub fn at(rank: Rank) -> Self {
        Self {
            league: rank.league,
            division: Some(rank.division),
            lp: None,
        }
    }

    /// A Master+ league at `lp` League Points.
    pub fn with_lp(league: League, lp: LeaguePoints) -> Self {
        Self {
            league,
            division: None,
            lp: Some(lp),
        }
    }

    /// Parse league and division names as they arrive from a request.
    pub fn parse(league: &str, division: Option<&str>, lp: Option<LeaguePoints>) -> Result<Self> {
        let league: League = league.parse()?;
        let division = division
            .map(|d| Rank::parse(league, d).map(|r| r.division))
            .transpose()?;
        Ok(Self {
            league,
            division,
            lp,
        })
    }

    /// The ladder rung of this endpoint. Master+ endpoints resolve to their
    /// league's single rung.
    pub fn rank(&self) -> Result<Rank> {
        match self.division {
            Some(division) => Rank::new(self.league, division),
            None if self.league.is_high_elo() => Ok(Rank::floor(self.league)),
            None => Err(PricingError::InvalidDivision {
                league: self.league,
                division: "none".into(),
            }),
        }
    }

    fn require_lp(&self) -> Result<LeaguePoints> {
        self.lp.ok_or(PricingError::MissingLp(self.league))
    }
}

impl From<Rank> for RankPoint {
    fn from(rank: Rank) -> Self {
        RankPoint::at(rank)
    }
}

impl fmt::Display for RankPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.division, self.lp) {
            (_, Some(lp)) if self.league.is_high_elo() => write!(f, "{} {} LP", self.league, lp),
            (Some(d), _) => write!(f, "{} {}", self.league, d),
            (None, _) => write!(f, "{}", self.league),
        }
    }
}

fn wrong_direction(from: &impl fmt::Display, to: &impl fmt::Display) -> PricingError {
    PricingError::InvalidDirection {
        from: from.to_string(),
        to: to.to_string(),
    }
}

/// Prices boosts against one booster's config and quoted steps.
///
/// Holds no state between quotes; one engine can serve any number of
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct PricingEngine<'a> {
    config: &'a PricingConfig,
    overrides: FxHashMap<(Rank, Rank), Price>,
}

impl<'a> PricingEngine<'a> {
    /// Create an engine without individually quoted steps.
    ///
    /// The config is not re-validated here; call
    /// [`PricingConfig::validate`] before persisting or using it. Missing
    /// prices on the priced path still fail the quote.
    pub fn new(config: &'a PricingConfig) -> Self {
        Self {
            config,
            overrides: FxHashMap::default(),
        }
    }

    /// Add individually quoted steps. The first quote for a step wins.
    pub fn with_overrides<'o>(
        mut self,
        overrides: impl IntoIterator<Item = &'o IndividualPriceOverride>,
    ) -> Self {
        for o in overrides {
            self.overrides.entry((o.from(), o.to())).or_insert(o.price);
        }
        self
    }

    /// Access the config.
    pub fn config(&self) -> &PricingConfig {
        self.config
    }

    /// Price a boost from `from` to `to`.
    pub fn quote(&self, from: &RankPoint, to: &RankPoint) -> Result<PriceResult> {
        from.rank()?;
        to.rank()?;

        let mut lines = Vec::new();
        match (from.league.is_high_elo(), to.league.is_high_elo()) {
            (true, true) => {
                log::debug!("high-elo quote {from} -> {to}");
                self.high_elo(from, to, &mut lines)?;
            }
            (false, true) => {
                log::debug!("mixed quote {from} -> {to}");
                self.mixed(from, to, &mut lines)?;
            }
            (false, false) => {
                log::debug!("division quote {from} -> {to}");
                self.divisions(from.rank()?, to.rank()?, &mut lines)?;
            }
            (true, false) => return Err(wrong_direction(from, to)),
        }

        let result = PriceResult::from_breakdown(lines);
        log::debug!(
            "quoted {from} -> {to}: {} in {} lines",
            result.total,
            result.breakdown.len()
        );
        Ok(result)
    }

    fn base_price(&self, league: League) -> Result<Price> {
        self.config
            .base_price(league)
            .ok_or(PricingError::MissingBasePrice(league))
    }

    /// Walk division steps from `from` up to `to`.
    fn divisions(&self, from: Rank, to: Rank, out: &mut Vec<PriceBreakdownLine>) -> Result<()> {
        let from_pos = ladder::rank_position(from);
        let to_pos = ladder::rank_position(to);
        if from_pos >= to_pos {
            return Err(wrong_direction(&from, &to));
        }

        // Step `s` moves from rung `s - 1` to rung `s`.
        let mut step = from_pos + 1;
        while step <= to_pos {
            let league = ladder::league_at(step - 1)?;
            let start = step;
            while step < to_pos && ladder::league_at(step)? == league {
                step += 1;
            }
            self.league_segment(league, start, step, out)?;

            let reached = ladder::league_at(step)?;
            if reached != league {
                let cost = self
                    .config
                    .transition_cost(league, reached)
                    .ok_or_else(|| PricingError::MissingTransitionCost(transition_key(league, reached)))?;
                out.push(PriceBreakdownLine::Transition {
                    from: league,
                    to: reached,
                    cost,
                });
            }
            step += 1;
        }
        Ok(())
    }

    /// Bill steps `first..=last`, all leaving `league`.
    ///
    /// Quoted steps are emitted individually; runs of other steps between
    /// them collapse into one bulk line, keeping traversal order.
    fn league_segment(
        &self,
        league: League,
        first: usize,
        last: usize,
        out: &mut Vec<PriceBreakdownLine>,
    ) -> Result<()> {
        let price_per_step = self.base_price(league)?;
        let flush = |bulk: &mut u32, out: &mut Vec<PriceBreakdownLine>| {
            if *bulk > 0 {
                out.push(PriceBreakdownLine::LeagueSteps {
                    league,
                    steps: *bulk,
                    price_per_step,
                    cost: price_per_step * *bulk,
                });
                *bulk = 0;
            }
        };

        let mut bulk = 0u32;
        for step in first..=last {
            let from = ladder::rank_at(step - 1)?;
            let to = ladder::rank_at(step)?;
            match self.overrides.get(&(from, to)) {
                Some(&price) => {
                    log::trace!("quoted step {from} -> {to}: {price}");
                    flush(&mut bulk, out);
                    out.push(PriceBreakdownLine::IndividualStep {
                        from,
                        to,
                        price,
                        cost: price,
                    });
                }
                None => bulk += 1,
            }
        }
        flush(&mut bulk, out);
        Ok(())
    }

    /// Bill LP progress `from_lp -> to_lp` inside `league`. Empty ranges add
    /// no line but still require a base price.
    fn lp_segment(
        &self,
        league: League,
        from_lp: LeaguePoints,
        to_lp: LeaguePoints,
        out: &mut Vec<PriceBreakdownLine>,
    ) -> Result<()> {
        let price_per_step = self.base_price(league)?;
        let lp_diff = to_lp.saturating_sub(from_lp);
        if lp_diff == 0 {
            return Ok(());
        }
        let steps = ladder::lp_steps(lp_diff);
        out.push(PriceBreakdownLine::LpSteps {
            league,
            from_lp,
            to_lp,
            lp_diff,
            steps,
            price_per_step,
            cost: price_per_step * steps,
        });
        Ok(())
    }

    /// Full `0 -> PROMOTION_LP` segments for every league strictly between
    /// `below` and `above`.
    fn full_leagues_between(
        &self,
        below: League,
        above: League,
        out: &mut Vec<PriceBreakdownLine>,
    ) -> Result<()> {
        for &league in &League::ALL[below.index() + 1..above.index()] {
            self.lp_segment(league, 0, PROMOTION_LP, out)?;
        }
        Ok(())
    }

    fn high_elo(&self, from: &RankPoint, to: &RankPoint, out: &mut Vec<PriceBreakdownLine>) -> Result<()> {
        let from_lp = from.require_lp()?;
        let to_lp = to.require_lp()?;

        if from.league == to.league {
            if from_lp >= to_lp {
                return Err(wrong_direction(from, to));
            }
            return self.lp_segment(from.league, from_lp, to_lp, out);
        }
        if to.league < from.league {
            return Err(wrong_direction(from, to));
        }

        self.lp_segment(from.league, from_lp, PROMOTION_LP, out)?;
        self.full_leagues_between(from.league, to.league, out)?;
        self.lp_segment(to.league, 0, to_lp, out)
    }

    fn mixed(&self, from: &RankPoint, to: &RankPoint, out: &mut Vec<PriceBreakdownLine>) -> Result<()> {
        let to_lp = to.require_lp()?;

        self.divisions(from.rank()?, Rank::floor(League::Master), out)?;
        if to.league != League::Master {
            self.lp_segment(League::Master, 0, PROMOTION_LP, out)?;
            self.full_leagues_between(League::Master, to.league, out)?;
        }
        self.lp_segment(to.league, 0, to_lp, out)
    }
}

/// Price a boost in one call.
///
/// Equivalent to `PricingEngine::new(config).with_overrides(overrides).quote(from, to)`.
pub fn calculate(
    config: &PricingConfig,
    from: &RankPoint,
    to: &RankPoint,
    overrides: &[IndividualPriceOverride],
) -> Result<PriceResult> {
    PricingEngine::new(config)
        .with_overrides(overrides)
        .quote(from, to)
}
