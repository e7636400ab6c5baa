//! The rank ladder: every rung in ascending order with position arithmetic.
//!
//! The seven divisioned leagues occupy positions `0..=27`, four rungs each
//! (`IV` lowest). Master, Grandmaster and Challenger own one nominal rung each
//! at 28, 29 and 30; progress inside them is measured in LP instead.
//!
//! ```
//! use boostbook::ladder;
//! use boostbook::{Division, League, Rank};
//!
//! assert_eq!(ladder::position(League::Iron, Division::IV), Ok(0));
//! assert_eq!(ladder::position(League::Bronze, Division::IV), Ok(4));
//! assert_eq!(
//!     ladder::rank_at(27),
//!     Ok(Rank { league: League::Diamond, division: Division::I })
//! );
//! ```

use crate::error::{PricingError, Result};
use crate::league::{Division, League, Rank};
use crate::types::LeaguePoints;

/// One billable step inside a Master+ league equals this many LP.
pub const LP_PER_STEP: LeaguePoints = 50;

/// LP treated as completing a Master+ league when traversing it fully.
pub const PROMOTION_LP: LeaguePoints = 1000;

/// Rungs contributed by the divisioned leagues.
const DIVISIONED_RUNGS: usize = League::DIVISIONED * Division::ALL.len();

/// Total number of rungs on the ladder.
pub const LADDER_LEN: usize = DIVISIONED_RUNGS + (League::ALL.len() - League::DIVISIONED);

/// Absolute 0-based position of `(league, division)`.
pub fn position(league: League, division: Division) -> Result<usize> {
    let rank = Rank::new(league, division)?;
    Ok(rank_position(rank))
}

/// Like [`position`], but parses the league and division names.
pub fn position_of(league: &str, division: &str) -> Result<usize> {
    let league: League = league.parse()?;
    let rank = Rank::parse(league, division)?;
    Ok(rank_position(rank))
}

/// Position of an already-validated rank.
#[inline]
pub fn rank_position(rank: Rank) -> usize {
    if rank.league.is_high_elo() {
        DIVISIONED_RUNGS + (rank.league.index() - League::DIVISIONED)
    } else {
        rank.league.index() * Division::ALL.len() + rank.division.offset()
    }
}

/// League owning the rung at `position`.
pub fn league_at(position: usize) -> Result<League> {
    rank_at(position).map(|r| r.league)
}

/// League and division of the rung at `position`.
pub fn rank_at(position: usize) -> Result<Rank> {
    if position < DIVISIONED_RUNGS {
        let per_league = Division::ALL.len();
        Ok(Rank {
            league: League::ALL[position / per_league],
            division: Division::ALL[position % per_league],
        })
    } else if position < LADDER_LEN {
        Ok(Rank::floor(
            League::ALL[League::DIVISIONED + position - DIVISIONED_RUNGS],
        ))
    } else {
        Err(PricingError::InvalidPosition(position))
    }
}

/// Every rung, lowest first.
pub fn steps() -> impl Iterator<Item = Rank> {
    (0..LADDER_LEN).filter_map(|p| rank_at(p).ok())
}

/// Number of billable LP steps to cover `lp_diff`, rounding up.
#[inline]
pub fn lp_steps(lp_diff: LeaguePoints) -> u32 {
    lp_diff.div_ceil(LP_PER_STEP)
}
