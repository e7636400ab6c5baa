//! Quote requests: endpoint parsing, pricing and ladder listing.

use std::fmt::Write as _;

use boostbook::{BoostType, PriceResult, Rank, RankPoint, ValidationReport, ladder};
use log::{info, warn};

use crate::error::{Error, Result};
use crate::profile::BoosterProfile;

/// A boost to price, as typed on the command line.
#[derive(Debug, Clone)]
pub struct QuoteRequest {
    /// `"Gold II"`, or a bare high-elo league such as `"Master"`.
    pub from: String,
    pub to: String,
    pub from_lp: Option<u32>,
    pub to_lp: Option<u32>,
    pub boost_type: BoostType,
}

/// Parse one endpoint. LP is kept only for Master and above.
pub fn parse_endpoint(text: &str, lp: Option<u32>) -> Result<RankPoint> {
    let rank: Rank = text.parse()?;
    if rank.league.is_high_elo() {
        return Ok(RankPoint {
            league: rank.league,
            division: None,
            lp,
        });
    }
    if lp.is_some() {
        warn!("ignoring LP for divisioned rank {rank}");
    }
    Ok(RankPoint::at(rank))
}

/// Price `request` against `profile`.
pub fn run_quote(profile: &BoosterProfile, request: &QuoteRequest) -> Result<PriceResult> {
    let from = parse_endpoint(&request.from, request.from_lp)?;
    let to = parse_endpoint(&request.to, request.to_lp)?;

    let quote = profile
        .engine()
        .quote(&from, &to)?
        .for_boost_type(request.boost_type, profile.duo_discount_pct)?;
    info!("{from} -> {to}: {}", quote.total);
    Ok(quote)
}

/// Outcome of the `validate` command once `report` has been shown: an
/// invalid config fails with the problem count only.
pub fn validation_outcome(report: &ValidationReport) -> Result<()> {
    if report.valid {
        Ok(())
    } else {
        Err(Error::ConfigRejected(report.errors.len()))
    }
}

/// One line per ladder rung: position and rank.
pub fn render_ladder() -> String {
    let mut out = String::new();
    for (position, rank) in ladder::steps().enumerate() {
        let unit = if rank.league.is_high_elo() {
            format!("  ({} LP per step)", ladder::LP_PER_STEP)
        } else {
            String::new()
        };
        let _ = writeln!(out, "{position:>3}  {rank}{unit}");
    }
    out
}
