// Allow our dollar.cents digit grouping convention (e.g., 100_00 = $100.00)
#![allow(clippy::inconsistent_digit_grouping)]

//! # boostbook
//!
//! A deterministic pricing engine for rank-boosting services.
//!
//! ## Features
//!
//! - **Rank ladder**: ten leagues, four divisions each below Master, LP above
//! - **Bulk pricing**: per-league step prices plus league-transition surcharges
//! - **Quoted steps**: individually priced steps interleaved with bulk runs
//! - **High elo**: Master, Grandmaster and Challenger priced per 50 LP
//! - **Exact decimal prices**: line costs keep every configured digit; only the total is rounded to the cent
//!
//! ## Quick Start
//!
//! ```
//! use boostbook::{League, Price, PricingConfig, PricingEngine, RankPoint};
//!
//! let config = PricingConfig::new()
//!     .with_base_price(League::Iron, Price::cents(15_00))
//!     .with_base_price(League::Bronze, Price::cents(20_00))
//!     .with_transition(League::Iron, League::Bronze, Price::cents(2_00));
//!
//! let engine = PricingEngine::new(&config);
//! let from = RankPoint::at("Iron IV".parse().unwrap());
//! let to = RankPoint::at("Bronze III".parse().unwrap());
//! let quote = engine.quote(&from, &to).unwrap();
//!
//! // 4 Iron steps, the Iron->Bronze surcharge, 1 Bronze step
//! assert_eq!(quote.total, Price::cents(82_00));
//! assert_eq!(quote.total, quote.itemized_total());
//! ```
//!
//! ## Validating a config
//!
//! ```
//! use boostbook::PricingConfig;
//!
//! let report = PricingConfig::new().validate();
//! assert!(!report.valid);
//! assert_eq!(report.errors.len(), 17); // 10 leagues + 7 transitions
//! ```
//!
//! ## Quoted steps
//!
//! A booster may quote a single step individually. That step is billed at
//! the quoted price and never folded into the league's bulk line:
//!
//! ```
//! use boostbook::{
//!     calculate, IndividualPriceOverride, League, Price, PriceBreakdownLine, PricingConfig,
//!     RankPoint,
//! };
//!
//! let config = PricingConfig::new()
//!     .with_base_price(League::Iron, Price::cents(15_00))
//!     .with_transition(League::Iron, League::Bronze, Price::cents(2_00));
//! let quoted = IndividualPriceOverride::new(
//!     "Iron I".parse().unwrap(),
//!     "Bronze IV".parse().unwrap(),
//!     Price::cents(10_00),
//! );
//!
//! let from = RankPoint::at("Iron I".parse().unwrap());
//! let to = RankPoint::at("Bronze IV".parse().unwrap());
//! let quote = calculate(&config, &from, &to, &[quoted]).unwrap();
//!
//! assert_eq!(quote.total, Price::cents(12_00));
//! assert!(matches!(quote.breakdown[0], PriceBreakdownLine::IndividualStep { .. }));
//! ```
//!
//! ## Master and above
//!
//! ```
//! use boostbook::{calculate, League, Price, PricingConfig, RankPoint};
//!
//! let config = PricingConfig::new().with_base_price(League::Master, Price::cents(80_00));
//! let from = RankPoint::with_lp(League::Master, 100);
//! let to = RankPoint::with_lp(League::Master, 480);
//!
//! // 380 LP = 8 steps of 50 LP
//! assert_eq!(calculate(&config, &from, &to, &[]).unwrap().total, Price::cents(640_00));
//! ```

mod calculator;
mod config;
mod error;
pub mod ladder;
mod league;
mod report;
mod result;
mod types;

// Re-export public API
pub use calculator::{PricingEngine, RankPoint, calculate};
pub use config::{IndividualPriceOverride, PricingConfig, required_transitions, transition_key};
pub use error::{PricingError, Result};
pub use ladder::{LP_PER_STEP, PROMOTION_LP};
pub use league::{Division, League, Rank};
pub use report::{ConfigIssue, ValidationReport};
pub use result::{BoostType, PriceBreakdownLine, PriceResult};
pub use types::{LeaguePoints, Price};
