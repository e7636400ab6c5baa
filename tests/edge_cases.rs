// Allow our dollar.cents digit grouping convention (e.g., 100_00 = $100.00)
#![allow(clippy::inconsistent_digit_grouping)]

//! Edge-case tests: adversarial inputs to every public API.

use boostbook::{
    ConfigIssue, Division, League, Price, PricingConfig, PricingError, RankPoint, ladder,
    calculate,
};

fn flat_config(price: i64) -> PricingConfig {
    let mut config = PricingConfig::new();
    for league in League::ALL {
        config = config.with_base_price(league, Price::cents(price));
    }
    for (from, to) in boostbook::required_transitions() {
        config = config.with_transition(from, to, Price::cents(0));
    }
    config
}

// ============================================================================
// Ladder lookups
// ============================================================================

#[test]
fn unknown_league_name() {
    assert_eq!(
        ladder::position_of("Unranked", "IV"),
        Err(PricingError::InvalidLeague("Unranked".into()))
    );
    assert!(matches!(
        RankPoint::parse("", Some("I"), None),
        Err(PricingError::InvalidLeague(_))
    ));
}

#[test]
fn division_not_in_league() {
    assert!(matches!(
        ladder::position(League::Grandmaster, Division::IV),
        Err(PricingError::InvalidDivision { league: League::Grandmaster, .. })
    ));
    assert!(matches!(
        RankPoint::parse("Silver", Some("0"), None),
        Err(PricingError::InvalidDivision { league: League::Silver, .. })
    ));
}

#[test]
fn position_past_the_top() {
    assert_eq!(
        ladder::rank_at(ladder::LADDER_LEN),
        Err(PricingError::InvalidPosition(ladder::LADDER_LEN))
    );
}

#[test]
fn division_i_is_highest_everywhere() {
    for league in &League::ALL[..League::DIVISIONED] {
        let top = ladder::position(*league, Division::I).unwrap();
        for d in [Division::IV, Division::III, Division::II] {
            assert!(ladder::position(*league, d).unwrap() < top);
        }
    }
}

// ============================================================================
// Direction
// ============================================================================

#[test]
fn same_rank_is_not_a_boost() {
    let p = RankPoint::at("Platinum III".parse().unwrap());
    assert!(matches!(
        calculate(&flat_config(100), &p, &p, &[]),
        Err(PricingError::InvalidDirection { .. })
    ));
}

#[test]
fn high_elo_to_lower_high_elo() {
    let from = RankPoint::with_lp(League::Grandmaster, 10);
    let to = RankPoint::with_lp(League::Master, 900);
    assert!(matches!(
        calculate(&flat_config(100), &from, &to, &[]),
        Err(PricingError::InvalidDirection { .. })
    ));
}

#[test]
fn challenger_down_to_iron() {
    let from = RankPoint::with_lp(League::Challenger, 500);
    let to = RankPoint::at("Iron IV".parse().unwrap());
    let err = calculate(&flat_config(100), &from, &to, &[]).unwrap_err();
    assert_eq!(err.kind(), "invalid_direction");
    assert!(err.to_string().contains("Challenger 500 LP"));
}

#[test]
fn high_elo_division_other_than_i() {
    let from = RankPoint {
        league: League::Master,
        division: Some(Division::II),
        lp: Some(0),
    };
    let to = RankPoint::with_lp(League::Master, 100);
    assert!(matches!(
        calculate(&flat_config(100), &from, &to, &[]),
        Err(PricingError::InvalidDivision { .. })
    ));
}

// ============================================================================
// LP ranges
// ============================================================================

#[test]
fn single_lp_is_one_step() {
    let q = calculate(
        &flat_config(100),
        &RankPoint::with_lp(League::Challenger, 1499),
        &RankPoint::with_lp(League::Challenger, 1500),
        &[],
    )
    .unwrap();
    assert_eq!(q.total, Price::cents(100));
}

#[test]
fn origin_above_promotion_lp_adds_no_origin_line() {
    let q = calculate(
        &flat_config(100),
        &RankPoint::with_lp(League::Master, 1200),
        &RankPoint::with_lp(League::Grandmaster, 50),
        &[],
    )
    .unwrap();
    assert_eq!(q.breakdown.len(), 1);
    assert_eq!(q.total, Price::cents(100));
}

#[test]
fn grandmaster_zero_lp_target() {
    let q = calculate(
        &flat_config(100),
        &RankPoint::at("Diamond I".parse().unwrap()),
        &RankPoint::with_lp(League::Grandmaster, 0),
        &[],
    )
    .unwrap();
    // Diamond I -> Master I, full Master, nothing inside Grandmaster.
    assert_eq!(q.total, Price::cents(100 + 20 * 100));
}

// ============================================================================
// Config gaps
// ============================================================================

#[test]
fn empty_config_validation_lists_everything() {
    let report = PricingConfig::new().validate();
    assert!(!report.valid);
    let missing_leagues = report
        .errors
        .iter()
        .filter(|e| matches!(e, ConfigIssue::MissingBasePrice(_)))
        .count();
    let missing_transitions = report
        .errors
        .iter()
        .filter(|e| matches!(e, ConfigIssue::MissingTransitionCost(_)))
        .count();
    assert_eq!(missing_leagues, 10);
    assert_eq!(missing_transitions, 7);
}

#[test]
fn partial_config_prices_what_it_covers() {
    let config = PricingConfig::new().with_base_price(League::Gold, Price::cents(30_00));
    assert!(!config.validate().valid);
    let q = calculate(
        &config,
        &RankPoint::at("Gold IV".parse().unwrap()),
        &RankPoint::at("Gold I".parse().unwrap()),
        &[],
    )
    .unwrap();
    assert_eq!(q.total, Price::cents(90_00));
}

#[test]
fn master_price_missing_on_mixed_path() {
    let mut config = flat_config(100);
    config.league_base_prices.remove(&League::Master);
    let err = calculate(
        &config,
        &RankPoint::at("Diamond I".parse().unwrap()),
        &RankPoint::with_lp(League::Master, 10),
        &[],
    )
    .unwrap_err();
    assert_eq!(err, PricingError::MissingBasePrice(League::Master));
}

#[test]
fn diamond_to_master_surcharge_required_on_mixed_path() {
    let mut config = flat_config(100);
    config.transition_costs.remove("Diamond->Master");
    let err = calculate(
        &config,
        &RankPoint::at("Diamond I".parse().unwrap()),
        &RankPoint::with_lp(League::Master, 10),
        &[],
    )
    .unwrap_err();
    assert_eq!(
        err,
        PricingError::MissingTransitionCost("Diamond->Master".into())
    );
}

#[test]
fn zero_prices_are_free_but_itemized() {
    let q = calculate(
        &flat_config(0),
        &RankPoint::at("Iron IV".parse().unwrap()),
        &RankPoint::at("Silver IV".parse().unwrap()),
        &[],
    )
    .unwrap();
    assert_eq!(q.total, Price::ZERO);
    assert_eq!(q.breakdown.len(), 4);
}
