//! Pricing errors.

use crate::League;

/// Errors returned by ladder lookups and quote calculation.
///
/// Every kind is a caller-input or configuration-data problem; none is
/// transient. A failed call never produces a partial result.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PricingError {
    /// League name is not one of the ten known leagues.
    #[error("invalid league {0}")]
    InvalidLeague(String),

    /// Division does not belong to the named league (or is missing).
    #[error("invalid division {division} for league {league}")]
    InvalidDivision { league: League, division: String },

    /// Ladder lookup outside the ladder. Unreachable from valid input.
    #[error("invalid ladder position {0}")]
    InvalidPosition(usize),

    /// Destination is not strictly above the origin.
    #[error("destination {to} must be higher than origin {from}")]
    InvalidDirection { from: String, to: String },

    #[error("missing base price for league {0}")]
    MissingBasePrice(League),

    #[error("missing transition cost for {0}")]
    MissingTransitionCost(String),

    /// A Master+ endpoint was given without League Points.
    #[error("missing LP for {0} endpoint")]
    MissingLp(League),

    /// Discount percentage above 100.
    #[error("discount must be between 0 and 100 percent, got {0}")]
    InvalidDiscount(u8),
}

impl PricingError {
    /// Stable snake_case code for this kind, for front ends that map kinds
    /// to status codes.
    pub fn kind(&self) -> &'static str {
        match self {
            PricingError::InvalidLeague(_) => "invalid_league",
            PricingError::InvalidDivision { .. } => "invalid_division",
            PricingError::InvalidPosition(_) => "invalid_position",
            PricingError::InvalidDirection { .. } => "invalid_direction",
            PricingError::MissingBasePrice(_) => "missing_base_price",
            PricingError::MissingTransitionCost(_) => "missing_transition_cost",
            PricingError::MissingLp(_) => "missing_lp",
            PricingError::InvalidDiscount(_) => "invalid_discount",
        }
    }
}

pub type Result<T> = std::result::Result<T, PricingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            format!("{}", PricingError::MissingBasePrice(League::Gold)),
            "missing base price for league Gold"
        );
        assert_eq!(
            format!(
                "{}",
                PricingError::MissingTransitionCost("Iron->Bronze".into())
            ),
            "missing transition cost for Iron->Bronze"
        );
        assert_eq!(
            format!(
                "{}",
                PricingError::InvalidDivision {
                    league: League::Master,
                    division: "III".into()
                }
            ),
            "invalid division III for league Master"
        );
    }

    #[test]
    fn kind_codes() {
        assert_eq!(
            PricingError::InvalidLeague("Wood".into()).kind(),
            "invalid_league"
        );
        assert_eq!(PricingError::MissingLp(League::Master).kind(), "missing_lp");
        assert_eq!(
            PricingError::InvalidDirection {
                from: "Gold I".into(),
                to: "Gold II".into()
            }
            .kind(),
            "invalid_direction"
        );
    }

    #[test]
    fn is_error() {
        let err: Box<dyn std::error::Error> = Box::new(PricingError::InvalidPosition(99));
        assert!(err.to_string().contains("99"));
    }
}
