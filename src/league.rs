//! Leagues, divisions and ranks.

use std::fmt;
use std::str::FromStr;

use crate::error::PricingError;

/// One of the ten major rank tiers, in ascending strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum League {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Emerald,
    Diamond,
    Master,
    Grandmaster,
    Challenger,
}

impl League {
    /// Every league, lowest first.
    pub const ALL: [League; 10] = [
        League::Iron,
        League::Bronze,
        League::Silver,
        League::Gold,
        League::Platinum,
        League::Emerald,
        League::Diamond,
        League::Master,
        League::Grandmaster,
        League::Challenger,
    ];

    /// Number of leagues that have four divisions.
    pub const DIVISIONED: usize = 7;

    /// 0-based rank of this league (Iron = 0, Challenger = 9).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Master, Grandmaster and Challenger: progress is measured in LP.
    #[inline]
    pub fn is_high_elo(self) -> bool {
        matches!(
            self,
            League::Master | League::Grandmaster | League::Challenger
        )
    }

    /// Divisions of this league, lowest first. High-elo leagues carry a single
    /// nominal division `I`.
    pub fn divisions(self) -> &'static [Division] {
        if self.is_high_elo() {
            &[Division::I]
        } else {
            &Division::ALL
        }
    }

    /// The league directly above, if any.
    pub fn next(self) -> Option<League> {
        League::ALL.get(self.index() + 1).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            League::Iron => "Iron",
            League::Bronze => "Bronze",
            League::Silver => "Silver",
            League::Gold => "Gold",
            League::Platinum => "Platinum",
            League::Emerald => "Emerald",
            League::Diamond => "Diamond",
            League::Master => "Master",
            League::Grandmaster => "Grandmaster",
            League::Challenger => "Challenger",
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for League {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        League::ALL
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PricingError::InvalidLeague(s.to_string()))
    }
}

/// Sub-tier within a divisioned league. `IV` is the lowest, `I` the highest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Division {
    IV,
    III,
    II,
    I,
}

impl Division {
    /// Every division, lowest first.
    pub const ALL: [Division; 4] = [Division::IV, Division::III, Division::II, Division::I];

    /// Offset within a league (IV = 0, I = 3).
    #[inline]
    pub fn offset(self) -> usize {
        self as usize
    }

    /// Look up a division by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Division> {
        let name = name.trim();
        Division::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name))
    }

    pub fn name(self) -> &'static str {
        match self {
            Division::IV => "IV",
            Division::III => "III",
            Division::II => "II",
            Division::I => "I",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A rung on the ladder: league plus division.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank {
    pub league: League,
    pub division: Division,
}

impl Rank {
    /// Build a rank, checking that the division belongs to the league.
    pub fn new(league: League, division: Division) -> Result<Rank, PricingError> {
        if !league.divisions().contains(&division) {
            return Err(PricingError::InvalidDivision {
                league,
                division: division.to_string(),
            });
        }
        Ok(Rank { league, division })
    }

    /// Parse a division name for `league`.
    pub fn parse(league: League, division: &str) -> Result<Rank, PricingError> {
        match Division::from_name(division) {
            Some(d) if league.divisions().contains(&d) => Ok(Rank {
                league,
                division: d,
            }),
            _ => Err(PricingError::InvalidDivision {
                league,
                division: division.trim().to_string(),
            }),
        }
    }

    /// The floor rung of a high-elo league (`Master I`, ...).
    pub fn floor(league: League) -> Rank {
        Rank {
            league,
            division: league.divisions()[0],
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.league, self.division)
    }
}

/// Parses `"Gold II"`, or a bare high-elo league name such as `"Master"`.
impl FromStr for Rank {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let league: League = parts.next().unwrap_or_default().parse()?;
        match (parts.next(), parts.next()) {
            (Some(division), None) => Rank::parse(league, division),
            (None, _) if league.is_high_elo() => Ok(Rank::floor(league)),
            (None, _) => Err(PricingError::InvalidDivision {
                league,
                division: "none".into(),
            }),
            (Some(_), Some(_)) => Err(PricingError::InvalidDivision {
                league,
                division: s.split_whitespace().skip(1).collect::<Vec<_>>().join(" "),
            }),
        }
    }
}

// Leagues and ranks travel as their display names so they work as
// map keys in any format.
#[cfg(feature = "serde")]
macro_rules! serde_via_str {
    ($ty:ty) => {
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

#[cfg(feature = "serde")]
serde_via_str!(League);
#[cfg(feature = "serde")]
serde_via_str!(Rank);

#[cfg(feature = "serde")]
impl serde::Serialize for Division {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Division {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Division::from_name(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown division {s}")))
    }
}
