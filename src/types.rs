//! Core types: Price, LeaguePoints

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg};
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Money in currency units, held as an exact decimal.
///
/// Configured prices keep every digit they were written with, and line costs
/// are exact products and sums of them. Only a quote's total is rounded,
/// once, with [`Price::round_cents`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(pub Decimal);

impl Price {
    pub const ZERO: Price = Price(Decimal::ZERO);

    /// `num * 10^-scale` units: `Price::new(15125, 3)` is $15.125.
    ///
    /// # Panics
    ///
    /// If `scale` exceeds 28.
    pub fn new(num: i64, scale: u32) -> Price {
        Price(Decimal::new(num, scale))
    }

    /// A whole number of cents: `Price::cents(1550)` is $15.50.
    pub fn cents(cents: i64) -> Price {
        Price::new(cents, 2)
    }

    /// Convert a float amount using its shortest decimal form, so `30.13`
    /// stays `30.13`. Returns `None` for NaN, infinities and out-of-range
    /// values.
    pub fn from_units(units: f64) -> Option<Price> {
        if !units.is_finite() {
            return None;
        }
        units.to_string().parse().ok()
    }

    /// Amount in currency units (e.g. dollars), as a float.
    #[inline]
    pub fn as_units(self) -> f64 {
        self.0.to_f64().unwrap_or(0.0)
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Round to the cent, half away from zero.
    pub fn round_cents(self) -> Price {
        Price(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// `self * count`, saturating at the decimal bounds.
    #[inline]
    pub fn times(self, count: u32) -> Price {
        Price(self.0.saturating_mul(Decimal::from(count)))
    }

    /// `percent`% of this amount, exact.
    pub fn percent(self, percent: u8) -> Price {
        Price(self.0.saturating_mul(Decimal::from(percent)) / Decimal::ONE_HUNDRED)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // At least two decimals; sub-cent digits are shown, never hidden.
        let mut amount = self.0.abs().normalize();
        if amount.scale() < 2 {
            amount.rescale(2);
        }
        if self.is_negative() {
            write!(f, "-${amount}")
        } else {
            write!(f, "${amount}")
        }
    }
}

impl FromStr for Price {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Price)
    }
}

impl Add for Price {
    type Output = Price;

    #[inline]
    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Price {
    #[inline]
    fn add_assign(&mut self, rhs: Price) {
        *self = *self + rhs;
    }
}

impl Mul<u32> for Price {
    type Output = Price;

    #[inline]
    fn mul(self, rhs: u32) -> Price {
        self.times(rhs)
    }
}

impl Neg for Price {
    type Output = Price;

    #[inline]
    fn neg(self) -> Price {
        Price(-self.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, |acc, p| acc + p)
    }
}

// Documents carry plain numbers in currency units (`15`, `2.5`).
#[cfg(feature = "serde")]
impl serde::Serialize for Price {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let whole = if self.0.fract().is_zero() {
            self.0.to_i64()
        } else {
            None
        };
        match whole {
            Some(whole) => serializer.serialize_i64(whole),
            None => serializer.serialize_f64(self.as_units()),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Price {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PriceVisitor;

        impl serde::de::Visitor<'_> for PriceVisitor {
            type Value = Price;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an amount in currency units")
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Price, E> {
                Ok(Price(Decimal::from(v)))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Price, E> {
                Ok(Price(Decimal::from(v)))
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Price, E> {
                Price::from_units(v)
                    .ok_or_else(|| E::custom(format!("price must be a finite amount, got {v}")))
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Price, E> {
                v.parse()
                    .map_err(|e| E::custom(format!("invalid price {v:?}: {e}")))
            }
        }

        deserializer.deserialize_any(PriceVisitor)
    }
}

/// League Points inside Master, Grandmaster and Challenger.
pub type LeaguePoints = u32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_ordering() {
        assert!(Price::cents(100) < Price::cents(200));
        assert!(Price::cents(-50) < Price::cents(50));
        assert_eq!(Price::cents(100), Price::new(1, 0));
    }

    #[test]
    fn price_display() {
        assert_eq!(format!("{}", Price::cents(10050)), "$100.50");
        assert_eq!(format!("{}", Price::cents(100)), "$1.00");
        assert_eq!(format!("{}", Price::cents(5)), "$0.05");
        assert_eq!(format!("{}", Price::cents(-250)), "-$2.50");
        assert_eq!(format!("{}", Price::new(45375, 3)), "$45.375");
        assert_eq!(format!("{}", Price::new(453700, 4)), "$45.37");
    }

    #[test]
    fn from_units_keeps_written_digits() {
        assert_eq!(Price::from_units(15.0), Some(Price::cents(1500)));
        assert_eq!(Price::from_units(2.5), Some(Price::cents(250)));
        assert_eq!(Price::from_units(0.125), Some(Price::new(125, 3)));
        assert_eq!(Price::from_units(30.13), Some(Price::cents(3013)));
        assert_eq!(Price::from_units(-3.0), Some(Price::cents(-300)));
        assert_eq!(Price::from_units(f64::NAN), None);
        assert_eq!(Price::from_units(f64::INFINITY), None);
    }

    #[test]
    fn parse() {
        assert_eq!("15.125".parse::<Price>().unwrap(), Price::new(15125, 3));
        assert!("fifteen".parse::<Price>().is_err());
    }

    #[test]
    fn rounds_to_cents_half_away_from_zero() {
        assert_eq!(Price::new(45375, 3).round_cents(), Price::cents(4538));
        assert_eq!(Price::new(45374, 3).round_cents(), Price::cents(4537));
        assert_eq!(Price::new(-15, 3).round_cents(), Price::cents(-2));
        assert_eq!(Price::cents(4500).round_cents(), Price::cents(4500));
    }

    #[test]
    fn arithmetic_is_exact() {
        assert_eq!(Price::cents(1500) * 3, Price::cents(4500));
        assert_eq!(Price::new(15125, 3) * 3, Price::new(45375, 3));
        assert_eq!(Price::cents(1500) + Price::cents(200), Price::cents(1700));
        assert_eq!(-Price::cents(250), Price::cents(-250));
        let total: Price = [Price::cents(1), Price::cents(2), Price::new(5, 3)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::new(35, 3));
        assert_eq!(Price::cents(4700).percent(15), Price::cents(705));
        assert_eq!(Price::cents(150).percent(1), Price::new(15, 3));
    }

    #[test]
    fn times_saturates() {
        assert_eq!(Price(Decimal::MAX).times(2), Price(Decimal::MAX));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_currency_units() {
        assert_eq!(serde_json::to_string(&Price::cents(4500)).unwrap(), "45");
        assert_eq!(serde_json::to_string(&Price::cents(250)).unwrap(), "2.5");
        assert_eq!(serde_json::to_string(&Price::new(15125, 3)).unwrap(), "15.125");
        let p: Price = serde_json::from_str("17.99").unwrap();
        assert_eq!(p, Price::cents(1799));
        let p: Price = serde_json::from_str("60").unwrap();
        assert_eq!(p, Price::cents(6000));
        let p: Price = serde_json::from_str("15.125").unwrap();
        assert_eq!(p, Price::new(15125, 3));
        let p: Price = serde_json::from_str("\"2.005\"").unwrap();
        assert_eq!(p, Price::new(2005, 3));
        assert!(serde_json::from_str::<Price>("\"lots\"").is_err());
    }
}
