// Allow our dollar.cents digit grouping convention (e.g., 100_00 = $100.00)
#![allow(clippy::inconsistent_digit_grouping)]

//! boostbook-quoter: command-line quoting for booster price tables.
//!
//! Loads a booster profile (bulk price table, individually quoted steps and
//! duo discount) from TOML or JSON, validates it, and prices boosts with
//! the boostbook engine.

pub mod error;
pub mod profile;
pub mod quote;
