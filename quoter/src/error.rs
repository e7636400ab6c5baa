//! Error types for the quoter.

use std::path::PathBuf;

use boostbook::PricingError;

/// All errors that can occur while loading a profile or quoting.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read profile {path}: {source}")]
    ProfileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML profile: {0}")]
    ProfileToml(#[from] toml::de::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid pricing config: {}", .0.join("; "))]
    InvalidProfile(Vec<String>),

    /// The problems themselves were already shown in the report.
    #[error("pricing config rejected ({0} problem(s))")]
    ConfigRejected(usize),

    #[error("{0}")]
    Pricing(#[from] PricingError),
}

impl Error {
    /// Process exit status: 2 for bad input or config, 1 for I/O and parsing.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidProfile(_) | Error::ConfigRejected(_) | Error::Pricing(_) => 2,
            Error::ProfileRead { .. } | Error::ProfileToml(_) | Error::Json(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use boostbook::League;

    #[test]
    fn invalid_profile_lists_problems() {
        let err = Error::InvalidProfile(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "invalid pricing config: a; b");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn rejected_config_only_counts_problems() {
        let err = Error::ConfigRejected(17);
        assert_eq!(err.to_string(), "pricing config rejected (17 problem(s))");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn pricing_error_passes_message_through() {
        let err: Error = PricingError::MissingBasePrice(League::Gold).into();
        assert_eq!(err.to_string(), "missing base price for league Gold");
        assert_eq!(err.exit_code(), 2);
    }
}
