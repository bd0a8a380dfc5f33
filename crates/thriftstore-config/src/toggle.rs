//! Interpretation of the boolean sent to the flag toggle endpoints
//! (advertise, report, seller verification).
//!
//! Deployed clients send the flag value they currently *display* and expect
//! the server to store its negation. Newer clients may prefer to send the
//! value they want stored. Both readings are supported; `legacy` is the
//! default so existing clients keep working.

use std::env;
use std::str::FromStr;

use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToggleSemantics {
    /// Persist the negation of the client-supplied value.
    #[default]
    Legacy,
    /// Persist the client-supplied value as sent.
    Explicit,
}

impl ToggleSemantics {
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var("TOGGLE_SEMANTICS") {
            Ok(raw) => raw.parse(),
            Err(_) => Ok(Self::default()),
        }
    }

    /// The value to persist for a client-supplied flag.
    pub fn resolve(self, requested: bool) -> bool {
        match self {
            Self::Legacy => !requested,
            Self::Explicit => requested,
        }
    }
}

impl FromStr for ToggleSemantics {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" | "negate" => Ok(Self::Legacy),
            "explicit" => Ok(Self::Explicit),
            _ => Err(ConfigError::Invalid {
                name: "TOGGLE_SEMANTICS",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_negates() {
        assert!(!ToggleSemantics::Legacy.resolve(true));
        assert!(ToggleSemantics::Legacy.resolve(false));
    }

    #[test]
    fn test_explicit_passes_through() {
        assert!(ToggleSemantics::Explicit.resolve(true));
        assert!(!ToggleSemantics::Explicit.resolve(false));
    }

    #[test]
    fn test_default_is_legacy() {
        assert_eq!(ToggleSemantics::default(), ToggleSemantics::Legacy);
    }

    #[test]
    fn test_parse() {
        assert_eq!("explicit".parse::<ToggleSemantics>().unwrap(), ToggleSemantics::Explicit);
        assert_eq!(" LEGACY ".parse::<ToggleSemantics>().unwrap(), ToggleSemantics::Legacy);
        assert!("sometimes".parse::<ToggleSemantics>().is_err());
    }
}
