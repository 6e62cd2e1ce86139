use crate::constants::{BANKING_WEIGHTS, REAL_ESTATE_WEIGHTS, SECURITIES_WEIGHTS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sector basket tracked by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sector {
    /// Banking Sector Indicator (BSI)
    Banking,
    /// Securities Sector Indicator (SSI)
    Securities,
    /// Real Estate Sector Indicator (RSI)
    RealEstate,
}

impl Sector {
    /// All sectors in reporting order
    pub const ALL: [Sector; 3] = [Sector::Banking, Sector::Securities, Sector::RealEstate];

    /// Fixed market-cap weights for this sector's basket
    pub fn weights(&self) -> &'static [(&'static str, f64)] {
        match self {
            Sector::Banking => BANKING_WEIGHTS,
            Sector::Securities => SECURITIES_WEIGHTS,
            Sector::RealEstate => REAL_ESTATE_WEIGHTS,
        }
    }

    /// Short indicator name
    pub fn indicator_name(&self) -> &'static str {
        match self {
            Sector::Banking => "BSI",
            Sector::Securities => "SSI",
            Sector::RealEstate => "RSI",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Sector::Banking => "Banking",
            Sector::Securities => "Securities",
            Sector::RealEstate => "Real Estate",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_screaming_snake_case() {
        assert_eq!(serde_json::to_string(&Sector::RealEstate).unwrap(), "\"REAL_ESTATE\"");
    }

    #[test]
    fn test_names() {
        assert_eq!(Sector::RealEstate.indicator_name(), "RSI");
        assert_eq!(Sector::RealEstate.to_string(), "Real Estate");
    }
}
