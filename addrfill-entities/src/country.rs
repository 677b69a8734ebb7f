use std::{fmt, str::FromStr};
use thiserror::Error;

/// Countries that can be entered in the address form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CountryCode {
    #[default]
    US,
    CA,
}

impl CountryCode {
    pub const ALL: [Self; 2] = [Self::US, Self::CA];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::US => "US",
            Self::CA => "CA",
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("Unsupported country code")]
pub struct CountryCodeParseError;

impl FromStr for CountryCode {
    type Err = CountryCodeParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &*s.trim().to_uppercase() {
            "US" => Ok(Self::US),
            "CA" => Ok(Self::CA),
            _ => Err(CountryCodeParseError),
        }
    }
}
