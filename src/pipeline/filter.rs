use crate::models::Listing;
use crate::pipeline::vocabulary::{AUTOMATIC, FIVE_SIX_CYLINDER, STATION_WAGON, TOW_BAR};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Model years accepted by the 5-6 cylinder filter
pub const FIVE_SIX_CYL_YEARS: RangeInclusive<i64> = 1985..=1987;

/// The active listing filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    /// ISO country code, upper case
    Country(String),
    /// Estate + automatic + tow bar
    Hot,
    /// 1985-1987 five or six cylinder diesels
    FiveSixCyl,
}

impl Filter {
    /// Whether the filter needs a full-text scan the backend cannot do
    pub fn scans_text(&self) -> bool {
        matches!(self, Filter::Hot | Filter::FiveSixCyl)
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        match self {
            Filter::All => true,
            Filter::Country(code) => listing.country.as_deref() == Some(code.as_str()),
            Filter::Hot => is_hot(listing),
            Filter::FiveSixCyl => is_five_six_cyl(listing),
        }
    }

    /// Matching listings in their original relative order
    pub fn apply(&self, listings: &[Listing]) -> Vec<Listing> {
        listings.iter().filter(|l| self.matches(l)).cloned().collect()
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("all"),
            Filter::Country(code) => f.write_str(code),
            Filter::Hot => f.write_str("hot"),
            Filter::FiveSixCyl => f.write_str("5-6cyl"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter '{0}', expected all, hot, 5-6cyl or a two-letter country code")]
pub struct UnknownFilter(pub String);

impl FromStr for Filter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "hot" => Ok(Filter::Hot),
            "5-6cyl" => Ok(Filter::FiveSixCyl),
            _ if s.len() == 2 && s.chars().all(|c| c.is_ascii_alphabetic()) => {
                Ok(Filter::Country(s.to_ascii_uppercase()))
            }
            _ => Err(UnknownFilter(s.to_string())),
        }
    }
}

/// All three cues must be present: estate body, automatic gearbox, tow bar.
pub fn is_hot(listing: &Listing) -> bool {
    let text = listing.search_text();
    STATION_WAGON.is_match(&text) && AUTOMATIC.is_match(&text) && TOW_BAR.is_match(&text)
}

/// A known year in 1985-1987 and five/six cylinder vocabulary.
/// Listings without a year never match.
pub fn is_five_six_cyl(listing: &Listing) -> bool {
    let Some(year) = listing.year else {
        return false;
    };
    FIVE_SIX_CYL_YEARS.contains(&year) && FIVE_SIX_CYLINDER.is_match(&listing.search_text())
}
