use crate::models::Listing;
use crate::pipeline::vocabulary::{CABRIO, COUPE, SEDAN, STATION_WAGON};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Body style derived from the ad text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarType {
    Station,
    Cabrio,
    Coupe,
    Sedan,
}

impl CarType {
    pub fn label(&self) -> &'static str {
        match self {
            CarType::Station => "Station",
            CarType::Cabrio => "Cabrio",
            CarType::Coupe => "Coupé",
            CarType::Sedan => "Sedan",
        }
    }
}

impl fmt::Display for CarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered tag table, first match wins. Estate cues come first because
/// chassis and displacement codes (S124, 300TD) would otherwise be read
/// as plain model numbers of a sedan.
static RULES: LazyLock<[(CarType, &'static Regex); 4]> = LazyLock::new(|| {
    [
        (CarType::Station, &*STATION_WAGON),
        (CarType::Cabrio, &*CABRIO),
        (CarType::Coupe, &*COUPE),
        (CarType::Sedan, &*SEDAN),
    ]
});

/// Classify free text. Text without any body-style cue is a sedan.
pub fn classify_text(text: &str) -> CarType {
    RULES
        .iter()
        .find(|(_, pattern)| pattern.is_match(text))
        .map(|(tag, _)| *tag)
        .unwrap_or(CarType::Sedan)
}

pub fn classify(listing: &Listing) -> CarType {
    classify_text(&listing.search_text())
}
