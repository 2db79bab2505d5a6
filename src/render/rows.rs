use crate::models::Listing;
use crate::pipeline::{classify, CarType};
use crate::render::format::{country_flag, format_number};
use chrono::Local;

pub const UNKNOWN: &str = "Unknown";
pub const NO_YEAR: &str = "-";
pub const ON_REQUEST: &str = "On request";
pub const LINK_LABEL: &str = "View →";

pub const EMPTY_TITLE: &str = "No listings found";
pub const EMPTY_DETAIL: &str =
    "There are currently no listings available for the selected filters.";
pub const ERROR_TITLE: &str = "Error";
pub const LOAD_ERROR_MESSAGE: &str = "Something went wrong while loading the listings.";

/// Years up to and including this one get the oldtimer badge
pub const OLDTIMER_MAX_YEAR: i64 = 1986;
pub const LOW_MILEAGE_BELOW: i64 = 100_000;
pub const HIGH_MILEAGE_ABOVE: i64 = 300_000;
pub const CHEAP_BELOW: i64 = 5_000;
pub const EXPENSIVE_ABOVE: i64 = 15_000;

/// Badge style of the model cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelBadge {
    /// Model text mentions W123
    W123,
    /// Everything else
    W124,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelCell {
    pub text: String,
    pub badge: ModelBadge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearCell {
    Oldtimer(i64),
    Plain(i64),
    Missing,
}

impl YearCell {
    pub fn text(&self) -> String {
        match self {
            YearCell::Oldtimer(y) | YearCell::Plain(y) => y.to_string(),
            YearCell::Missing => NO_YEAR.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MileageTone {
    Low,
    Neutral,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MileageCell {
    Known { text: String, tone: MileageTone },
    Unknown,
}

impl MileageCell {
    pub fn text(&self) -> &str {
        match self {
            MileageCell::Known { text, .. } => text,
            MileageCell::Unknown => UNKNOWN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceTone {
    Low,
    Moderate,
    Expensive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceCell {
    Known { text: String, tone: PriceTone },
    OnRequest,
}

impl PriceCell {
    pub fn text(&self) -> &str {
        match self {
            PriceCell::Known { text, .. } => text,
            PriceCell::OnRequest => ON_REQUEST,
        }
    }
}

/// Outbound link to the original ad. Always opens in a new context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCell {
    pub href: String,
    pub label: &'static str,
    pub new_context: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub model: ModelCell,
    pub car_type: CarType,
    pub year: YearCell,
    pub mileage: MileageCell,
    pub price: PriceCell,
    pub location: String,
    pub source: String,
    pub added: String,
    pub link: LinkCell,
}

/// What the listings table shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableView {
    Rows(Vec<DisplayRow>),
    /// Successful fetch, nothing matched
    Empty,
    /// Fetch failed; carries the user-facing message
    Error(String),
}

impl TableView {
    pub fn load_error() -> Self {
        TableView::Error(LOAD_ERROR_MESSAGE.to_string())
    }

    pub fn rows(&self) -> &[DisplayRow] {
        match self {
            TableView::Rows(rows) => rows,
            _ => &[],
        }
    }
}

/// Project listings to display rows; an empty slice gives `TableView::Empty`.
pub fn render(listings: &[Listing]) -> TableView {
    if listings.is_empty() {
        return TableView::Empty;
    }
    TableView::Rows(listings.iter().map(render_row).collect())
}

pub fn render_row(listing: &Listing) -> DisplayRow {
    DisplayRow {
        model: model_cell(listing),
        car_type: classify(listing),
        year: year_cell(listing.year),
        mileage: mileage_cell(listing.mileage),
        price: price_cell(listing),
        location: location_text(listing),
        source: non_empty(&listing.source).unwrap_or(UNKNOWN).to_string(),
        added: added_text(listing),
        link: LinkCell {
            href: listing.source_url.clone(),
            label: LINK_LABEL,
            new_context: true,
        },
    }
}

fn model_cell(listing: &Listing) -> ModelCell {
    let model = non_empty(&listing.model);
    let badge = if model.is_some_and(|m| m.contains("W123")) {
        ModelBadge::W123
    } else {
        ModelBadge::W124
    };
    ModelCell {
        text: model.unwrap_or(UNKNOWN).to_string(),
        badge,
    }
}

// A zero year, mileage or price is a scraper artifact and shows as missing.
fn year_cell(year: Option<i64>) -> YearCell {
    match year.filter(|y| *y != 0) {
        Some(y) if y <= OLDTIMER_MAX_YEAR => YearCell::Oldtimer(y),
        Some(y) => YearCell::Plain(y),
        None => YearCell::Missing,
    }
}

fn mileage_cell(mileage: Option<i64>) -> MileageCell {
    let Some(km) = mileage.filter(|m| *m != 0) else {
        return MileageCell::Unknown;
    };
    let tone = if km < LOW_MILEAGE_BELOW {
        MileageTone::Low
    } else if km > HIGH_MILEAGE_ABOVE {
        MileageTone::High
    } else {
        MileageTone::Neutral
    };
    MileageCell::Known {
        text: format!("{} km", format_number(Some(km))),
        tone,
    }
}

fn price_cell(listing: &Listing) -> PriceCell {
    let Some(price) = listing.price.filter(|p| *p != 0) else {
        return PriceCell::OnRequest;
    };
    let tone = if price < CHEAP_BELOW {
        PriceTone::Low
    } else if price > EXPENSIVE_ABOVE {
        PriceTone::Expensive
    } else {
        PriceTone::Moderate
    };
    PriceCell::Known {
        text: format!("{}{}", listing.currency().prefix(), format_number(Some(price))),
        tone,
    }
}

fn location_text(listing: &Listing) -> String {
    let place = non_empty(&listing.location)
        .or_else(|| non_empty(&listing.country))
        .unwrap_or(UNKNOWN);
    match listing.country.as_deref().and_then(country_flag) {
        Some(flag) => format!("{} {}", flag, place),
        None => place.to_string(),
    }
}

fn added_text(listing: &Listing) -> String {
    match listing.added_at() {
        Some(t) => t.with_timezone(&Local).format("%d-%m-%Y %H:%M").to_string(),
        None => UNKNOWN.to_string(),
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
