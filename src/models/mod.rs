use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One classified ad for a W123/W124 as served by the listings API.
///
/// Every field is optional on the wire. Absent values are kept as `None`
/// and only replaced by placeholders at render time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Listing {
    pub model: Option<String>,
    #[serde(deserialize_with = "lenient_int")]
    pub year: Option<i64>,
    /// Kilometers
    #[serde(deserialize_with = "lenient_int")]
    pub mileage: Option<i64>,
    #[serde(deserialize_with = "lenient_int")]
    pub price: Option<i64>,
    pub currency: Option<String>,
    pub country: Option<String>,
    pub location: Option<String>,
    pub source: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub source_url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub date_added: Option<String>,
}

impl Listing {
    /// Title, description and model joined into the text the
    /// keyword heuristics scan.
    pub fn search_text(&self) -> String {
        [&self.title, &self.description, &self.model]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// `date_added` as a UTC instant, `None` when absent or unparseable
    pub fn added_at(&self) -> Option<DateTime<Utc>> {
        self.date_added.as_deref().and_then(parse_timestamp)
    }

    pub fn currency(&self) -> Currency {
        self.currency
            .as_deref()
            .map(Currency::from_code)
            .unwrap_or(Currency::Eur)
    }
}

/// Aggregate counters served by `/api/statistics`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Statistics {
    pub total_active: i64,
    pub by_country: BTreeMap<String, i64>,
    pub last_scrape: Option<String>,
}

impl Statistics {
    pub fn count_for(&self, country: &str) -> i64 {
        self.by_country.get(country).copied().unwrap_or(0)
    }
}

/// Price currency of a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Currency {
    Eur,
    Pln,
    Czk,
    Gbp,
    Chf,
    Other(String),
}

impl Currency {
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "EUR" | "" => Currency::Eur,
            "PLN" => Currency::Pln,
            "CZK" => Currency::Czk,
            "GBP" => Currency::Gbp,
            "CHF" => Currency::Chf,
            other => Currency::Other(other.to_string()),
        }
    }

    /// Prefix printed in front of a formatted amount
    pub fn prefix(&self) -> String {
        match self {
            Currency::Eur => "€".to_string(),
            Currency::Pln => "zł ".to_string(),
            Currency::Czk => "Kč ".to_string(),
            Currency::Gbp => "£".to_string(),
            Currency::Chf => "CHF ".to_string(),
            Currency::Other(code) => format!("{} ", code),
        }
    }
}

/// Parses the timestamps the backend emits: RFC 3339, or SQLite's
/// naive `YYYY-MM-DD HH:MM:SS[.fff]` which is UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Accepts integers, floats (the backend stores prices as REAL) and numeric
/// strings. Anything else becomes `None` instead of failing the whole payload.
fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.round() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|f| f.round() as i64)
            })
        }
        _ => None,
    }))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn listing_tolerates_missing_and_float_fields() {
        let listing: Listing = serde_json::from_value(json!({
            "model": "W123 300D",
            "price": 14990.0,
            "mileage": null,
            "year": "1984",
            "source_url": null,
            "is_active": 1
        }))
        .unwrap();

        assert_eq!(listing.price, Some(14990));
        assert_eq!(listing.mileage, None);
        assert_eq!(listing.year, Some(1984));
        assert_eq!(listing.country, None);
        assert_eq!(listing.currency(), Currency::Eur);
        assert_eq!(listing.source_url, "");
    }

    #[test]
    fn empty_object_is_a_valid_listing() {
        let listing: Listing = serde_json::from_value(json!({})).unwrap();
        assert_eq!(listing, Listing::default());
        assert_eq!(listing.search_text(), "");
    }

    #[test]
    fn search_text_joins_title_description_and_model() {
        let listing = Listing {
            title: Some("Mercedes 300TD".into()),
            model: Some("W123".into()),
            ..Default::default()
        };
        assert_eq!(listing.search_text(), "Mercedes 300TD W123");
    }

    #[test]
    fn statistics_count_defaults_to_zero() {
        let stats: Statistics = serde_json::from_value(json!({
            "total_active": 12,
            "by_country": {"NL": 4}
        }))
        .unwrap();
        assert_eq!(stats.count_for("NL"), 4);
        assert_eq!(stats.count_for("DE"), 0);
        assert!(stats.last_scrape.is_none());
    }

    #[test]
    fn parses_backend_timestamps() {
        let sqlite = parse_timestamp("2024-03-01 06:00:00").unwrap();
        let iso = parse_timestamp("2024-03-01T07:00:00+01:00").unwrap();
        let fractional = parse_timestamp("2024-03-01T06:00:00.250").unwrap();
        assert_eq!(sqlite, iso);
        assert_eq!(fractional.timestamp(), sqlite.timestamp());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn unknown_currency_keeps_its_code() {
        assert_eq!(Currency::from_code("sek").prefix(), "SEK ");
        assert_eq!(Currency::from_code("pln").prefix(), "zł ");
    }
}
