use crate::models::Listing;
use crate::pipeline::classify::classify;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Stand-in for a missing mileage or price so unknowns sort last ascending
pub const MISSING_AMOUNT: i64 = 999_999_999;

/// Sortable table columns. The link column is not sortable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Model,
    Type,
    Year,
    Mileage,
    Price,
    Location,
    Source,
    DateAdded,
}

impl SortColumn {
    pub const ALL: [SortColumn; 8] = [
        SortColumn::Model,
        SortColumn::Type,
        SortColumn::Year,
        SortColumn::Mileage,
        SortColumn::Price,
        SortColumn::Location,
        SortColumn::Source,
        SortColumn::DateAdded,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SortColumn::Model => "model",
            SortColumn::Type => "type",
            SortColumn::Year => "year",
            SortColumn::Mileage => "mileage",
            SortColumn::Price => "price",
            SortColumn::Location => "location",
            SortColumn::Source => "source",
            SortColumn::DateAdded => "date_added",
        }
    }

    fn key(&self, listing: &Listing) -> SortKey {
        fn text(value: &Option<String>) -> SortKey {
            SortKey::Text(value.as_deref().unwrap_or("").to_lowercase())
        }

        match self {
            SortColumn::Model => text(&listing.model),
            SortColumn::Type => SortKey::Text(classify(listing).label().to_lowercase()),
            SortColumn::Location => text(&listing.location),
            SortColumn::Source => text(&listing.source),
            SortColumn::Year => SortKey::Number(listing.year.unwrap_or(0)),
            SortColumn::Mileage => SortKey::Number(listing.mileage.unwrap_or(MISSING_AMOUNT)),
            SortColumn::Price => SortKey::Number(listing.price.unwrap_or(MISSING_AMOUNT)),
            SortColumn::DateAdded => {
                SortKey::Number(listing.added_at().map(|t| t.timestamp_millis()).unwrap_or(0))
            }
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a sortable column")]
pub struct UnknownColumn(pub String);

impl FromStr for SortColumn {
    type Err = UnknownColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        let wanted = match wanted.as_str() {
            "date" | "added" => "date_added",
            "km" => "mileage",
            other => other,
        };
        SortColumn::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| UnknownColumn(s.trim().to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Active column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortOrder {
    /// Newest listings first, applied after the first load
    pub const DEFAULT: SortOrder = SortOrder {
        column: SortColumn::DateAdded,
        direction: SortDirection::Desc,
    };

    /// Order after a click on `column`: the same column flips direction,
    /// any other column starts ascending.
    pub fn after_click(current: Option<SortOrder>, column: SortColumn) -> SortOrder {
        match current {
            Some(order) if order.column == column => SortOrder {
                column,
                direction: order.direction.flipped(),
            },
            _ => SortOrder {
                column,
                direction: SortDirection::Asc,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Text(String),
    Number(i64),
}

/// Listings ordered by `column`. Relative order of equal keys is unspecified.
pub fn sort_by_column(
    listings: &[Listing],
    column: SortColumn,
    direction: SortDirection,
) -> Vec<Listing> {
    let mut keyed: Vec<(SortKey, &Listing)> =
        listings.iter().map(|l| (column.key(l), l)).collect();

    keyed.sort_by(|(a, _), (b, _)| {
        let ord: Ordering = a.cmp(b);
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });

    keyed.into_iter().map(|(_, l)| l.clone()).collect()
}

pub fn sort_listings(listings: &[Listing], order: SortOrder) -> Vec<Listing> {
    sort_by_column(listings, order.column, order.direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(price: Option<i64>) -> Listing {
        Listing {
            price,
            ..Default::default()
        }
    }

    fn prices(listings: &[Listing]) -> Vec<Option<i64>> {
        listings.iter().map(|l| l.price).collect()
    }

    #[test]
    fn missing_price_sorts_last_ascending() {
        let listings = vec![priced(Some(5000)), priced(None), priced(Some(20000))];
        let asc = sort_by_column(&listings, SortColumn::Price, SortDirection::Asc);
        assert_eq!(prices(&asc), vec![Some(5000), Some(20000), None]);

        let desc = sort_by_column(&listings, SortColumn::Price, SortDirection::Desc);
        assert_eq!(prices(&desc), vec![None, Some(20000), Some(5000)]);
    }

    #[test]
    fn second_click_reverses_order() {
        let listings = vec![
            priced(Some(7000)),
            priced(Some(3000)),
            priced(None),
            priced(Some(9000)),
        ];

        let first = SortOrder::after_click(None, SortColumn::Price);
        assert_eq!(first.direction, SortDirection::Asc);
        let second = SortOrder::after_click(Some(first), SortColumn::Price);
        assert_eq!(second.direction, SortDirection::Desc);

        let mut once = sort_listings(&listings, first);
        let twice = sort_listings(&listings, second);
        once.reverse();
        assert_eq!(once, twice);
    }

    #[test]
    fn other_column_resets_to_ascending() {
        let current = Some(SortOrder {
            column: SortColumn::Price,
            direction: SortDirection::Desc,
        });
        let next = SortOrder::after_click(current, SortColumn::Year);
        assert_eq!(next.column, SortColumn::Year);
        assert_eq!(next.direction, SortDirection::Asc);
    }

    #[test]
    fn text_columns_ignore_case_and_treat_missing_as_empty() {
        let listings: Vec<Listing> = [Some("zwolle"), None, Some("Amsterdam"), Some("berlin")]
            .into_iter()
            .map(|loc| Listing {
                location: loc.map(str::to_string),
                ..Default::default()
            })
            .collect();
        let sorted = sort_by_column(&listings, SortColumn::Location, SortDirection::Asc);
        let locations: Vec<_> = sorted.iter().map(|l| l.location.as_deref()).collect();
        assert_eq!(locations, vec![None, Some("Amsterdam"), Some("berlin"), Some("zwolle")]);
    }

    #[test]
    fn missing_year_sorts_first_ascending() {
        let listings: Vec<Listing> = [Some(1984), None, Some(1979)]
            .into_iter()
            .map(|year| Listing {
                year,
                ..Default::default()
            })
            .collect();
        let sorted = sort_by_column(&listings, SortColumn::Year, SortDirection::Asc);
        let years: Vec<_> = sorted.iter().map(|l| l.year).collect();
        assert_eq!(years, vec![None, Some(1979), Some(1984)]);
    }

    #[test]
    fn date_added_compares_instants() {
        let listings: Vec<Listing> = [
            Some("2024-03-01 06:00:00"),
            None,
            Some("2024-03-02T00:00:00Z"),
            Some("2024-02-28 23:59:59"),
        ]
        .into_iter()
        .map(|d| Listing {
            date_added: d.map(str::to_string),
            ..Default::default()
        })
        .collect();

        let newest_first = sort_listings(&listings, SortOrder::DEFAULT);
        let dates: Vec<_> = newest_first.iter().map(|l| l.date_added.as_deref()).collect();
        assert_eq!(
            dates,
            vec![
                Some("2024-03-02T00:00:00Z"),
                Some("2024-03-01 06:00:00"),
                Some("2024-02-28 23:59:59"),
                None
            ]
        );
    }

    #[test]
    fn type_column_uses_classifier() {
        let listings: Vec<Listing> = ["W124 sedan", "300TD", "230CE coupe"]
            .into_iter()
            .map(|t| Listing {
                title: Some(t.to_string()),
                ..Default::default()
            })
            .collect();
        let sorted = sort_by_column(&listings, SortColumn::Type, SortDirection::Asc);
        let titles: Vec<_> = sorted.iter().map(|l| l.title.as_deref().unwrap_or("")).collect();
        assert_eq!(titles, vec!["230CE coupe", "W124 sedan", "300TD"]);
    }

    #[test]
    fn parses_column_names() {
        assert_eq!("price".parse::<SortColumn>(), Ok(SortColumn::Price));
        assert_eq!("date-added".parse::<SortColumn>(), Ok(SortColumn::DateAdded));
        assert_eq!("Date".parse::<SortColumn>(), Ok(SortColumn::DateAdded));
        assert!("link".parse::<SortColumn>().is_err());
    }
}
