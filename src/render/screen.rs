use crate::models::Statistics;
use crate::pipeline::{Filter, SortOrder};
use crate::render::format::{country_flag, country_name, full_timestamp, local_clock, long_date};
use crate::render::rows::TableView;
use chrono::{DateTime, Local};

pub const BASE_TITLE: &str = "Mercedes W123/W124 Diesel";

/// Counters shown above the table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsView {
    pub total: i64,
    pub nl: i64,
    pub de: i64,
    /// Local "HH:MM" of the last scrape
    pub last_update: Option<String>,
}

pub fn render_stats(stats: &Statistics) -> StatsView {
    StatsView {
        total: stats.total_active,
        nl: stats.count_for("NL"),
        de: stats.count_for("DE"),
        last_update: stats.last_scrape.as_deref().and_then(local_clock),
    }
}

pub fn section_title(filter: &Filter) -> String {
    match filter {
        Filter::All => format!("{} (All countries)", BASE_TITLE),
        Filter::Hot => format!("{} (Hot picks: estate, automatic, tow bar)", BASE_TITLE),
        Filter::FiveSixCyl => format!("{} (5-6 cylinder, 1985-1987)", BASE_TITLE),
        Filter::Country(code) => {
            let flag = country_flag(code).map(|f| format!("{} ", f)).unwrap_or_default();
            match country_name(code) {
                Some(name) => format!("{}{} ({})", flag, BASE_TITLE, name),
                None => format!("{}{}", flag, BASE_TITLE),
            }
        }
    }
}

/// Everything one repaint needs
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub date_line: String,
    pub footer: String,
    pub title: String,
    pub filter: Filter,
    pub sort: Option<SortOrder>,
    pub loading: bool,
    pub stats: StatsView,
    pub table: TableView,
}

impl Screen {
    pub fn at(now: DateTime<Local>, filter: &Filter, sort: Option<SortOrder>) -> Self {
        Self {
            date_line: long_date(&now),
            footer: full_timestamp(&now),
            title: section_title(filter),
            filter: filter.clone(),
            sort,
            loading: false,
            stats: StatsView::default(),
            table: TableView::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn titles_per_filter() {
        assert_eq!(section_title(&Filter::All), "Mercedes W123/W124 Diesel (All countries)");
        assert_eq!(
            section_title(&Filter::Country("DE".into())),
            "🇩🇪 Mercedes W123/W124 Diesel (Germany)"
        );
        assert_eq!(section_title(&Filter::Country("SE".into())), "Mercedes W123/W124 Diesel");
        assert!(section_title(&Filter::FiveSixCyl).contains("5-6 cylinder"));
    }

    #[test]
    fn stats_default_missing_countries_to_zero() {
        let stats = Statistics {
            total_active: 42,
            by_country: BTreeMap::from([("NL".to_string(), 30)]),
            last_scrape: None,
        };
        let view = render_stats(&stats);
        assert_eq!(view.total, 42);
        assert_eq!(view.nl, 30);
        assert_eq!(view.de, 0);
        assert_eq!(view.last_update, None);
    }
}
