//! Terminal painter. Thin side-effecting adapter over `Screen`.

use crate::pipeline::{Filter, SortColumn, SortDirection, SortOrder};
use crate::render::rows::{
    DisplayRow, LinkCell, MileageCell, MileageTone, ModelBadge, PriceCell, PriceTone, TableView,
    YearCell, EMPTY_DETAIL, EMPTY_TITLE, ERROR_TITLE,
};
use crate::render::screen::Screen;
use owo_colors::OwoColorize;
use std::io::{self, IsTerminal, Write};

const FILTER_BAR: [&str; 11] = [
    "all", "NL", "DE", "BE", "FR", "PL", "CZ", "AT", "ES", "hot", "5-6cyl",
];

const COLUMNS: [(Option<SortColumn>, &str, usize); 9] = [
    (Some(SortColumn::Model), "Model", 18),
    (Some(SortColumn::Type), "Type", 8),
    (Some(SortColumn::Year), "Year", 6),
    (Some(SortColumn::Mileage), "Mileage", 12),
    (Some(SortColumn::Price), "Price", 11),
    (Some(SortColumn::Location), "Location", 20),
    (Some(SortColumn::Source), "Source", 14),
    (Some(SortColumn::DateAdded), "Added", 16),
    (None, "Link", 0),
];

pub fn paint<W: Write>(out: &mut W, screen: &Screen) -> io::Result<()> {
    writeln!(out, "{}", screen.date_line.bold())?;
    paint_stats(out, screen)?;
    paint_filter_bar(out, &screen.filter)?;
    writeln!(out)?;
    writeln!(out, "{}", screen.title.bold().underline())?;
    if screen.loading {
        writeln!(out, "{}", "Loading…".dimmed())?;
    }
    paint_header(out, screen.sort)?;

    match &screen.table {
        TableView::Rows(rows) => {
            for row in rows {
                paint_row(out, row)?;
            }
        }
        TableView::Empty => {
            writeln!(out, "  {}", EMPTY_TITLE.bold())?;
            writeln!(out, "  {}", EMPTY_DETAIL)?;
        }
        TableView::Error(message) => {
            writeln!(out, "  {}", ERROR_TITLE.red().bold())?;
            writeln!(out, "  {}", message.red())?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", format!("Updated {}", screen.footer).dimmed())?;
    writeln!(
        out,
        "{}",
        "Commands: all | <country> | hot | 5-6cyl | sort <column> | refresh | quit".dimmed()
    )?;
    out.flush()
}

/// Paint to stdout, clearing the previous frame on a terminal
pub fn paint_stdout(screen: &Screen) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    if stdout.is_terminal() {
        write!(lock, "\x1b[2J\x1b[H")?;
    }
    paint(&mut lock, screen)
}

fn paint_stats<W: Write>(out: &mut W, screen: &Screen) -> io::Result<()> {
    let stats = &screen.stats;
    let last = stats.last_update.as_deref().unwrap_or("-");
    writeln!(
        out,
        "Total {}   NL {}   DE {}   Last update {}",
        stats.total.bold(),
        stats.nl.bold(),
        stats.de.bold(),
        last
    )
}

fn paint_filter_bar<W: Write>(out: &mut W, active: &Filter) -> io::Result<()> {
    let active = active.to_string();
    let items: Vec<String> = FILTER_BAR
        .iter()
        .map(|name| {
            if *name == active {
                format!("[{}]", name).reversed().to_string()
            } else {
                format!(" {} ", name)
            }
        })
        .collect();
    writeln!(out, "{}", items.join(" "))
}

fn paint_header<W: Write>(out: &mut W, sort: Option<SortOrder>) -> io::Result<()> {
    let mut line = String::new();
    for (column, label, width) in COLUMNS.iter() {
        let marker = match (column, sort) {
            (Some(c), Some(order)) if *c == order.column => match order.direction {
                SortDirection::Asc => " ▲",
                SortDirection::Desc => " ▼",
            },
            _ => "",
        };
        line.push_str(&format!("{:<width$} ", format!("{}{}", label, marker), width = *width));
    }
    writeln!(out, "{}", line.trim_end().bold())
}

fn paint_row<W: Write>(out: &mut W, row: &DisplayRow) -> io::Result<()> {
    let model = format!("{:<18}", row.model.text);
    let model = match row.model.badge {
        ModelBadge::W123 => model.blue().to_string(),
        ModelBadge::W124 => model.green().to_string(),
    };

    let year = format!("{:<6}", row.year.text());
    let year = match row.year {
        YearCell::Oldtimer(_) => year.yellow().to_string(),
        _ => year,
    };

    let mileage = format!("{:<12}", row.mileage.text());
    let mileage = match &row.mileage {
        MileageCell::Known { tone: MileageTone::Low, .. } => mileage.green().to_string(),
        MileageCell::Known { tone: MileageTone::High, .. } => mileage.red().to_string(),
        _ => mileage,
    };

    let price = format!("{:<11}", row.price.text());
    let price = match &row.price {
        PriceCell::Known { tone: PriceTone::Low, .. } => price.green().to_string(),
        PriceCell::Known { tone: PriceTone::Moderate, .. } => price.yellow().to_string(),
        PriceCell::Known { tone: PriceTone::Expensive, .. } => price.red().to_string(),
        PriceCell::OnRequest => price.dimmed().to_string(),
    };

    writeln!(
        out,
        "{} {:<8} {} {} {} {:<20} {:<14} {:<16} {} {}",
        model,
        row.car_type.label(),
        year,
        mileage,
        price,
        row.location,
        row.source,
        row.added,
        link_label(&row.link),
        row.link.href.underline()
    )
}

/// Outbound links become OSC 8 hyperlinks, which terminals hand to the
/// browser instead of following in place.
fn link_label(link: &LinkCell) -> String {
    if link.new_context {
        format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", link.href, link.label)
    } else {
        link.label.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Listing;
    use crate::render::render;
    use chrono::{Local, TimeZone};

    fn screen(table: TableView) -> Screen {
        let now = Local.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();
        let mut screen = Screen::at(now, &Filter::Hot, Some(SortOrder::DEFAULT));
        screen.table = table;
        screen
    }

    fn painted(screen: &Screen) -> String {
        let mut out = Vec::new();
        paint(&mut out, screen).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_and_error_paint_differently() {
        let empty = painted(&screen(TableView::Empty));
        let failed = painted(&screen(TableView::load_error()));
        assert!(empty.contains(EMPTY_TITLE));
        assert!(!empty.contains(ERROR_TITLE));
        assert!(failed.contains("Something went wrong"));
        assert!(!failed.contains(EMPTY_TITLE));
    }

    #[test]
    fn rows_show_placeholders_and_link() {
        let listing = Listing {
            source_url: "https://example.org/ad/7".into(),
            ..Default::default()
        };
        let out = painted(&screen(render(&[listing])));
        assert!(out.contains("On request"));
        assert!(out.contains("https://example.org/ad/7"));
        assert!(out.contains("Added ▼"));
    }

    #[test]
    fn outbound_link_is_a_terminal_hyperlink() {
        let mut link = LinkCell {
            href: "https://example.org/ad/7".into(),
            label: "View →",
            new_context: true,
        };
        assert_eq!(
            link_label(&link),
            "\x1b]8;;https://example.org/ad/7\x1b\\View →\x1b]8;;\x1b\\"
        );

        link.new_context = false;
        assert_eq!(link_label(&link), "View →");

        let listing = Listing {
            source_url: "https://example.org/ad/7".into(),
            ..Default::default()
        };
        let out = painted(&screen(render(&[listing])));
        assert!(out.contains("\x1b]8;;https://example.org/ad/7\x1b\\"));
    }
}
