//! Pure projection of listings into display rows, plus the terminal painter.

pub mod format;
pub mod paint;
pub mod rows;
pub mod screen;

pub use format::format_number;
pub use rows::{render, DisplayRow, TableView};
pub use screen::{render_stats, section_title, Screen, StatsView};
