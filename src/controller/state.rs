use crate::pipeline::{Filter, SortColumn, SortOrder};

/// User-facing view state. Lives only as long as the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub filter: Filter,
    pub sort: Option<SortOrder>,
}

impl ViewState {
    /// Column header click
    pub fn click_column(&mut self, column: SortColumn) -> SortOrder {
        let order = SortOrder::after_click(self.sort, column);
        self.sort = Some(order);
        order
    }
}
