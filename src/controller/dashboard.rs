use crate::api::{ListingApi, ListingQuery};
use crate::config::DashboardConfig;
use crate::controller::state::ViewState;
use crate::error::FetchResult;
use crate::models::{Listing, Statistics};
use crate::pipeline::{sort_listings, Filter, SortColumn, SortOrder};
use crate::render::{render, render_stats, Screen, TableView};
use chrono::{DateTime, Local};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// A listings request tagged with the epoch it was issued in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub epoch: u64,
    pub query: ListingQuery,
}

/// Last listings response that was accepted, with the filter it was fetched for.
/// The held set is always narrowed by that filter, never by a newer selection
/// whose fetch is still in flight.
#[derive(Debug, Clone)]
enum Held {
    Nothing,
    Listings { filter: Filter, listings: Vec<Listing> },
    Failed,
}

/// Owns the view state and the current full result set.
///
/// Network calls happen outside; the dashboard only hands out tickets and
/// accepts results, dropping any whose epoch is no longer current.
pub struct Dashboard {
    api: Arc<dyn ListingApi>,
    config: DashboardConfig,
    state: ViewState,
    held: Held,
    statistics: Option<Statistics>,
    epoch: u64,
    loading: bool,
    default_sort_pending: bool,
}

impl Dashboard {
    pub fn new(api: Arc<dyn ListingApi>, config: DashboardConfig) -> Self {
        Self {
            api,
            config,
            state: ViewState::default(),
            held: Held::Nothing,
            statistics: None,
            epoch: 0,
            loading: false,
            default_sort_pending: true,
        }
    }

    pub fn api(&self) -> Arc<dyn ListingApi> {
        Arc::clone(&self.api)
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Request that serves `filter`. Compound filters scan a larger fixed-size
    /// fetch because their keywords cannot be expressed as a query parameter.
    pub fn query_for(&self, filter: &Filter) -> ListingQuery {
        match filter {
            Filter::All => ListingQuery::Top { limit: None },
            Filter::Country(code) => ListingQuery::Country {
                code: code.clone(),
                limit: self.config.country_limit,
            },
            Filter::Hot | Filter::FiveSixCyl => ListingQuery::Top {
                limit: Some(self.config.scan_limit),
            },
        }
    }

    /// Switch to `filter` and issue a fresh fetch for it
    pub fn select_filter(&mut self, filter: Filter) -> FetchTicket {
        info!("Filter set to {}", filter);
        self.state.filter = filter;
        self.reload()
    }

    /// Fresh fetch for the active filter
    pub fn reload(&mut self) -> FetchTicket {
        self.epoch += 1;
        self.loading = true;
        FetchTicket {
            epoch: self.epoch,
            query: self.query_for(&self.state.filter),
        }
    }

    /// Accept a listings response. Returns false when the response was stale.
    pub fn finish_fetch(&mut self, epoch: u64, result: FetchResult<Vec<Listing>>) -> bool {
        if epoch != self.epoch {
            debug!("Discarding stale listings response (epoch {} < {})", epoch, self.epoch);
            return false;
        }
        self.loading = false;

        match result {
            Ok(listings) => {
                info!("Loaded {} listings for {}", listings.len(), self.state.filter);
                self.held = Held::Listings {
                    filter: self.state.filter.clone(),
                    listings,
                };
                self.apply_default_sort();
            }
            Err(e) => {
                error!("Error loading listings from {}: {}", e.endpoint(), e);
                self.held = Held::Failed;
            }
        }
        true
    }

    pub fn finish_statistics(&mut self, result: FetchResult<Statistics>) {
        match result {
            Ok(stats) => {
                debug!("Statistics: {} active listings", stats.total_active);
                self.statistics = Some(stats);
            }
            Err(e) => warn!("Error loading statistics from {}: {}", e.endpoint(), e),
        }
    }

    /// Newest-first ordering, set once after the first successful load
    /// unless the user already picked a column.
    fn apply_default_sort(&mut self) {
        if !self.default_sort_pending {
            return;
        }
        self.default_sort_pending = false;
        if self.state.sort.is_none() {
            self.state.sort = Some(SortOrder::DEFAULT);
        }
    }

    /// Column header click. Re-sorts the held set; never fetches.
    pub fn click_column(&mut self, column: SortColumn) -> SortOrder {
        let order = self.state.click_column(column);
        debug!("Sorting by {} {:?}", order.column, order.direction);
        order
    }

    /// Listings currently visible: the held set narrowed by the filter it was
    /// fetched for, then sorted
    pub fn visible(&self) -> Option<Vec<Listing>> {
        let Held::Listings { filter, listings } = &self.held else {
            return None;
        };
        let filtered = filter.apply(listings);
        Some(match self.state.sort {
            Some(order) => sort_listings(&filtered, order),
            None => filtered,
        })
    }

    pub fn table(&self) -> TableView {
        match &self.held {
            Held::Failed => TableView::load_error(),
            Held::Nothing => TableView::Empty,
            Held::Listings { .. } => render(&self.visible().unwrap_or_default()),
        }
    }

    pub fn screen(&self, now: DateTime<Local>) -> Screen {
        let mut screen = Screen::at(now, &self.state.filter, self.state.sort);
        screen.loading = self.loading;
        screen.stats = self.statistics.as_ref().map(render_stats).unwrap_or_default();
        screen.table = self.table();
        screen
    }

    /// Fetch the active filter and wait for it
    pub async fn load(&mut self) -> bool {
        let ticket = self.reload();
        let result = self.api.listings(&ticket.query).await;
        self.finish_fetch(ticket.epoch, result)
    }

    pub async fn load_statistics(&mut self) {
        let result = self.api.statistics().await;
        self.finish_statistics(result);
    }

    /// Startup without a runtime loop: statistics and the "all" listings,
    /// fetched together and awaited
    pub async fn start(&mut self) {
        let ticket = self.select_filter(Filter::All);
        let api = self.api();
        let (stats, listings) = tokio::join!(api.statistics(), api.listings(&ticket.query));
        self.finish_statistics(stats);
        self.finish_fetch(ticket.epoch, listings);
    }
}
