use crate::controller::command::Command;
use crate::controller::dashboard::{Dashboard, FetchTicket};
use crate::error::FetchResult;
use crate::models::{Listing, Statistics};
use crate::pipeline::Filter;
use crate::render::Screen;
use anyhow::Result;
use chrono::Local;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::time::{interval_at, Instant};
use tracing::{debug, info, warn};

/// A fetch that finished in the background
enum Completion {
    Listings {
        epoch: u64,
        result: FetchResult<Vec<Listing>>,
    },
    Statistics(FetchResult<Statistics>),
}

/// Drive the dashboard: commands from `input`, background fetch results and
/// the periodic refresh. Every state change ends in a call to `paint`.
///
/// The startup fetches go through the same completion channel as every later
/// one, so the first frame is painted in the loading state and input is read
/// while they are in flight.
///
/// Returns on `quit` or Ctrl-C. A closed input keeps the periodic refresh running.
pub async fn run<R, P>(mut dashboard: Dashboard, input: R, mut paint: P) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    P: FnMut(&Screen),
{
    let (tx, mut rx) = mpsc::unbounded_channel::<Completion>();

    spawn_statistics(&dashboard, &tx);
    let ticket = dashboard.select_filter(Filter::All);
    spawn_listings(&dashboard, ticket, &tx);
    paint(&dashboard.screen(Local::now()));

    let period = dashboard.config().refresh_interval;
    let mut ticker = interval_at(Instant::now() + period, period);
    let mut lines = input.lines();
    let mut input_open = true;

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            line = lines.next_line(), if input_open => match line {
                Ok(Some(line)) if line.trim().is_empty() => {}
                Ok(Some(line)) => match line.parse::<Command>() {
                    Ok(Command::Quit) => break,
                    Ok(command) => {
                        handle(&mut dashboard, command, &tx);
                        paint(&dashboard.screen(Local::now()));
                    }
                    Err(e) => warn!("Ignoring '{}': {}", line.trim(), e),
                },
                Ok(None) => {
                    debug!("Input closed, continuing with periodic refresh only");
                    input_open = false;
                }
                Err(e) => {
                    warn!("Failed to read input: {}", e);
                    input_open = false;
                }
            },
            Some(done) = rx.recv() => {
                match done {
                    Completion::Listings { epoch, result } => {
                        if !dashboard.finish_fetch(epoch, result) {
                            continue;
                        }
                    }
                    Completion::Statistics(result) => dashboard.finish_statistics(result),
                }
                paint(&dashboard.screen(Local::now()));
            }
            _ = ticker.tick() => {
                info!("Periodic refresh");
                handle(&mut dashboard, Command::Refresh, &tx);
            }
            _ = &mut shutdown => {
                info!("Interrupted");
                break;
            }
        }
    }

    info!("Dashboard stopped");
    Ok(())
}

fn handle(dashboard: &mut Dashboard, command: Command, tx: &UnboundedSender<Completion>) {
    match command {
        Command::Select(filter) => {
            let ticket = dashboard.select_filter(filter);
            spawn_listings(dashboard, ticket, tx);
        }
        Command::Sort(column) => {
            dashboard.click_column(column);
        }
        Command::Refresh => {
            spawn_statistics(dashboard, tx);
            let ticket = dashboard.reload();
            spawn_listings(dashboard, ticket, tx);
        }
        Command::Quit => {}
    }
}

fn spawn_listings(dashboard: &Dashboard, ticket: FetchTicket, tx: &UnboundedSender<Completion>) {
    let api = dashboard.api();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = api.listings(&ticket.query).await;
        let _ = tx.send(Completion::Listings {
            epoch: ticket.epoch,
            result,
        });
    });
}

fn spawn_statistics(dashboard: &Dashboard, tx: &UnboundedSender<Completion>) {
    let api = dashboard.api();
    let tx = tx.clone();
    tokio::spawn(async move {
        let _ = tx.send(Completion::Statistics(api.statistics().await));
    });
}
