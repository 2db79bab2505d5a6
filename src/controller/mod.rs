pub mod command;
pub mod dashboard;
pub mod runtime;
pub mod state;

pub use command::Command;
pub use dashboard::{Dashboard, FetchTicket};
pub use runtime::run;
pub use state::ViewState;
