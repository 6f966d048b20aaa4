//! Game record storage and statistics

mod store;
mod summary;

pub use store::{RecordStore, average, player_average, top_n, top_n_for_player};
pub use summary::{PlayerSummary, Report};
