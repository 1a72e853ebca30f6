mod dashboard;
mod narrative;
mod summary;
pub mod views;

pub use summary::HiringReport;

pub(crate) use dashboard::{candidate_cards, dashboard_overview, team_view};
