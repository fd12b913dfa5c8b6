mod edit;
mod tracker;

pub use edit::EditSession;
pub use tracker::{parse_entry, Alert, AlertKind, TrackerState};
