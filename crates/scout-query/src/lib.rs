//! Pure derivations over a roster: the shared filter predicate, timeline
//! ordering and the dashboard aggregates.

pub mod filter;
pub mod order;
pub mod stats;

pub use filter::{ScoutFilter, Selection};
pub use order::newest_first;
pub use stats::RosterStats;
