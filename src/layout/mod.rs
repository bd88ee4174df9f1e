//! Pagination: overflow detection, splitting, distribution, and the sweep

mod distribute;
mod engine;
mod overflow;
mod schedule;
mod split;

pub use distribute::distribute;
pub use engine::{LayoutEngine, SweepReport, MAX_PAGES};
pub use overflow::{exceeding_set, first_exceeding, ExceedSet};
pub use schedule::ReflowScheduler;
pub use split::{split_paragraph, AtomicUnit, LineBand, SplitGroupCounter, SplitOutcome};
