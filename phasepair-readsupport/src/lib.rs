//! Read-support phase: stream pair lines, query an indexed alignment store
//! for each pair's span, and tally cis/trans/coverage evidence per read.

pub mod consts;
pub mod counter;
pub mod run;
pub mod store;

pub use counter::{ReadSupportCounts, classify_reads};
pub use run::{SupportSummary, count_read_support};
pub use store::{AlignedRead, AlignmentStore};
