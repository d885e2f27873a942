//! Pair-discovery phase: scan per-sample heterozygous variants in position
//! order and emit every deduplicated pair within a base-pair distance bound.

pub mod consts;
pub mod discover;
pub mod registry;
pub mod sources;
pub mod window;

pub use discover::discover_pairs;
pub use registry::PairRegistry;
pub use sources::{SampleVariants, read_genotype_table, read_vcf};
pub use window::PairWindowEngine;
