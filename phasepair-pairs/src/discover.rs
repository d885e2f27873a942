use std::io::Write;

use anyhow::{Context, Result};

use crate::registry::PairRegistry;
use crate::sources::SampleVariants;
use crate::window::PairWindowEngine;

///
/// Run the pair-discovery scan over every sample and write one
/// tab-delimited line per emitted pair. The registry and engine live here,
/// in the driver's scope, for the whole run.
///
/// Returns the number of emitted pairs.
///
pub fn discover_pairs<W: Write>(
    variants: &SampleVariants,
    max_bp_dist: u64,
    output: &mut W,
) -> Result<u64> {
    let mut engine = PairWindowEngine::new(max_bp_dist);
    let mut registry = PairRegistry::new();
    let mut emitted = 0u64;

    for (sample, sample_variants) in variants {
        let pairs = engine.scan_sample(sample, sample_variants, &mut registry)?;
        for pair in &pairs {
            writeln!(output, "{pair}").context("Failed to write pair line")?;
            emitted += 1;
        }
    }

    output.flush().context("Failed to flush pair output")?;
    Ok(emitted)
}
