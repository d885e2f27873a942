use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;

use phasepair_core::utils::get_dynamic_writer;
use phasepair_readsupport::{AlignmentStore, count_read_support};

pub fn run_readsupport(matches: &ArgMatches) -> Result<()> {
    let pairs = matches
        .get_one::<String>("pairs")
        .expect("A path to a pairs file is required.");
    let alignments = matches
        .get_one::<String>("alignments")
        .expect("A path to an alignment file is required.");
    let reference = matches.get_one::<String>("reference");
    let output = matches.get_one::<String>("output");

    let mut store = AlignmentStore::open(Path::new(alignments), reference.map(Path::new))?;
    let mut writer = get_dynamic_writer(output.map(Path::new))?;

    let summary = count_read_support(Path::new(pairs), &mut store, &mut writer)?;
    if summary.pairs_skipped > 0 {
        eprintln!(
            "Skipped {} of {} pair lines.",
            summary.pairs_skipped,
            summary.pairs_counted + summary.pairs_skipped
        );
    }

    Ok(())
}
