use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use phasepair_core::models::VariantPair;
use phasepair_core::utils::get_dynamic_reader;

use crate::counter::classify_reads;
use crate::store::AlignmentStore;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SupportSummary {
    pub pairs_counted: u64,
    pub pairs_skipped: u64,
}

///
/// Stream pair lines and write one read-support row per resolvable pair:
///
/// `variant1  variant2  cis  trans  coverage1  coverage2`
///
/// Malformed lines, cross-chromosome pairs, and unresolvable regions are
/// reported and skipped; each surviving pair issues exactly one region
/// query, fully drained before the next line is read.
///
pub fn count_read_support<W: Write>(
    pairs_path: &Path,
    store: &mut AlignmentStore,
    output: &mut W,
) -> Result<SupportSummary> {
    let reader = get_dynamic_reader(pairs_path)?;
    let mut summary = SupportSummary::default();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed}] {msg}")
            .unwrap()
            .tick_strings(&["-", "\\", "|", "/"]),
    );
    spinner.set_message("Counting read support...");

    for (index, line) in reader.lines().enumerate() {
        let line =
            line.with_context(|| format!("Failed to read line {} of {:?}", index + 1, pairs_path))?;
        if line.trim().is_empty() {
            continue;
        }

        let pair: VariantPair = match line.parse() {
            Ok(pair) => pair,
            Err(e) => {
                eprintln!("Warning: skipping pair line {}: {}", index + 1, e);
                summary.pairs_skipped += 1;
                continue;
            }
        };

        if !pair.is_single_chromosome() {
            eprintln!(
                "Warning: skipping pair line {}: variants on different chromosomes ({}, {})",
                index + 1,
                pair.first.chromosome,
                pair.second.chromosome
            );
            summary.pairs_skipped += 1;
            continue;
        }

        let (start, end) = pair.span();
        let reads = match store.query(&pair.first.chromosome, start, end) {
            Ok(reads) => reads,
            Err(e) => {
                eprintln!(
                    "Warning: skipping pair line {}: can't resolve region {}:{}-{}: {}",
                    index + 1,
                    pair.first.chromosome,
                    start,
                    end,
                    e
                );
                summary.pairs_skipped += 1;
                continue;
            }
        };

        let counts = classify_reads(&reads, &pair.first, &pair.second);
        writeln!(
            output,
            "{}\t{}\t{}\t{}\t{}\t{}",
            pair.first, pair.second, counts.cis, counts.trans, counts.coverage1, counts.coverage2
        )
        .context("Failed to write read-support row")?;

        summary.pairs_counted += 1;
        spinner.set_message(format!("Counted {} pairs", summary.pairs_counted));
        spinner.tick();
    }

    spinner.finish_and_clear();
    output.flush().context("Failed to flush read-support output")?;
    Ok(summary)
}
