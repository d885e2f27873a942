use std::path::Path;

use anyhow::{Result, bail};
use clap::ArgMatches;

use phasepair_core::utils::get_dynamic_writer;
use phasepair_pairs::consts::DEFAULT_MAX_BP_DIST;
use phasepair_pairs::{discover_pairs, read_genotype_table, read_vcf};

pub fn run_pairs(matches: &ArgMatches) -> Result<()> {
    let geno = matches.get_one::<String>("geno");
    let vcf = matches.get_one::<String>("vcf");
    let max_bp_dist = matches
        .get_one::<u64>("max-bp-dist")
        .copied()
        .unwrap_or(DEFAULT_MAX_BP_DIST);
    let output = matches.get_one::<String>("output");

    let variants = match (geno, vcf) {
        (Some(geno), None) => read_genotype_table(Path::new(geno))?,
        (None, Some(vcf)) => read_vcf(Path::new(vcf))?,
        _ => bail!("Exactly one of --geno and --vcf is required."),
    };

    let mut writer = get_dynamic_writer(output.map(Path::new))?;
    discover_pairs(&variants, max_bp_dist, &mut writer)?;

    Ok(())
}
