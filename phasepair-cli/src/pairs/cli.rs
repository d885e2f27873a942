use clap::{Arg, Command};

pub use phasepair_pairs::consts::*;

pub fn create_pairs_cli() -> Command {
    Command::new(PAIRS_CMD)
        .author("bwbioinfo")
        .about("Find pairs of heterozygous variants within a maximum base-pair distance of each other.")
        .arg(
            Arg::new("geno")
                .long("geno")
                .short('g')
                .help("Gzipped or plain genotype table with sample id, variant id, and genotype per line")
                .conflicts_with("vcf"),
        )
        .arg(
            Arg::new("vcf")
                .long("vcf")
                .short('v')
                .help("VCF file with per-sample genotypes, plain or gzipped"),
        )
        .arg(
            Arg::new("max-bp-dist")
                .long("max-bp-dist")
                .short('d')
                .value_parser(clap::value_parser!(u64))
                .help("Maximum base pair distance between variant pairs (default 500)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output file for pair lines; stdout when omitted, gzipped when it ends in .gz"),
        )
}
