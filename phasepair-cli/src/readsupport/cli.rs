use clap::{Arg, Command};

pub use phasepair_readsupport::consts::*;

pub fn create_readsupport_cli() -> Command {
    Command::new(READSUPPORT_CMD)
        .author("bwbioinfo")
        .about("Count reads supporting variant pairs in cis or trans.")
        .arg(
            Arg::new("pairs")
                .long("pairs")
                .short('p')
                .help("Pair lines from the pairs subcommand, plain or gzipped")
                .required(true),
        )
        .arg(
            Arg::new("alignments")
                .long("alignments")
                .short('a')
                .help("Indexed BAM or CRAM file of aligned reads")
                .required(true),
        )
        .arg(
            Arg::new("reference")
                .long("reference")
                .short('r')
                .help("Indexed reference FASTA; required for CRAM input"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output file for read-support rows; stdout when omitted, gzipped when it ends in .gz"),
        )
}
