mod pairs;
mod readsupport;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "phasepair";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("bwbioinfo")
        .about("Discovers pairs of closely spaced heterozygous variants per sample and counts sequencing reads supporting each pair in cis or trans.")
        .subcommand_required(true)
        .subcommand(pairs::cli::create_pairs_cli())
        .subcommand(readsupport::cli::create_readsupport_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // PAIR DISCOVERY
        //
        Some((phasepair_pairs::consts::PAIRS_CMD, matches)) => {
            pairs::handlers::run_pairs(matches)?;
        }

        //
        // READ SUPPORT
        //
        Some((phasepair_readsupport::consts::READSUPPORT_CMD, matches)) => {
            readsupport::handlers::run_readsupport(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
