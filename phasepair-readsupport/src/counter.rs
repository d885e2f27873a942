use phasepair_core::models::VariantId;

use crate::store::AlignedRead;

///
/// Per-pair tallies over one region query. Coverage counters are
/// independent; cis/trans counters only move for reads covering both
/// positions.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReadSupportCounts {
    pub cis: u64,
    pub trans: u64,
    pub coverage1: u64,
    pub coverage2: u64,
}

///
/// Classify every read against the two variant positions.
///
/// The translation from reference position to read offset is purely
/// positional; reads carrying indels in the span will be classified by the
/// shifted base. No mapping-quality, base-quality, or strand filtering is
/// applied, which keeps each count directly auditable against the raw
/// sequences.
///
pub fn classify_reads(
    reads: &[AlignedRead],
    first: &VariantId,
    second: &VariantId,
) -> ReadSupportCounts {
    let mut counts = ReadSupportCounts::default();
    let alt1 = first.alternate_base();
    let alt2 = second.alternate_base();

    for read in reads {
        let base1 = read.base_at(first.position);
        let base2 = read.base_at(second.position);

        if base1.is_some() {
            counts.coverage1 += 1;
        }
        if base2.is_some() {
            counts.coverage2 += 1;
        }

        if let (Some(base1), Some(base2)) = (base1, base2) {
            if matches_alternate(base1, alt1) && matches_alternate(base2, alt2) {
                counts.cis += 1;
            } else {
                counts.trans += 1;
            }
        }
    }

    counts
}

fn matches_alternate(base: u8, alternate: Option<u8>) -> bool {
    match alternate {
        Some(alternate) => base.eq_ignore_ascii_case(&alternate),
        None => false,
    }
}
