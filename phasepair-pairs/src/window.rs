use phasepair_core::errors::PairDiscoveryError;
use phasepair_core::models::{VariantId, VariantPair};

use crate::registry::PairRegistry;

///
/// Anchor/candidate scan over one sample's position-ordered heterozygous
/// variants. For each anchor the forward scan stops at the first candidate
/// on another chromosome or beyond the distance bound; the bound itself is
/// inclusive.
///
/// Group ids are allocated lazily, once per anchor that contributes at
/// least one previously-unseen pair, and shared by all pairs of that
/// anchor. The counter spans the whole run, so ids stay unique across
/// samples. Pairs (i,k) and (k,m) may land in different groups even though
/// their variants overlap; the grouping is anchor-centred, not transitive.
///
#[derive(Debug)]
pub struct PairWindowEngine {
    max_bp_dist: u64,
    next_group: u64,
}

impl PairWindowEngine {
    pub fn new(max_bp_dist: u64) -> Self {
        PairWindowEngine {
            max_bp_dist,
            next_group: 0,
        }
    }

    pub fn max_bp_dist(&self) -> u64 {
        self.max_bp_dist
    }

    /// Validate ordering for one sample and collect its emittable pairs.
    ///
    /// `registry` decides which pairs are new; suppressed pairs allocate
    /// no group id.
    pub fn scan_sample(
        &mut self,
        sample: &str,
        variants: &[VariantId],
        registry: &mut PairRegistry,
    ) -> Result<Vec<VariantPair>, PairDiscoveryError> {
        validate_ordering(sample, variants)?;

        let mut pairs = Vec::new();

        for (i, anchor) in variants.iter().enumerate() {
            let mut anchor_group: Option<u64> = None;

            for candidate in &variants[i + 1..] {
                if candidate.chromosome != anchor.chromosome {
                    break;
                }
                let distance = candidate.position - anchor.position;
                if distance > self.max_bp_dist {
                    break;
                }

                if !registry.register_if_new(sample, anchor, candidate) {
                    continue;
                }

                let group = *anchor_group.get_or_insert_with(|| {
                    self.next_group += 1;
                    self.next_group
                });

                pairs.push(VariantPair {
                    sample: sample.to_string(),
                    distance,
                    first: anchor.clone(),
                    second: candidate.clone(),
                    group: Some(group),
                });
            }
        }

        Ok(pairs)
    }
}

/// Positions must be non-decreasing within each chromosome run; the input
/// contract is violated otherwise and scanning must not proceed.
fn validate_ordering(sample: &str, variants: &[VariantId]) -> Result<(), PairDiscoveryError> {
    for window in variants.windows(2) {
        let (previous, current) = (&window[0], &window[1]);
        if previous.chromosome == current.chromosome && current.position < previous.position {
            return Err(PairDiscoveryError::UnsortedVariants {
                sample: sample.to_string(),
                chromosome: current.chromosome.clone(),
                previous: previous.position,
                position: current.position,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn snv(chromosome: &str, position: u64) -> VariantId {
        VariantId::new(chromosome, position, "A", "T")
    }

    fn scan(
        engine: &mut PairWindowEngine,
        sample: &str,
        variants: &[VariantId],
    ) -> Vec<VariantPair> {
        let mut registry = PairRegistry::new();
        engine.scan_sample(sample, variants, &mut registry).unwrap()
    }

    #[rstest]
    fn test_emits_only_pairs_within_bound() {
        let variants = vec![snv("chr1", 100), snv("chr1", 150), snv("chr1", 700)];
        let mut engine = PairWindowEngine::new(500);

        let pairs = scan(&mut engine, "S1", &variants);

        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].first.position, 100);
        assert_eq!(pairs[0].second.position, 150);
        assert_eq!(pairs[0].distance, 50);
    }

    #[rstest]
    fn test_distance_bound_is_inclusive() {
        let variants = vec![snv("chr1", 100), snv("chr1", 600)];
        let mut engine = PairWindowEngine::new(500);

        let pairs = scan(&mut engine, "S1", &variants);

        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].distance, 500);
    }

    #[rstest]
    fn test_distance_beyond_bound_is_excluded() {
        let variants = vec![snv("chr1", 100), snv("chr1", 601)];
        let mut engine = PairWindowEngine::new(500);

        let pairs = scan(&mut engine, "S1", &variants);

        assert_eq!(pairs, vec![]);
    }

    #[rstest]
    fn test_unsorted_positions_are_fatal() {
        let variants = vec![snv("chr1", 150), snv("chr1", 100)];
        let mut engine = PairWindowEngine::new(500);
        let mut registry = PairRegistry::new();

        let result = engine.scan_sample("S1", &variants, &mut registry);

        assert_eq!(
            result,
            Err(PairDiscoveryError::UnsortedVariants {
                sample: "S1".to_string(),
                chromosome: "chr1".to_string(),
                previous: 150,
                position: 100,
            })
        );
    }

    #[rstest]
    fn test_chromosome_change_resets_ordering_and_window() {
        let variants = vec![snv("chr1", 5000), snv("chr2", 100), snv("chr2", 150)];
        let mut engine = PairWindowEngine::new(500);

        let pairs = scan(&mut engine, "S1", &variants);

        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].first.chromosome, "chr2");
    }

    #[rstest]
    fn test_group_is_shared_within_anchor_not_across() {
        // Anchor 100 pairs with 150 and 200 (group 1); anchor 150's pair
        // with 200 is new and opens group 2.
        let variants = vec![snv("chr1", 100), snv("chr1", 150), snv("chr1", 200)];
        let mut engine = PairWindowEngine::new(500);

        let pairs = scan(&mut engine, "S1", &variants);

        let groups: Vec<Option<u64>> = pairs.iter().map(|p| p.group).collect();
        assert_eq!(groups, vec![Some(1), Some(1), Some(2)]);
    }

    #[rstest]
    fn test_group_counter_spans_samples() {
        let mut engine = PairWindowEngine::new(500);
        let mut registry = PairRegistry::new();

        let first = engine
            .scan_sample("S1", &[snv("chr1", 100), snv("chr1", 150)], &mut registry)
            .unwrap();
        let second = engine
            .scan_sample("S2", &[snv("chr1", 100), snv("chr1", 150)], &mut registry)
            .unwrap();

        assert_eq!(first[0].group, Some(1));
        assert_eq!(second[0].group, Some(2));
    }

    #[rstest]
    fn test_duplicate_records_are_suppressed_by_registry() {
        // The same variant twice still yields a single self-pair line.
        let duplicated = vec![snv("chr1", 100), snv("chr1", 100)];
        let mut engine = PairWindowEngine::new(500);
        let mut registry = PairRegistry::new();

        let pairs = engine
            .scan_sample("S1", &duplicated, &mut registry)
            .unwrap();
        let again = engine
            .scan_sample("S1", &duplicated, &mut registry)
            .unwrap();

        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].distance, 0);
        assert_eq!(again, vec![]);
    }
}
