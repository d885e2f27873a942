use fxhash::FxHashSet;

use phasepair_core::models::VariantId;

type PairKey = (String, VariantId, VariantId);

///
/// Run-lifetime record of every emitted pair, keyed by sample and the
/// unordered variant pair. Entries are never removed; the registry is
/// owned by the discovery driver and passed into the engine by reference.
///
#[derive(Debug, Default)]
pub struct PairRegistry {
    seen: FxHashSet<PairKey>,
}

impl PairRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the unordered pair `(first, second)` for `sample`.
    ///
    /// Returns true if the pair was unseen in either order and is now
    /// registered (the caller may emit); false if it was already present
    /// (the caller must suppress).
    pub fn register_if_new(&mut self, sample: &str, first: &VariantId, second: &VariantId) -> bool {
        let forward: PairKey = (sample.to_string(), first.clone(), second.clone());
        let reverse: PairKey = (sample.to_string(), second.clone(), first.clone());

        if self.seen.contains(&forward) || self.seen.contains(&reverse) {
            return false;
        }

        self.seen.insert(forward);
        true
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn variants() -> (VariantId, VariantId) {
        (
            VariantId::new("chr1", 100, "A", "T"),
            VariantId::new("chr1", 150, "G", "C"),
        )
    }

    #[rstest]
    fn test_first_registration_succeeds(variants: (VariantId, VariantId)) {
        let (a, b) = variants;
        let mut registry = PairRegistry::new();

        assert_eq!(registry.register_if_new("S1", &a, &b), true);
        assert_eq!(registry.len(), 1);
    }

    #[rstest]
    fn test_suppresses_repeat_in_same_order(variants: (VariantId, VariantId)) {
        let (a, b) = variants;
        let mut registry = PairRegistry::new();
        registry.register_if_new("S1", &a, &b);

        assert_eq!(registry.register_if_new("S1", &a, &b), false);
        assert_eq!(registry.len(), 1);
    }

    #[rstest]
    fn test_suppresses_repeat_in_flipped_order(variants: (VariantId, VariantId)) {
        let (a, b) = variants;
        let mut registry = PairRegistry::new();
        registry.register_if_new("S1", &a, &b);

        assert_eq!(registry.register_if_new("S1", &b, &a), false);
        assert_eq!(registry.len(), 1);
    }

    #[rstest]
    fn test_samples_are_independent(variants: (VariantId, VariantId)) {
        let (a, b) = variants;
        let mut registry = PairRegistry::new();
        registry.register_if_new("S1", &a, &b);

        assert_eq!(registry.register_if_new("S2", &a, &b), true);
        assert_eq!(registry.len(), 2);
    }
}
