pub mod genotype;
pub mod pair;
pub mod variant;

pub use genotype::GenotypeCall;
pub use pair::VariantPair;
pub use variant::VariantId;
