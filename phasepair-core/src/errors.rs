use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum VariantIdError {
    #[error("Variant identifier must be chrom:pos:ref:alt, found: {0}")]
    MalformedIdentifier(String),

    #[error("Variant identifier has a non-numeric position: {0}")]
    InvalidPosition(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GenotypeError {
    #[error("Can't decode genotype call: {0}")]
    UndecodableCall(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PairLineError {
    #[error("Pair line needs at least sample, distance, and two variant identifiers: {0}")]
    TooFewFields(String),

    #[error("Pair line has a non-numeric distance: {0}")]
    InvalidDistance(String),

    #[error("Pair line has a non-numeric group id: {0}")]
    InvalidGroup(String),

    #[error(transparent)]
    Variant(#[from] VariantIdError),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PairDiscoveryError {
    #[error(
        "Variants for sample {sample} are not ordered by position on {chromosome}: \
         {previous} is followed by {position}. Please sort the input."
    )]
    UnsortedVariants {
        sample: String,
        chromosome: String,
        previous: u64,
        position: u64,
    },
}
