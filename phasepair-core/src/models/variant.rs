use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::VariantIdError;

///
/// The canonical identity of a variant: chromosome, 1-based position,
/// reference allele, and alternate allele. Rendered and parsed as
/// `chrom:pos:ref:alt`; compared and ordered by its fields.
///
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Clone)]
pub struct VariantId {
    pub chromosome: String,
    pub position: u64,
    pub reference: String,
    pub alternate: String,
}

impl VariantId {
    pub fn new(chromosome: &str, position: u64, reference: &str, alternate: &str) -> Self {
        VariantId {
            chromosome: chromosome.to_string(),
            position,
            reference: reference.to_string(),
            alternate: alternate.to_string(),
        }
    }

    /// First base of the alternate allele, if any.
    pub fn alternate_base(&self) -> Option<u8> {
        self.alternate.bytes().next()
    }
}

impl Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.chromosome, self.position, self.reference, self.alternate
        )
    }
}

impl FromStr for VariantId {
    type Err = VariantIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(':').collect();
        if fields.len() != 4 || fields.iter().any(|f| f.is_empty()) {
            return Err(VariantIdError::MalformedIdentifier(s.to_string()));
        }

        let position: u64 = fields[1]
            .parse()
            .map_err(|_| VariantIdError::InvalidPosition(s.to_string()))?;

        Ok(VariantId::new(fields[0], position, fields[2], fields[3]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_parses_canonical_form() {
        let id: VariantId = "chr21:12314:C:T".parse().unwrap();

        assert_eq!(id.chromosome, "chr21");
        assert_eq!(id.position, 12314);
        assert_eq!(id.reference, "C");
        assert_eq!(id.alternate, "T");
        assert_eq!(id.alternate_base(), Some(b'T'));
    }

    #[rstest]
    fn test_display_round_trips() {
        let id = VariantId::new("chr1", 100, "A", "AGG");
        let round_tripped: VariantId = id.to_string().parse().unwrap();

        assert_eq!(round_tripped, id);
    }

    #[rstest]
    #[case("chr1:100:A")]
    #[case("chr1:100:A:T:extra")]
    #[case("chr1:100::T")]
    #[case("")]
    fn test_rejects_malformed_identifiers(#[case] raw: &str) {
        let result = raw.parse::<VariantId>();

        assert_eq!(
            result,
            Err(VariantIdError::MalformedIdentifier(raw.to_string()))
        );
    }

    #[rstest]
    fn test_rejects_non_numeric_position() {
        let result = "chr1:abc:A:T".parse::<VariantId>();

        assert_eq!(
            result,
            Err(VariantIdError::InvalidPosition("chr1:abc:A:T".to_string()))
        );
    }

    #[rstest]
    fn test_orders_by_fields() {
        let a = VariantId::new("chr1", 100, "A", "T");
        let b = VariantId::new("chr1", 200, "A", "T");
        let c = VariantId::new("chr2", 50, "A", "T");

        assert!(a < b);
        assert!(b < c);
    }
}
