use std::str::FromStr;

use crate::errors::GenotypeError;

///
/// A genotype call decoded to allele indices. Missing alleles are `None`.
/// Accepts both phased (`1|0`) and unphased (`0/1`) encodings, as well as
/// haploid and higher-ploidy calls, which are never heterozygous here.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenotypeCall {
    alleles: Vec<Option<u32>>,
}

impl GenotypeCall {
    pub fn alleles(&self) -> &[Option<u32>] {
        &self.alleles
    }

    /// True iff exactly two alleles are present, both called, and they differ.
    pub fn is_heterozygous(&self) -> bool {
        match self.alleles.as_slice() {
            [Some(first), Some(second)] => first != second,
            _ => false,
        }
    }
}

impl FromStr for GenotypeCall {
    type Err = GenotypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(GenotypeError::UndecodableCall(s.to_string()));
        }

        let alleles = s
            .split(['|', '/'])
            .map(|token| match token {
                "." => Ok(None),
                _ => token
                    .parse::<u32>()
                    .map(Some)
                    .map_err(|_| GenotypeError::UndecodableCall(s.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(GenotypeCall { alleles })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("1|0", true)]
    #[case("0|1", true)]
    #[case("0/1", true)]
    #[case("1/2", true)]
    #[case("0|0", false)]
    #[case("1/1", false)]
    #[case("./.", false)]
    #[case(".|1", false)]
    #[case(".", false)]
    #[case("1", false)]
    #[case("0/1/1", false)]
    fn test_heterozygosity(#[case] raw: &str, #[case] expected: bool) {
        let call: GenotypeCall = raw.parse().unwrap();

        assert_eq!(call.is_heterozygous(), expected);
    }

    #[rstest]
    fn test_decodes_allele_indices() {
        let call: GenotypeCall = "2|.".parse().unwrap();

        assert_eq!(call.alleles(), &[Some(2), None]);
    }

    #[rstest]
    #[case("")]
    #[case("a|b")]
    #[case("1|-1")]
    fn test_rejects_undecodable_calls(#[case] raw: &str) {
        let result = raw.parse::<GenotypeCall>();

        assert_eq!(
            result,
            Err(GenotypeError::UndecodableCall(raw.to_string()))
        );
    }
}
