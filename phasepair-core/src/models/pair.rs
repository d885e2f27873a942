use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::PairLineError;
use crate::models::variant::VariantId;

///
/// A candidate pair of heterozygous variants carried by one sample.
/// Created once by the discovery phase and exchanged between the two
/// phases as a tab-delimited line:
///
/// `sample  distance  variant1  variant2  [group]`
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantPair {
    pub sample: String,
    pub distance: u64,
    pub first: VariantId,
    pub second: VariantId,
    pub group: Option<u64>,
}

impl VariantPair {
    /// True iff both variants sit on the same chromosome.
    pub fn is_single_chromosome(&self) -> bool {
        self.first.chromosome == self.second.chromosome
    }

    /// The inclusive 1-based span covered by the two variant positions.
    pub fn span(&self) -> (u64, u64) {
        let start = self.first.position.min(self.second.position);
        let end = self.first.position.max(self.second.position);
        (start, end)
    }
}

impl Display for VariantPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.sample, self.distance, self.first, self.second
        )?;
        if let Some(group) = self.group {
            write!(f, "\t{}", group)?;
        }
        Ok(())
    }
}

impl FromStr for VariantPair {
    type Err = PairLineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split_whitespace();

        let sample = fields
            .next()
            .ok_or_else(|| PairLineError::TooFewFields(s.to_string()))?;
        let distance = fields
            .next()
            .ok_or_else(|| PairLineError::TooFewFields(s.to_string()))?;
        let first = fields
            .next()
            .ok_or_else(|| PairLineError::TooFewFields(s.to_string()))?;
        let second = fields
            .next()
            .ok_or_else(|| PairLineError::TooFewFields(s.to_string()))?;

        let distance: u64 = distance
            .parse()
            .map_err(|_| PairLineError::InvalidDistance(s.to_string()))?;

        let group = match fields.next() {
            None => None,
            Some(raw) => Some(
                raw.parse::<u64>()
                    .map_err(|_| PairLineError::InvalidGroup(s.to_string()))?,
            ),
        };

        Ok(VariantPair {
            sample: sample.to_string(),
            distance,
            first: first.parse()?,
            second: second.parse()?,
            group,
        })
    }
}
