use super::extractor::Extractor;
use super::histogram::LengthHistogram;
use crate::sequence_processor::core::Record;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::RangeInclusive;

pub const DEFAULT_MIN_LENGTH: usize = 1;
pub const DEFAULT_MAX_LENGTH: usize = 50;

/// Why a record produced no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NoRegion,
    Duplicate,
    TooLong,
    TooShort,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub header: String,
    pub region: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptanceStats {
    pub accepted: u64,
    pub no_region: u64,
    pub duplicate: u64,
    pub too_long: u64,
    pub too_short: u64,
}

impl AcceptanceStats {
    fn count(&mut self, rejection: Rejection) {
        match rejection {
            Rejection::NoRegion => self.no_region += 1,
            Rejection::Duplicate => self.duplicate += 1,
            Rejection::TooLong => self.too_long += 1,
            Rejection::TooShort => self.too_short += 1,
        }
    }

    pub fn rejected(&self) -> u64 {
        self.no_region + self.duplicate + self.too_long + self.too_short
    }

    pub fn offered(&self) -> u64 {
        self.accepted + self.rejected()
    }
}

/// Regions seen so far, in the order they were first accepted.
#[derive(Debug, Default, Clone)]
pub struct UniquenessSet {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl UniquenessSet {
    pub fn contains(&self, region: &str) -> bool {
        self.seen.contains(region)
    }

    /// Returns false if the region was already present.
    pub fn insert(&mut self, region: &str) -> bool {
        if !self.seen.insert(region.to_string()) {
            return false;
        }
        self.ordered.push(region.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    fn into_ordered(self) -> Vec<String> {
        self.ordered
    }
}

/// Outcome of a finished run.
#[derive(Debug, Clone)]
pub struct Cdr3Report {
    pub unique_regions: Vec<String>,
    pub histogram: LengthHistogram,
    pub stats: AcceptanceStats,
}

/// Applies the acceptance policy to each record and tracks unique regions.
///
/// `finalize` consumes the aggregator, so no record can be offered after the
/// histogram has been computed.
#[derive(Debug, Clone)]
pub struct Aggregator {
    extractor: Extractor,
    length_bounds: RangeInclusive<usize>,
    unique: UniquenessSet,
    stats: AcceptanceStats,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(Extractor::default(), DEFAULT_MIN_LENGTH..=DEFAULT_MAX_LENGTH)
    }
}

impl Aggregator {
    pub fn new(extractor: Extractor, length_bounds: RangeInclusive<usize>) -> Self {
        Self {
            extractor,
            length_bounds,
            unique: UniquenessSet::default(),
            stats: AcceptanceStats::default(),
        }
    }

    pub fn offer(&mut self, record: &Record) -> Result<OutputRecord, Rejection> {
        let result = self.accept(record);
        match &result {
            Ok(_) => self.stats.accepted += 1,
            Err(rejection) => self.stats.count(*rejection),
        }
        result
    }

    fn accept(&mut self, record: &Record) -> Result<OutputRecord, Rejection> {
        let region = self
            .extractor
            .extract(&record.sequence)
            .ok_or(Rejection::NoRegion)?;

        if self.unique.contains(region) {
            return Err(Rejection::Duplicate);
        }

        let len = region.chars().count();
        if len > *self.length_bounds.end() {
            return Err(Rejection::TooLong);
        }
        if len < *self.length_bounds.start() {
            return Err(Rejection::TooShort);
        }

        let inserted = self.unique.insert(region);
        debug_assert!(inserted);
        Ok(OutputRecord {
            header: record.fasta_header(),
            region: region.to_string(),
        })
    }

    pub fn unique(&self) -> &UniquenessSet {
        &self.unique
    }

    pub fn stats(&self) -> &AcceptanceStats {
        &self.stats
    }

    pub fn finalize(self) -> Cdr3Report {
        let histogram = LengthHistogram::from_lengths(
            *self.length_bounds.end(),
            self.unique.iter().map(|region| region.chars().count()),
        );

        Cdr3Report {
            unique_regions: self.unique.into_ordered(),
            histogram,
            stats: self.stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cdr3::extractor::Anchors;

    fn offer_all(aggregator: &mut Aggregator, records: &[(&str, &str)]) -> Vec<OutputRecord> {
        records
            .iter()
            .filter_map(|(h, s)| aggregator.offer(&Record::new(*h, *s)).ok())
            .collect()
    }

    #[test]
    fn test_duplicates_emit_once() {
        let mut aggregator = Aggregator::default();
        let out = offer_all(
            &mut aggregator,
            &[
                ("@R1", "AAYYCHELLOWGQ"),
                ("@R2", "AAYYCHELLOWGQ"),
                ("@R3", "AAYYCHELLOWGQ"),
            ],
        );

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].header, ">R1");
        assert_eq!(aggregator.stats().duplicate, 2);
    }

    #[test]
    fn test_rejection_reasons() {
        let mut aggregator = Aggregator::default();
        let long = format!("YYC{}WGQ", "A".repeat(51));
        let exact = format!("YYC{}WGQ", "A".repeat(50));

        assert_eq!(
            aggregator.offer(&Record::new("@a", "XXXABCDWGQYYY")),
            Err(Rejection::NoRegion)
        );
        assert_eq!(
            aggregator.offer(&Record::new("@b", "YYCWGQ")),
            Err(Rejection::TooShort)
        );
        assert_eq!(
            aggregator.offer(&Record::new("@c", &long)),
            Err(Rejection::TooLong)
        );
        assert!(aggregator.offer(&Record::new("@d", &exact)).is_ok());
        assert_eq!(
            aggregator.offer(&Record::new("@e", &exact)),
            Err(Rejection::Duplicate)
        );

        let stats = aggregator.stats();
        assert_eq!(stats.accepted, 1);
        assert_eq!(stats.rejected(), 4);
        assert_eq!(stats.offered(), 5);
    }

    #[test]
    fn test_rejected_region_is_not_remembered() {
        let mut aggregator = Aggregator::new(Extractor::default(), 3..=50);
        assert_eq!(
            aggregator.offer(&Record::new("@a", "YYCABWGQ")),
            Err(Rejection::TooShort)
        );
        // still too short, not a duplicate
        assert_eq!(
            aggregator.offer(&Record::new("@b", "YYCABWGQ")),
            Err(Rejection::TooShort)
        );
        assert!(aggregator.unique().is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let mut aggregator = Aggregator::default();
        let out = offer_all(
            &mut aggregator,
            &[
                ("@R1", "YYCBBBWGQ"),
                ("@R2", "YYCAWGQ"),
                ("@R3", "YYCBBBWGQ"),
                ("@R4", "YYCCCWGQ"),
            ],
        );

        let regions: Vec<_> = out.iter().map(|o| o.region.as_str()).collect();
        assert_eq!(regions, ["BBB", "A", "CC"]);
        assert_eq!(aggregator.unique().iter().collect::<Vec<_>>(), regions);
    }

    #[test]
    fn test_finalize_histogram() {
        let mut aggregator = Aggregator::default();
        offer_all(
            &mut aggregator,
            &[
                ("@Read1", "AAAYYCHELLOWGQBBB"),
                ("@Read2", "AAAYYCHELLOWGQBBB"),
                ("@Read3", "AAAYYCWORLDWGQBBB"),
            ],
        );
        let report = aggregator.finalize();

        assert_eq!(report.unique_regions, ["HELLO", "WORLD"]);
        assert_eq!(report.histogram.bins().count(), 51);
        assert_eq!(report.histogram.count(5), 2);
        assert_eq!(report.histogram.total(), report.unique_regions.len() as u64);
        assert!(report
            .unique_regions
            .iter()
            .all(|r| (1..=50).contains(&r.len())));
    }

    #[test]
    fn test_custom_anchors_and_bounds() {
        let mut aggregator =
            Aggregator::new(Extractor::new(Anchors::new("CAR", "WGQ")), 2..=4);
        let out = offer_all(
            &mut aggregator,
            &[("@a", "CARDYWGQ"), ("@b", "CARDYYYYWGQ"), ("@c", "CARDWGQ")],
        );

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].region, "DY");
        let report = aggregator.finalize();
        assert_eq!(report.histogram.max_len(), 4);
        assert_eq!(report.stats.too_long, 1);
        assert_eq!(report.stats.too_short, 1);
    }
}
