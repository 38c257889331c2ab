//! The immutable, shareable company dataset.
//!
//! A [`Dataset`] is built once, explicitly, and then handed to every consumer
//! by cheap clone. Nothing can mutate the records after construction, so
//! concurrent readers need no synchronisation.

use std::sync::Arc;

use tracing::info;

use crate::generator::{CANONICAL_SEED, generate_companies};
use crate::record::CompanyRecord;

/// Generated records together with the seed that produced them.
///
/// # Example
///
/// ```
/// use bloom_data::Dataset;
///
/// let dataset = Dataset::canonical();
/// let shared = dataset.clone();
///
/// assert_eq!(dataset.len(), 1000);
/// assert_eq!(shared.find("fc-0001"), dataset.records().first());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    seed: u32,
    records: Arc<[CompanyRecord]>,
}

impl Dataset {
    /// Generates the dataset for `seed`.
    #[must_use]
    pub fn generate(seed: u32) -> Self {
        let records: Arc<[CompanyRecord]> = generate_companies(seed).into();
        info!(seed, count = records.len(), "company dataset ready");
        Self { seed, records }
    }

    /// Generates the application's canonical dataset.
    #[must_use]
    pub fn canonical() -> Self {
        Self::generate(CANONICAL_SEED)
    }

    /// Returns the seed the records were generated from.
    #[must_use]
    pub const fn seed(&self) -> u32 {
        self.seed
    }

    /// Returns every record in generation order.
    #[must_use]
    pub fn records(&self) -> &[CompanyRecord] {
        &self.records
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the dataset holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by its `fc-NNNN` identifier.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&CompanyRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Returns the first `count` records, as shown on the landing page.
    #[must_use]
    pub fn featured(&self, count: usize) -> &[CompanyRecord] {
        let end = count.min(self.records.len());
        self.records.get(..end).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use rstest::{fixture, rstest};

    use super::*;
    use crate::generator::DATASET_SIZE;

    #[fixture]
    fn dataset() -> Dataset {
        Dataset::canonical()
    }

    #[rstest]
    fn canonical_matches_fresh_generation(dataset: Dataset) {
        assert_eq!(dataset.seed(), CANONICAL_SEED);
        assert_eq!(dataset.records(), generate_companies(CANONICAL_SEED).as_slice());
    }

    #[rstest]
    fn clones_share_storage(dataset: Dataset) {
        let shared = dataset.clone();
        assert!(std::ptr::eq(dataset.records(), shared.records()));
    }

    #[rstest]
    #[case("fc-0001", true)]
    #[case("fc-1000", true)]
    #[case("fc-1001", false)]
    #[case("nope", false)]
    fn find_looks_up_by_id(dataset: Dataset, #[case] id: &str, #[case] found: bool) {
        assert_eq!(dataset.find(id).is_some(), found);
    }

    #[rstest]
    #[case(6, 6)]
    #[case(0, 0)]
    #[case(5000, DATASET_SIZE)]
    fn featured_is_a_prefix(dataset: Dataset, #[case] count: usize, #[case] expected: usize) {
        let featured = dataset.featured(count);
        assert_eq!(featured.len(), expected);
        assert_eq!(featured, dataset.records().get(..expected).unwrap_or_default());
    }

    #[rstest]
    fn concurrent_readers_see_identical_records(dataset: Dataset) {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let reader = dataset.clone();
                thread::spawn(move || reader.records().iter().map(|c| c.founded).sum::<i32>())
            })
            .collect();
        let expected: i32 = dataset.records().iter().map(|c| c.founded).sum();
        for handle in handles {
            assert_eq!(handle.join().expect("reader thread"), expected);
        }
    }
}
