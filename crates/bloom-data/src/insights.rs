//! Aggregates behind the landing page statistics and the insight charts.
//!
//! All functions take any iterator of borrowed records, so they work equally
//! on the full dataset and on a filtered view.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::record::CompanyRecord;
use crate::vocabulary::{BusinessType, Category, Country};

/// Headline counts for a set of companies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummary {
    /// Number of companies.
    pub total_companies: usize,
    /// Number of distinct countries represented.
    pub countries: usize,
    /// Number of distinct categories represented.
    pub categories: usize,
    /// Number of distinct specialties offered.
    pub specialties: usize,
}

impl DatasetSummary {
    /// Summarises `records`.
    ///
    /// ```
    /// use bloom_data::{Dataset, DatasetSummary};
    ///
    /// let dataset = Dataset::canonical();
    /// let summary = DatasetSummary::from_records(dataset.records());
    /// assert_eq!(summary.total_companies, 1000);
    /// assert_eq!(summary.categories, 10);
    /// ```
    #[must_use]
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a CompanyRecord>,
    {
        let mut summary = Self::default();
        let mut countries = BTreeSet::new();
        let mut categories = BTreeSet::new();
        let mut specialties = BTreeSet::new();
        for record in records {
            summary.total_companies += 1;
            countries.insert(record.country);
            categories.insert(record.category);
            specialties.extend(record.specialty.iter().copied());
        }
        summary.countries = countries.len();
        summary.categories = categories.len();
        summary.specialties = specialties.len();
        summary
    }
}

/// One bar or slice of a distribution chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Share<T> {
    /// The bucket.
    pub value: T,
    /// Companies in the bucket.
    pub count: usize,
}

fn count_by<'a, I, T, F>(records: I, key: F) -> BTreeMap<T, usize>
where
    I: IntoIterator<Item = &'a CompanyRecord>,
    T: Ord,
    F: Fn(&CompanyRecord) -> T,
{
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(key(record)).or_insert(0_usize) += 1;
    }
    counts
}

/// Sorts by descending count. The sort is stable, so ties keep the
/// vocabulary order the map iterates in.
fn ranked<T>(counts: BTreeMap<T, usize>) -> Vec<Share<T>> {
    let mut shares: Vec<Share<T>> = counts
        .into_iter()
        .map(|(value, count)| Share { value, count })
        .collect();
    shares.sort_by(|a, b| b.count.cmp(&a.count));
    shares
}

/// Companies per category, most common first. Empty categories are left out.
#[must_use]
pub fn category_distribution<'a, I>(records: I) -> Vec<Share<Category>>
where
    I: IntoIterator<Item = &'a CompanyRecord>,
{
    ranked(count_by(records, |record| record.category))
}

/// The `limit` most common countries, most common first.
///
/// ```
/// use bloom_data::{Country, Dataset, country_distribution};
///
/// let dataset = Dataset::canonical();
/// let top = country_distribution(dataset.records(), 3);
/// assert_eq!(top.len(), 3);
/// assert_eq!(top.first().map(|share| share.value), Some(Country::UnitedStates));
/// ```
#[must_use]
pub fn country_distribution<'a, I>(records: I, limit: usize) -> Vec<Share<Country>>
where
    I: IntoIterator<Item = &'a CompanyRecord>,
{
    let mut shares = ranked(count_by(records, |record| record.country));
    shares.truncate(limit);
    shares
}

/// Companies per business type, in vocabulary order with zeros kept.
#[must_use]
pub fn business_type_breakdown<'a, I>(records: I) -> Vec<Share<BusinessType>>
where
    I: IntoIterator<Item = &'a CompanyRecord>,
{
    let counts = count_by(records, |record| record.business_type);
    BusinessType::ALL
        .iter()
        .map(|&value| Share {
            value,
            count: counts.get(&value).copied().unwrap_or_default(),
        })
        .collect()
}

/// Companies per founding year, oldest first. Years without companies are
/// left out.
#[must_use]
pub fn founding_year_histogram<'a, I>(records: I) -> Vec<(i32, usize)>
where
    I: IntoIterator<Item = &'a CompanyRecord>,
{
    count_by(records, |record| record.founded)
        .into_iter()
        .collect()
}
