//! Company filter predicates and their composition.
//!
//! Every predicate accepts any iterator of borrowed records and returns the
//! survivors in their original order. An empty criterion never constrains the
//! result. [`apply_all_filters`] chains the predicates so that distinct fields
//! combine with AND while the values inside one field combine with OR.

use serde::{Deserialize, Serialize};

use crate::generator::{FOUNDED_MAX, FOUNDED_MIN};
use crate::record::CompanyRecord;
use crate::vocabulary::{
    BusinessType, Category, Certification, Country, EmployeeRange, RevenueRange, Specialty,
};

/// Criteria for narrowing the company list.
///
/// Empty vectors and absent options mean "no constraint".
///
/// # Example
///
/// ```
/// use bloom_data::{Category, CompanyFilters, Country, Dataset, apply_all_filters};
///
/// let dataset = Dataset::canonical();
/// let filters = CompanyFilters {
///     categories: vec![Category::Florist],
///     countries: vec![Country::Netherlands],
///     ..CompanyFilters::default()
/// };
///
/// for company in apply_all_filters(dataset.records(), &filters) {
///     assert_eq!(company.category, Category::Florist);
///     assert_eq!(company.country, Country::Netherlands);
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyFilters {
    /// Free-text query matched against name and description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Accepted categories.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,
    /// Accepted specialties; a company needs any one of them.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub specialties: Vec<Specialty>,
    /// Inclusive lower bound on the founding year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub founded_min: Option<i32>,
    /// Inclusive upper bound on the founding year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub founded_max: Option<i32>,
    /// Accepted head-count brackets.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub employees: Vec<EmployeeRange>,
    /// Accepted business types.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub business_types: Vec<BusinessType>,
    /// Accepted revenue brackets.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub revenues: Vec<RevenueRange>,
    /// Accepted countries.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub countries: Vec<Country>,
    /// Accepted certifications; a company needs any one of them.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub certifications: Vec<Certification>,
}

impl CompanyFilters {
    /// Returns `true` when any criterion would narrow the result.
    ///
    /// ```
    /// use bloom_data::CompanyFilters;
    ///
    /// let blank = CompanyFilters {
    ///     text: Some("   ".to_owned()),
    ///     ..CompanyFilters::default()
    /// };
    /// assert!(!blank.is_active());
    /// ```
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.text.as_deref().is_some_and(|text| !text.trim().is_empty())
            || !self.categories.is_empty()
            || !self.specialties.is_empty()
            || !self.employees.is_empty()
            || !self.business_types.is_empty()
            || !self.revenues.is_empty()
            || !self.countries.is_empty()
            || !self.certifications.is_empty()
            || self.founded_min.is_some()
            || self.founded_max.is_some()
    }

    /// Sets the founding-year bounds from a range slider.
    ///
    /// A bound sitting at the slider's extreme ([`FOUNDED_MIN`] or
    /// [`FOUNDED_MAX`]) is stored as absent, keeping URLs free of default
    /// values.
    ///
    /// ```
    /// use bloom_data::CompanyFilters;
    ///
    /// let filters = CompanyFilters::default().with_founded_range(1990, 2015);
    /// assert_eq!(filters.founded_min, None);
    /// assert_eq!(filters.founded_max, Some(2015));
    /// ```
    #[must_use]
    pub fn with_founded_range(mut self, min: i32, max: i32) -> Self {
        self.founded_min = (min != FOUNDED_MIN).then_some(min);
        self.founded_max = (max != FOUNDED_MAX).then_some(max);
        self
    }

    /// Returns `true` when `record` survives every criterion.
    ///
    /// Equivalent to checking membership in [`apply_all_filters`] for a
    /// single record.
    #[must_use]
    pub fn matches(&self, record: &CompanyRecord) -> bool {
        let query = self.text.as_deref().map(normalise_query).unwrap_or_default();
        matches_text(record, &query)
            && matches_any(&self.categories, |c| *c == record.category)
            && matches_any(&self.specialties, |s| record.specialty.contains(s))
            && matches_founded(
                record,
                self.founded_min.unwrap_or(i32::MIN),
                self.founded_max.unwrap_or(i32::MAX),
            )
            && matches_any(&self.employees, |e| *e == record.employees)
            && matches_any(&self.business_types, |b| *b == record.business_type)
            && matches_any(&self.revenues, |r| *r == record.annual_revenue)
            && matches_any(&self.countries, |c| *c == record.country)
            && matches_any(&self.certifications, |c| record.certifications.contains(c))
    }
}

fn normalise_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// `query` must already be normalised; an empty query matches everything.
fn matches_text(record: &CompanyRecord, query: &str) -> bool {
    query.is_empty()
        || record.name.to_lowercase().contains(query)
        || record.description.to_lowercase().contains(query)
}

fn matches_any<T, F>(accepted: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    accepted.is_empty() || accepted.iter().any(predicate)
}

const fn matches_founded(record: &CompanyRecord, min: i32, max: i32) -> bool {
    record.founded >= min && record.founded <= max
}

/// Keeps companies whose name or description contains `query`,
/// case-insensitively. A blank query keeps everything.
///
/// ```
/// use bloom_data::{Dataset, filter_by_text};
///
/// let dataset = Dataset::canonical();
/// assert_eq!(filter_by_text(dataset.records(), "  ").len(), dataset.len());
/// ```
#[must_use]
pub fn filter_by_text<'a, I>(records: I, query: &str) -> Vec<&'a CompanyRecord>
where
    I: IntoIterator<Item = &'a CompanyRecord>,
{
    let needle = normalise_query(query);
    records
        .into_iter()
        .filter(|record| matches_text(record, &needle))
        .collect()
}

/// Keeps companies in any of `categories`.
#[must_use]
pub fn filter_by_category<'a, I>(records: I, categories: &[Category]) -> Vec<&'a CompanyRecord>
where
    I: IntoIterator<Item = &'a CompanyRecord>,
{
    records
        .into_iter()
        .filter(|record| matches_any(categories, |c| *c == record.category))
        .collect()
}

/// Keeps companies offering any of `specialties`.
#[must_use]
pub fn filter_by_specialty<'a, I>(records: I, specialties: &[Specialty]) -> Vec<&'a CompanyRecord>
where
    I: IntoIterator<Item = &'a CompanyRecord>,
{
    records
        .into_iter()
        .filter(|record| matches_any(specialties, |s| record.specialty.contains(s)))
        .collect()
}

/// Keeps companies founded between `min` and `max`, both inclusive.
#[must_use]
pub fn filter_by_founded_range<'a, I>(records: I, min: i32, max: i32) -> Vec<&'a CompanyRecord>
where
    I: IntoIterator<Item = &'a CompanyRecord>,
{
    records
        .into_iter()
        .filter(|record| matches_founded(record, min, max))
        .collect()
}

/// Keeps companies in any of the head-count `ranges`.
#[must_use]
pub fn filter_by_employees<'a, I>(records: I, ranges: &[EmployeeRange]) -> Vec<&'a CompanyRecord>
where
    I: IntoIterator<Item = &'a CompanyRecord>,
{
    records
        .into_iter()
        .filter(|record| matches_any(ranges, |e| *e == record.employees))
        .collect()
}

/// Keeps companies of any of the business `types`.
#[must_use]
pub fn filter_by_business_type<'a, I>(records: I, types: &[BusinessType]) -> Vec<&'a CompanyRecord>
where
    I: IntoIterator<Item = &'a CompanyRecord>,
{
    records
        .into_iter()
        .filter(|record| matches_any(types, |b| *b == record.business_type))
        .collect()
}

/// Keeps companies in any of the revenue `ranges`.
#[must_use]
pub fn filter_by_revenue<'a, I>(records: I, ranges: &[RevenueRange]) -> Vec<&'a CompanyRecord>
where
    I: IntoIterator<Item = &'a CompanyRecord>,
{
    records
        .into_iter()
        .filter(|record| matches_any(ranges, |r| *r == record.annual_revenue))
        .collect()
}

/// Keeps companies based in any of `countries`.
#[must_use]
pub fn filter_by_country<'a, I>(records: I, countries: &[Country]) -> Vec<&'a CompanyRecord>
where
    I: IntoIterator<Item = &'a CompanyRecord>,
{
    records
        .into_iter()
        .filter(|record| matches_any(countries, |c| *c == record.country))
        .collect()
}

/// Keeps companies holding any of `certifications`.
#[must_use]
pub fn filter_by_certifications<'a, I>(
    records: I,
    certifications: &[Certification],
) -> Vec<&'a CompanyRecord>
where
    I: IntoIterator<Item = &'a CompanyRecord>,
{
    records
        .into_iter()
        .filter(|record| matches_any(certifications, |c| record.certifications.contains(c)))
        .collect()
}

/// Applies every present criterion in turn, each narrowing the previous
/// result.
///
/// Fields are applied in the order text, categories, specialties, founding
/// years, employees, business types, revenues, countries, certifications.
/// Each founding-year bound applies on its own when present.
#[must_use]
pub fn apply_all_filters<'a, I>(records: I, filters: &CompanyFilters) -> Vec<&'a CompanyRecord>
where
    I: IntoIterator<Item = &'a CompanyRecord>,
{
    let mut result: Vec<&'a CompanyRecord> = records.into_iter().collect();

    if let Some(text) = filters.text.as_deref() {
        result = filter_by_text(result, text);
    }
    if !filters.categories.is_empty() {
        result = filter_by_category(result, &filters.categories);
    }
    if !filters.specialties.is_empty() {
        result = filter_by_specialty(result, &filters.specialties);
    }
    if filters.founded_min.is_some() || filters.founded_max.is_some() {
        result = filter_by_founded_range(
            result,
            filters.founded_min.unwrap_or(i32::MIN),
            filters.founded_max.unwrap_or(i32::MAX),
        );
    }
    if !filters.employees.is_empty() {
        result = filter_by_employees(result, &filters.employees);
    }
    if !filters.business_types.is_empty() {
        result = filter_by_business_type(result, &filters.business_types);
    }
    if !filters.revenues.is_empty() {
        result = filter_by_revenue(result, &filters.revenues);
    }
    if !filters.countries.is_empty() {
        result = filter_by_country(result, &filters.countries);
    }
    if !filters.certifications.is_empty() {
        result = filter_by_certifications(result, &filters.certifications);
    }

    result
}
