//! Query-string encoding of [`CompanyFilters`].
//!
//! Filtered views are bookmarkable: each criterion maps to a fixed short key
//! and multi-value criteria are comma-joined before form encoding. The key set
//! and its order are a public URL format and must stay stable.
//!
//! Both directions are total. Decoding ignores unknown keys, empty values,
//! labels outside a vocabulary and year bounds that are not numbers.

use std::str::FromStr;

use tracing::{debug, trace};
use url::form_urlencoded;

use crate::filters::CompanyFilters;

/// Query-string keys, one per filter field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Param {
    Text,
    Categories,
    Specialties,
    Certifications,
    Countries,
    Employees,
    BusinessTypes,
    Revenues,
    FoundedMin,
    FoundedMax,
}

impl Param {
    /// Emission order for [`serialize_filters`].
    const ALL: [Self; 10] = [
        Self::Text,
        Self::Categories,
        Self::Specialties,
        Self::Certifications,
        Self::Countries,
        Self::Employees,
        Self::BusinessTypes,
        Self::Revenues,
        Self::FoundedMin,
        Self::FoundedMax,
    ];

    const fn key(self) -> &'static str {
        match self {
            Self::Text => "q",
            Self::Categories => "cat",
            Self::Specialties => "spec",
            Self::Certifications => "cert",
            Self::Countries => "country",
            Self::Employees => "emp",
            Self::BusinessTypes => "biz",
            Self::Revenues => "rev",
            Self::FoundedMin => "fmin",
            Self::FoundedMax => "fmax",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|param| param.key() == key)
    }

    /// Returns the encoded value for this field, or `None` when the field is
    /// absent or empty.
    fn encode(self, filters: &CompanyFilters) -> Option<String> {
        match self {
            Self::Text => filters.text.clone().filter(|text| !text.is_empty()),
            Self::Categories => join_labels(&filters.categories),
            Self::Specialties => join_labels(&filters.specialties),
            Self::Certifications => join_labels(&filters.certifications),
            Self::Countries => join_labels(&filters.countries),
            Self::Employees => join_labels(&filters.employees),
            Self::BusinessTypes => join_labels(&filters.business_types),
            Self::Revenues => join_labels(&filters.revenues),
            Self::FoundedMin => filters.founded_min.map(|year| year.to_string()),
            Self::FoundedMax => filters.founded_max.map(|year| year.to_string()),
        }
    }

    /// Stores a decoded `value` into the matching field of `filters`.
    fn decode(self, value: &str, filters: &mut CompanyFilters) {
        match self {
            Self::Text => filters.text = Some(value.to_owned()),
            Self::Categories => filters.categories = split_labels(self, value),
            Self::Specialties => filters.specialties = split_labels(self, value),
            Self::Certifications => filters.certifications = split_labels(self, value),
            Self::Countries => filters.countries = split_labels(self, value),
            Self::Employees => filters.employees = split_labels(self, value),
            Self::BusinessTypes => filters.business_types = split_labels(self, value),
            Self::Revenues => filters.revenues = split_labels(self, value),
            Self::FoundedMin => filters.founded_min = parse_year(self, value, f64::ceil),
            Self::FoundedMax => filters.founded_max = parse_year(self, value, f64::floor),
        }
    }
}

fn join_labels<T: ToString>(values: &[T]) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    let labels: Vec<String> = values.iter().map(ToString::to_string).collect();
    Some(labels.join(","))
}

fn split_labels<T: FromStr>(param: Param, value: &str) -> Vec<T> {
    let labels: Vec<T> = value
        .split(',')
        .filter(|label| !label.is_empty())
        .filter_map(|label| {
            let parsed = label.parse().ok();
            if parsed.is_none() {
                trace!(key = param.key(), label, "dropping unknown filter label");
            }
            parsed
        })
        .collect();
    if labels.is_empty() {
        debug!(
            key = param.key(),
            value, "no known labels in filter value; criterion left unconstrained"
        );
    }
    labels
}

/// Parses a year bound as any finite number, rounding it inward with
/// `round` so the integer bound keeps exactly the same founding years.
/// Values beyond `i32` saturate.
#[expect(
    clippy::cast_possible_truncation,
    reason = "the bound is already integral and `as` saturates out-of-range values"
)]
fn parse_year(param: Param, value: &str, round: fn(f64) -> f64) -> Option<i32> {
    let parsed = value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite());
    if parsed.is_none() {
        trace!(key = param.key(), value, "dropping non-numeric year bound");
    }
    parsed.map(|number| round(number) as i32)
}

/// Encodes `filters` as a query string without a leading `?`.
///
/// Absent and empty fields are omitted, so default filters encode to the
/// empty string.
///
/// # Examples
///
/// ```
/// use bloom_data::{Category, CompanyFilters, serialize_filters};
///
/// let filters = CompanyFilters {
///     categories: vec![Category::Florist, Category::Nursery],
///     ..CompanyFilters::default()
/// };
/// assert_eq!(serialize_filters(&filters), "cat=Florist%2CNursery");
/// assert_eq!(serialize_filters(&CompanyFilters::default()), "");
/// ```
#[must_use]
pub fn serialize_filters(filters: &CompanyFilters) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for param in Param::ALL {
        if let Some(value) = param.encode(filters) {
            serializer.append_pair(param.key(), &value);
        }
    }
    serializer.finish()
}

/// Decodes a query string, with or without its leading `?`.
///
/// A multi-value key whose labels are all unknown decodes to an empty set,
/// which leaves that criterion unconstrained. This is logged at debug level
/// so a stale bookmark can be traced.
///
/// # Examples
///
/// ```
/// use bloom_data::{Country, deserialize_filters};
///
/// let filters = deserialize_filters("?q=rose+garden&country=Kenya&fmin=abc");
/// assert_eq!(filters.text.as_deref(), Some("rose garden"));
/// assert_eq!(filters.countries, vec![Country::Kenya]);
/// assert_eq!(filters.founded_min, None);
/// ```
#[must_use]
pub fn deserialize_filters(query: &str) -> CompanyFilters {
    let pairs = query.strip_prefix('?').unwrap_or(query);
    deserialize_filter_pairs(form_urlencoded::parse(pairs.as_bytes()))
}

/// Decodes already-split, already-percent-decoded key/value pairs.
///
/// The first occurrence of a key wins, even when its value is empty. Unknown
/// keys and empty values are ignored.
#[must_use]
pub fn deserialize_filter_pairs<I, K, V>(pairs: I) -> CompanyFilters
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut filters = CompanyFilters::default();
    let mut seen: Vec<Param> = Vec::with_capacity(Param::ALL.len());

    for (raw_key, raw_value) in pairs {
        let (key, value) = (raw_key.as_ref(), raw_value.as_ref());
        let Some(param) = Param::from_key(key) else {
            trace!(key, "ignoring unknown query parameter");
            continue;
        };
        if seen.contains(&param) {
            continue;
        }
        seen.push(param);
        if !value.is_empty() {
            param.decode(value, &mut filters);
        }
    }

    filters
}
