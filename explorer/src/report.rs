//! Report assembly for one explorer run.

use bloom_data::{
    BusinessType, Category, CompanyRecord, Country, Dataset, DatasetSummary, Share,
    apply_all_filters, business_type_breakdown, category_distribution, country_distribution,
    deserialize_filters, founding_year_histogram, serialize_filters,
};
use serde::Serialize;
use tracing::info;

use crate::config::ExplorerOptions;

/// Number of countries listed in a summary report.
pub const TOP_COUNTRIES: usize = 10;

/// Insight aggregates over the matching companies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    /// Headline counts.
    pub summary: DatasetSummary,
    /// Companies per category, most common first.
    pub categories: Vec<Share<Category>>,
    /// The most common countries.
    pub top_countries: Vec<Share<Country>>,
    /// Companies per business type.
    pub business_types: Vec<Share<BusinessType>>,
    /// Companies per founding year, oldest first.
    pub founding_years: Vec<(i32, usize)>,
}

/// Body of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ReportBody<'a> {
    /// The matching companies, possibly truncated.
    Companies {
        /// Companies in dataset order.
        companies: Vec<&'a CompanyRecord>,
    },
    /// Aggregates over every matching company.
    Insights(Insights),
}

/// Output of one explorer run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<'a> {
    /// Seed the dataset was generated from.
    pub seed: u32,
    /// The filters in canonical query-string form.
    pub query: String,
    /// Number of companies matching the filters before any limit.
    pub total_matches: usize,
    /// Report contents.
    pub body: ReportBody<'a>,
}

/// Evaluates `options` against `dataset`.
///
/// The query is normalised through the filter codec, so the report always
/// carries its canonical form. Limits apply to company listings only.
///
/// # Example
///
/// ```
/// use bloom_data::Dataset;
/// use bloom_explorer::{ExplorerOptions, ReportBody, build_report};
///
/// let dataset = Dataset::generate(42);
/// let options = ExplorerOptions {
///     query: "?cat=Florist&fmin=abc".to_owned(),
///     limit: Some(3),
///     ..ExplorerOptions::default()
/// };
///
/// let report = build_report(&dataset, &options);
/// assert_eq!(report.query, "cat=Florist");
/// assert!(matches!(report.body, ReportBody::Companies { ref companies } if companies.len() == 3));
/// ```
#[must_use]
pub fn build_report<'a>(dataset: &'a Dataset, options: &ExplorerOptions) -> Report<'a> {
    let filters = deserialize_filters(&options.query);
    let matches = apply_all_filters(dataset.records(), &filters);
    let total_matches = matches.len();
    info!(
        seed = dataset.seed(),
        query = %options.query,
        active = filters.is_active(),
        total_matches,
        "filters evaluated"
    );

    let body = if options.summary {
        ReportBody::Insights(insights(&matches))
    } else {
        let mut companies = matches;
        if let Some(limit) = options.limit {
            companies.truncate(limit);
        }
        ReportBody::Companies { companies }
    };

    Report {
        seed: dataset.seed(),
        query: serialize_filters(&filters),
        total_matches,
        body,
    }
}

fn insights(matches: &[&CompanyRecord]) -> Insights {
    let records = || matches.iter().copied();
    Insights {
        summary: DatasetSummary::from_records(records()),
        categories: category_distribution(records()),
        top_countries: country_distribution(records(), TOP_COUNTRIES),
        business_types: business_type_breakdown(records()),
        founding_years: founding_year_histogram(records()),
    }
}
