//! Deterministic flower-industry company directory data.
//!
//! This crate generates the directory's synthetic company dataset and provides
//! the pure logic that sits behind every filtered view of it. It performs no
//! I/O and has no knowledge of the presentation layer.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Seeded, reproducible generation of 1000 company records
//! - Uniform, weighted and distinct picks from fixed vocabularies
//! - Per-field filter predicates and their AND/OR composition
//! - Bookmarkable query-string encoding of filter criteria
//! - Aggregates for the landing page and insight charts
//!
//! # Example
//!
//! ```
//! use bloom_data::{Category, Dataset, apply_all_filters, deserialize_filters};
//!
//! let dataset = Dataset::canonical();
//! let filters = deserialize_filters("?cat=Florist%2CNursery&fmin=2005");
//! let matches = apply_all_filters(dataset.records(), &filters);
//!
//! assert!(!matches.is_empty());
//! for company in matches {
//!     assert!(matches!(company.category, Category::Florist | Category::Nursery));
//!     assert!(company.founded >= 2005);
//! }
//! ```

mod dataset;
mod error;
mod filters;
mod generator;
mod insights;
mod naming;
mod picker;
mod random;
mod record;
mod url_state;
mod vocabulary;

pub use dataset::Dataset;
pub use error::VocabularyError;
pub use filters::{
    CompanyFilters, apply_all_filters, filter_by_business_type, filter_by_category,
    filter_by_certifications, filter_by_country, filter_by_employees, filter_by_founded_range,
    filter_by_revenue, filter_by_specialty, filter_by_text,
};
pub use generator::{
    CANONICAL_SEED, CompanyGenerator, DATASET_SIZE, FOUNDED_MAX, FOUNDED_MIN, generate_companies,
    generate_company,
};
pub use insights::{
    DatasetSummary, Share, business_type_breakdown, category_distribution, country_distribution,
    founding_year_histogram,
};
pub use naming::{image_url_for_id, slugify, website_for_name};
pub use picker::{CATEGORY_WEIGHTS, COUNTRY_WEIGHTS, pick, pick_distinct, pick_weighted};
pub use random::{Mulberry32, UniformSource};
pub use record::{CompanyRecord, ID_PREFIX};
pub use url_state::{deserialize_filter_pairs, deserialize_filters, serialize_filters};
pub use vocabulary::{
    BusinessType, Category, Certification, Country, EmployeeRange, FALLBACK_CITY, RevenueRange,
    Specialty,
};
