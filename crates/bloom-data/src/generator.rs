//! Deterministic company generation from a seed.
//!
//! One [`Mulberry32`] stream is threaded through every record in index order,
//! so record `i` depends on exactly how many draws records `0..i` consumed.
//! Generating a different number of records, or reordering the draws inside a
//! record, changes everything that follows.

use tracing::debug;

use crate::naming::{generate_name, image_url_for_id, website_for_name};
use crate::picker::{
    CATEGORY_WEIGHTS, COUNTRY_WEIGHTS, pick, pick_distinct, pick_weighted, scale_to_index,
};
use crate::random::{Mulberry32, UniformSource};
use crate::record::CompanyRecord;
use crate::vocabulary::{
    BusinessType, Category, Certification, Country, EmployeeRange, FALLBACK_CITY, RevenueRange,
    Specialty,
};

/// Number of records in a generated dataset.
pub const DATASET_SIZE: usize = 1000;

/// Seed of the canonical application dataset.
pub const CANONICAL_SEED: u32 = 42;

/// Earliest founding year.
pub const FOUNDED_MIN: i32 = 1990;

/// Latest founding year.
pub const FOUNDED_MAX: i32 = 2024;

/// Centre of the founding-year bell curve.
const FOUNDED_MEAN: f64 = 2010.0;

/// Spread of the founding-year bell curve.
const FOUNDED_STD_DEV: f64 = 5.0;

/// Stand-in for a zero draw, whose logarithm is undefined.
const ZERO_DRAW_EPSILON: f64 = 0.0001;

/// Maximum number of specialties per company.
const MAX_SPECIALTIES: usize = 4;

/// Maximum number of certifications per company.
const MAX_CERTIFICATIONS: usize = 3;

/// Probability that a company holds any certification.
const CERTIFIED_PROBABILITY: f64 = 0.6;

const DESCRIPTION_TEMPLATES: [&str; 10] = [
    "A leading {category} specializing in {specialty}. Established in {year}, serving customers with quality {product}.",
    "Family-owned {category} since {year}. Known for exceptional {specialty} and personalized service.",
    "Premier {category} offering the finest {specialty}. {businessType} focused with {cert} certification.",
    "Your trusted source for {specialty}. Operating as a {category} since {year}.",
    "Dedicated to providing beautiful {specialty} to customers worldwide. A {category} committed to excellence.",
    "Innovative {category} bringing fresh {specialty} to the market since {year}.",
    "Award-winning {category} recognized for outstanding {specialty}. Proudly serving the {region} region.",
    "Sustainable {category} focused on eco-friendly {specialty} production and distribution.",
    "Boutique {category} crafting unique {specialty} arrangements since {year}.",
    "Industry-leading {category} with a passion for {specialty} and customer satisfaction.",
];

/// Iterator producing companies for one seed in index order.
///
/// Consuming the iterator page by page yields exactly the same records as
/// [`generate_companies`], because the stream position carries over.
///
/// # Example
///
/// ```
/// use bloom_data::{CompanyGenerator, generate_companies};
///
/// let first_page: Vec<_> = CompanyGenerator::new(7).take(20).collect();
/// let all = generate_companies(7);
/// assert_eq!(first_page.as_slice(), all.get(..20).expect("20 records"));
/// ```
#[derive(Debug, Clone)]
pub struct CompanyGenerator {
    source: Mulberry32,
    index: usize,
}

impl CompanyGenerator {
    /// Starts generation at index zero for `seed`.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self {
            source: Mulberry32::new(seed),
            index: 0,
        }
    }

    /// Returns the zero-based index of the next record.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.index
    }
}

impl Iterator for CompanyGenerator {
    type Item = CompanyRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let record = generate_company(&mut self.source, self.index);
        self.index = self.index.saturating_add(1);
        Some(record)
    }
}

/// Generates the full [`DATASET_SIZE`]-record dataset for `seed`.
///
/// # Example
///
/// ```
/// use bloom_data::{DATASET_SIZE, generate_companies};
///
/// let companies = generate_companies(42);
/// assert_eq!(companies.len(), DATASET_SIZE);
/// assert_eq!(companies, generate_companies(42));
/// ```
#[must_use]
pub fn generate_companies(seed: u32) -> Vec<CompanyRecord> {
    let companies: Vec<_> = CompanyGenerator::new(seed).take(DATASET_SIZE).collect();
    debug!(seed, count = companies.len(), "generated company dataset");
    companies
}

/// Generates the record at zero-based `index` from the current stream
/// position.
///
/// The draw order is fixed: name, category, founding year, country,
/// specialties, employees, business type, revenue, headquarters,
/// certifications, description.
pub fn generate_company<S>(source: &mut S, index: usize) -> CompanyRecord
where
    S: UniformSource + ?Sized,
{
    let id = CompanyRecord::id_for_index(index);
    let name = generate_name(source, index);
    let category = pick_weighted(source, &CATEGORY_WEIGHTS)
        .copied()
        .unwrap_or_default();
    let founded = generate_founded_year(source);
    let country = pick_weighted(source, &COUNTRY_WEIGHTS)
        .copied()
        .unwrap_or_default();

    let specialty_count = scale_to_index(source.next_unit(), MAX_SPECIALTIES).saturating_add(1);
    let specialty = pick_distinct(source, Specialty::ALL, specialty_count);

    let employees = pick(source, EmployeeRange::ALL).copied().unwrap_or_default();
    let business_type = pick(source, BusinessType::ALL).copied().unwrap_or_default();
    let annual_revenue = pick(source, RevenueRange::ALL).copied().unwrap_or_default();

    let cities = match country.cities() {
        [] => &[FALLBACK_CITY][..],
        cities => cities,
    };
    let headquarters = pick(source, cities)
        .copied()
        .unwrap_or(FALLBACK_CITY)
        .to_owned();

    let certifications = if source.next_unit() < CERTIFIED_PROBABILITY {
        let count = scale_to_index(source.next_unit(), MAX_CERTIFICATIONS).saturating_add(1);
        pick_distinct(source, Certification::ALL, count)
    } else {
        Vec::new()
    };

    let description = generate_description(
        source,
        &DescriptionFields {
            category,
            specialty: &specialty,
            founded,
            business_type,
            certifications: &certifications,
            country,
        },
    );

    let website = website_for_name(&name);
    let image_url = image_url_for_id(&id);

    CompanyRecord {
        id,
        name,
        category,
        specialty,
        founded,
        employees,
        business_type,
        annual_revenue,
        headquarters,
        country,
        certifications,
        description,
        website,
        image_url,
    }
}

/// Samples a founding year from a clamped normal distribution.
///
/// Uses the Box-Muller transform over two draws; a first draw of exactly zero
/// is replaced by [`ZERO_DRAW_EPSILON`].
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    reason = "Box-Muller is float maths; the result is clamped to a small year range"
)]
pub(crate) fn generate_founded_year<S>(source: &mut S) -> i32
where
    S: UniformSource + ?Sized,
{
    let first = source.next_unit();
    let second = source.next_unit();
    let radius_draw = if first == 0.0 { ZERO_DRAW_EPSILON } else { first };
    let z = (-2.0 * radius_draw.ln()).sqrt() * (std::f64::consts::TAU * second).cos();
    let year = (FOUNDED_STD_DEV.mul_add(z, FOUNDED_MEAN))
        .round()
        .clamp(f64::from(FOUNDED_MIN), f64::from(FOUNDED_MAX));
    year as i32
}

/// Record values substituted into a description template.
struct DescriptionFields<'a> {
    category: Category,
    specialty: &'a [Specialty],
    founded: i32,
    business_type: BusinessType,
    certifications: &'a [Certification],
    country: Country,
}

fn generate_description<S>(source: &mut S, fields: &DescriptionFields<'_>) -> String
where
    S: UniformSource + ?Sized,
{
    let template = pick(source, &DESCRIPTION_TEMPLATES)
        .copied()
        .unwrap_or_default();
    let specialty = fields.specialty.first().map_or("flowers", |s| s.as_str());
    let cert = fields
        .certifications
        .first()
        .map_or("quality", |c| c.as_str());
    let product = if fields.specialty.len() > 1 {
        "flowers and plants"
    } else {
        "flowers"
    };

    template
        .replacen("{category}", &fields.category.as_str().to_lowercase(), 1)
        .replacen("{specialty}", specialty, 1)
        .replacen("{year}", &fields.founded.to_string(), 1)
        .replacen("{businessType}", fields.business_type.as_str(), 1)
        .replacen("{cert}", cert, 1)
        .replacen("{product}", product, 1)
        .replacen("{region}", fields.country.as_str(), 1)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::{fixture, rstest};

    use super::*;

    /// Replays fixed draws, repeating the last one once exhausted.
    struct ScriptedSource(Vec<f64>);

    impl UniformSource for ScriptedSource {
        fn next_unit(&mut self) -> f64 {
            if self.0.len() > 1 {
                self.0.remove(0)
            } else {
                self.0.first().copied().unwrap_or(0.0)
            }
        }
    }

    /// Asserts a predicate holds for every record.
    fn assert_all_records<F>(records: &[CompanyRecord], predicate: F)
    where
        F: Fn(&CompanyRecord) -> bool,
    {
        for record in records {
            assert!(predicate(record), "Predicate failed for record: {record:?}");
        }
    }

    #[fixture]
    fn canonical() -> Vec<CompanyRecord> {
        generate_companies(CANONICAL_SEED)
    }

    #[rstest]
    fn generates_exactly_dataset_size(canonical: Vec<CompanyRecord>) {
        assert_eq!(canonical.len(), DATASET_SIZE);
    }

    #[rstest]
    fn generation_is_deterministic(canonical: Vec<CompanyRecord>) {
        assert_eq!(canonical, generate_companies(CANONICAL_SEED));
    }

    #[test]
    fn different_seeds_produce_different_first_names() {
        let first = generate_companies(42);
        let second = generate_companies(123);
        assert_ne!(
            first.first().map(|c| c.name.as_str()),
            second.first().map(|c| c.name.as_str())
        );
    }

    #[rstest]
    fn ids_are_sequential(canonical: Vec<CompanyRecord>) {
        for (index, record) in canonical.iter().enumerate() {
            assert_eq!(record.id, CompanyRecord::id_for_index(index));
        }
        let unique: HashSet<_> = canonical.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(unique.len(), DATASET_SIZE);
    }

    #[rstest]
    fn specialties_are_distinct_and_bounded(canonical: Vec<CompanyRecord>) {
        assert_all_records(&canonical, |record| {
            let unique: HashSet<_> = record.specialty.iter().collect();
            (1..=MAX_SPECIALTIES).contains(&record.specialty.len())
                && unique.len() == record.specialty.len()
        });
    }

    #[rstest]
    fn certifications_are_distinct_and_bounded(canonical: Vec<CompanyRecord>) {
        assert_all_records(&canonical, |record| {
            let unique: HashSet<_> = record.certifications.iter().collect();
            record.certifications.len() <= MAX_CERTIFICATIONS
                && unique.len() == record.certifications.len()
        });
    }

    #[rstest]
    fn founded_years_are_in_range(canonical: Vec<CompanyRecord>) {
        assert_all_records(&canonical, |record| {
            (FOUNDED_MIN..=FOUNDED_MAX).contains(&record.founded)
        });
    }

    #[rstest]
    fn headquarters_belong_to_the_country(canonical: Vec<CompanyRecord>) {
        assert_all_records(&canonical, |record| {
            record.country.cities().contains(&record.headquarters.as_str())
        });
    }

    #[rstest]
    fn urls_are_derived_from_name_and_id(canonical: Vec<CompanyRecord>) {
        assert_all_records(&canonical, |record| {
            record.website == website_for_name(&record.name)
                && record.image_url == image_url_for_id(&record.id)
        });
    }

    #[rstest]
    fn descriptions_have_no_placeholders(canonical: Vec<CompanyRecord>) {
        assert_all_records(&canonical, |record| {
            record.description.len() > 10 && !record.description.contains('{')
        });
    }

    #[test]
    fn paged_generation_matches_batch_generation() {
        let mut generator = CompanyGenerator::new(11);
        let mut paged = Vec::new();
        while paged.len() < DATASET_SIZE {
            paged.extend(generator.by_ref().take(64).take(DATASET_SIZE - paged.len()));
        }
        assert_eq!(generator.position(), DATASET_SIZE);
        assert_eq!(paged, generate_companies(11));
    }

    #[test]
    fn zero_draw_is_replaced_by_epsilon() {
        // u1 = 0 would make ln(u1) infinite; with the epsilon and u2 = 0 the
        // sample is 2010 + 5 * sqrt(-2 ln 0.0001), which clamps to 2024.
        let mut source = ScriptedSource(vec![0.0, 0.0]);
        assert_eq!(generate_founded_year(&mut source), FOUNDED_MAX);
    }

    #[rstest]
    #[case(0.5, 0.25, 2010)]
    #[case(1.0, 0.0, 2010)]
    #[case(0.01, 0.5, 1995)]
    fn founded_year_follows_box_muller(
        #[case] first: f64,
        #[case] second: f64,
        #[case] expected: i32,
    ) {
        let mut source = ScriptedSource(vec![first, second]);
        assert_eq!(generate_founded_year(&mut source), expected);
    }

    #[test]
    fn description_substitutes_record_fields() {
        // Draw 0.25 selects the third template.
        let mut source = ScriptedSource(vec![0.25]);
        let description = generate_description(
            &mut source,
            &DescriptionFields {
                category: Category::GardenCenter,
                specialty: &[Specialty::Peonies, Specialty::Roses],
                founded: 2003,
                business_type: BusinessType::B2b,
                certifications: &[Certification::FairTrade],
                country: Country::Kenya,
            },
        );
        assert_eq!(
            description,
            "Premier garden center offering the finest Peonies. B2B focused with Fair Trade certification."
        );
    }

    #[test]
    fn description_falls_back_when_lists_are_empty() {
        let mut source = ScriptedSource(vec![0.25]);
        let description = generate_description(
            &mut source,
            &DescriptionFields {
                category: Category::Florist,
                specialty: &[],
                founded: 2003,
                business_type: BusinessType::Both,
                certifications: &[],
                country: Country::Japan,
            },
        );
        assert_eq!(
            description,
            "Premier florist offering the finest flowers. Both focused with quality certification."
        );
    }
}
