//! Behavioural tests for the bloom-data crate.
//!
//! These tests validate the crate's behaviour against Gherkin scenarios
//! covering deterministic generation, filtering and query-string state.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]


use bloom_data::{
    Category, CompanyFilters, CompanyGenerator, CompanyRecord, Country, DATASET_SIZE, Dataset,
    apply_all_filters, deserialize_filters, generate_companies, serialize_filters,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use test_support::sample_companies;

/// Test world holding datasets, filters and their results.
#[derive(Default, ScenarioState)]
struct World {
    seed: Slot<u32>,
    dataset: Slot<Dataset>,
    second_dataset: Slot<Dataset>,
    generator: Slot<CompanyGenerator>,
    paged: Slot<Vec<CompanyRecord>>,
    sample: Slot<Vec<CompanyRecord>>,
    matched_names: Slot<Vec<String>>,
    filters: Slot<CompanyFilters>,
    query: Slot<String>,
    decoded: Slot<CompanyFilters>,
}

impl World {
    fn dataset(&self) -> Dataset {
        self.dataset.get().expect("dataset should be generated")
    }

    fn sample(&self) -> Vec<CompanyRecord> {
        self.sample.get().expect("sample companies should be loaded")
    }

    fn filters(&self) -> CompanyFilters {
        self.filters.get().expect("filters should be set")
    }

    fn record_matches(&self, filters: &CompanyFilters) {
        let sample = self.sample();
        let names = apply_all_filters(&sample, filters)
            .into_iter()
            .map(|record| record.name.clone())
            .collect();
        self.matched_names.set(names);
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

/// Strips the quotes Gherkin steps wrap around free-text values.
fn unquote(value: &str) -> &str {
    value.trim().trim_matches('"')
}

fn split_list(list: &str) -> impl Iterator<Item = &str> {
    unquote(list)
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
}

// ============================================================================
// Given steps
// ============================================================================

#[given("the canonical seed")]
fn the_canonical_seed(world: &World) {
    world.seed.set(Dataset::canonical().seed());
}

#[given("datasets generated from seeds {first:u32} and {second:u32}")]
fn datasets_generated_from_seeds(world: &World, first: u32, second: u32) {
    world.dataset.set(Dataset::generate(first));
    world.second_dataset.set(Dataset::generate(second));
}

#[given("a company generator for seed {seed:u32}")]
fn a_company_generator_for_seed(world: &World, seed: u32) {
    world.seed.set(seed);
    world.generator.set(CompanyGenerator::new(seed));
}

#[given("the five sample companies")]
fn the_five_sample_companies(world: &World) {
    world.sample.set(sample_companies());
}

#[given("filters for categories {labels} founded from {year:i32}")]
fn filters_for_categories_founded_from(world: &World, labels: String, year: i32) {
    let categories = split_list(&labels)
        .map(|label| label.parse::<Category>().expect("known category"))
        .collect();
    world.filters.set(CompanyFilters {
        categories,
        founded_min: Some(year),
        ..CompanyFilters::default()
    });
}

// ============================================================================
// When steps
// ============================================================================

#[when("the dataset is generated twice")]
fn the_dataset_is_generated_twice(world: &World) {
    let seed = world.seed.get().expect("seed should be set");
    world.dataset.set(Dataset::generate(seed));
    world.second_dataset.set(Dataset::generate(seed));
}

#[when("companies are drawn in pages of {page:usize}")]
fn companies_are_drawn_in_pages(world: &World, page: usize) {
    let mut generator = world.generator.get().expect("generator should be set");
    let mut paged = Vec::with_capacity(DATASET_SIZE);
    while generator.position() < DATASET_SIZE {
        let remaining = DATASET_SIZE.saturating_sub(generator.position());
        paged.extend(generator.by_ref().take(page.min(remaining)));
    }
    world.paged.set(paged);
}

#[when("filtering by text {text} and country {country}")]
fn filtering_by_text_and_country(world: &World, text: String, country: String) {
    let filters = CompanyFilters {
        text: Some(unquote(&text).to_owned()),
        countries: vec![unquote(&country).parse::<Country>().expect("known country")],
        ..CompanyFilters::default()
    };
    world.record_matches(&filters);
}

#[when("filtering with the query {query}")]
fn filtering_with_the_query(world: &World, query: String) {
    world.record_matches(&deserialize_filters(unquote(&query)));
}

#[when("the filters are encoded and decoded")]
fn the_filters_are_encoded_and_decoded(world: &World) {
    let query = serialize_filters(&world.filters());
    world.decoded.set(deserialize_filters(&query));
    world.query.set(query);
}

// ============================================================================
// Then steps
// ============================================================================

#[then("both datasets are identical")]
fn both_datasets_are_identical(world: &World) {
    let second = world.second_dataset.get().expect("second dataset");
    assert_eq!(world.dataset().records(), second.records());
}

#[then("the dataset holds 1000 companies with sequential ids")]
fn the_dataset_holds_companies_with_sequential_ids(world: &World) {
    let dataset = world.dataset();
    assert_eq!(dataset.len(), DATASET_SIZE);
    for (index, record) in dataset.records().iter().enumerate() {
        assert_eq!(record.id, CompanyRecord::id_for_index(index));
    }
}

#[then("the first company names differ")]
fn the_first_company_names_differ(world: &World) {
    let second = world.second_dataset.get().expect("second dataset");
    let first_name = world.dataset().records().first().map(|c| c.name.clone());
    let second_name = second.records().first().map(|c| c.name.clone());
    assert_ne!(first_name, second_name);
}

#[then("the pages concatenate to the full dataset for seed {seed:u32}")]
fn the_pages_concatenate_to_the_full_dataset(world: &World, seed: u32) {
    let paged = world.paged.get().expect("paged records");
    assert_eq!(paged, generate_companies(seed));
}

#[then("the matching companies are {list}")]
fn the_matching_companies_are(world: &World, list: String) {
    let names = world.matched_names.get().expect("filter should have run");
    let expected: Vec<&str> = split_list(&list).collect();
    assert_eq!(names, expected);
}

#[then("no companies match")]
fn no_companies_match(world: &World) {
    let names = world.matched_names.get().expect("filter should have run");
    assert!(names.is_empty(), "unexpected matches: {names:?}");
}

#[then("the decoded filters equal the originals")]
fn the_decoded_filters_equal_the_originals(world: &World) {
    let decoded = world.decoded.get().expect("decoded filters");
    assert_eq!(decoded, world.filters());
}

#[then("the query string is {expected}")]
fn the_query_string_is(world: &World, expected: String) {
    let query = world.query.get().expect("encoded query");
    assert_eq!(query, unquote(&expected));
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/company_directory.feature",
    name = "Canonical generation is deterministic"
)]
fn canonical_generation_is_deterministic(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/company_directory.feature",
    name = "Different seeds diverge"
)]
fn different_seeds_diverge(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/company_directory.feature",
    name = "Paged generation matches batch generation"
)]
fn paged_generation_matches_batch_generation(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/company_directory.feature",
    name = "Text and country filters combine"
)]
fn text_and_country_filters_combine(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/company_directory.feature",
    name = "Disjoint criteria match nothing"
)]
fn disjoint_criteria_match_nothing(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/company_directory.feature",
    name = "Filter state survives a round trip through the address bar"
)]
fn filter_state_survives_a_round_trip(world: World) {
    let _ = world;
}
