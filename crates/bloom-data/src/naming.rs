//! Company names and the URLs derived from them.
//!
//! Names are assembled from fixed prefix, middle and suffix tables. Every
//! hundredth record gains a regional prefix and every other fiftieth a numeric
//! suffix, which thins out collisions without making names unique.

use crate::picker::{pick, scale_to_index};
use crate::random::UniformSource;

const NAME_PREFIXES: [&str; 30] = [
    "Bloom",
    "Flora",
    "Petal",
    "Garden",
    "Rose",
    "Lily",
    "Orchid",
    "Meadow",
    "Spring",
    "Botanical",
    "Green",
    "Verdant",
    "Floral",
    "Blossom",
    "Nature",
    "Evergreen",
    "Paradise",
    "Royal",
    "Golden",
    "Silver",
    "Valley",
    "Mountain",
    "Coastal",
    "Urban",
    "Classic",
    "Premier",
    "Elite",
    "Sunrise",
    "Sunset",
    "Crystal",
];

const NAME_SUFFIXES: [&str; 20] = [
    "Flowers",
    "Florist",
    "Gardens",
    "Nursery",
    "Blooms",
    "Botanics",
    "Florals",
    "Plants",
    "Greenery",
    "Growers",
    "Farm",
    "Co.",
    "Inc.",
    "LLC",
    "Group",
    "International",
    "Wholesale",
    "Supply",
    "Trading",
    "Imports",
];

/// The empty entry means "no middle part" even when the coin lands.
const NAME_MIDDLES: [&str; 10] = [
    "",
    "& Sons",
    "& Co.",
    "Brothers",
    "Sisters",
    "Family",
    "Premium",
    "Artisan",
    "Heritage",
    "Modern",
];

const REGIONS: [&str; 7] = [
    "East", "West", "North", "South", "Central", "Pacific", "Atlantic",
];

/// Probability that a name carries a middle part.
const MIDDLE_PROBABILITY: f64 = 0.3;

/// Lowest numeric suffix appended to every fiftieth name.
const NUMBER_SUFFIX_BASE: usize = 100;

/// Number of distinct numeric suffixes (100..=999).
const NUMBER_SUFFIX_SPAN: usize = 900;

/// Builds the name for the record at zero-based `index`.
///
/// Draw order: prefix, suffix, middle coin, middle (when the coin lands), then
/// the region or number for boosted indices.
pub(crate) fn generate_name<S>(source: &mut S, index: usize) -> String
where
    S: UniformSource + ?Sized,
{
    let prefix = pick(source, &NAME_PREFIXES).copied().unwrap_or_default();
    let suffix = pick(source, &NAME_SUFFIXES).copied().unwrap_or_default();
    let middle = if source.next_unit() < MIDDLE_PROBABILITY {
        pick(source, &NAME_MIDDLES).copied().unwrap_or_default()
    } else {
        ""
    };

    let base = if middle.is_empty() {
        format!("{prefix} {suffix}")
    } else {
        format!("{prefix} {middle} {suffix}")
    };

    if index > 0 && index.is_multiple_of(100) {
        let region = pick(source, &REGIONS).copied().unwrap_or_default();
        return format!("{region} {base}");
    }

    if index > 0 && index.is_multiple_of(50) {
        let number = scale_to_index(source.next_unit(), NUMBER_SUFFIX_SPAN)
            .saturating_add(NUMBER_SUFFIX_BASE);
        return format!("{base} {number}");
    }

    base
}

/// Lowercases `name` and joins its ASCII alphanumeric runs with hyphens.
///
/// # Examples
///
/// ```
/// use bloom_data::slugify;
///
/// assert_eq!(slugify("Bloom & Sons Florist"), "bloom-sons-florist");
/// assert_eq!(slugify("  Rose Co. "), "rose-co");
/// ```
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut separator_pending = false;
    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if separator_pending && !slug.is_empty() {
                slug.push('-');
            }
            separator_pending = false;
            slug.push(c);
        } else {
            separator_pending = true;
        }
    }
    slug
}

/// Returns the website URL for a company name.
#[must_use]
pub fn website_for_name(name: &str) -> String {
    format!("https://www.{}.com", slugify(name))
}

/// Returns the deterministic placeholder image URL for a company id.
#[must_use]
pub fn image_url_for_id(id: &str) -> String {
    format!("https://picsum.photos/seed/{id}/400/300")
}
