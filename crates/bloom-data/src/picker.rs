//! Uniform, weighted and without-replacement selection over a random stream.
//!
//! Every picker consumes a fixed number of draws for a given table size, which
//! keeps dataset generation reproducible: uniform and weighted picks take one
//! draw, distinct picks take `len - 1`.

use tracing::trace;

use crate::random::UniformSource;
use crate::vocabulary::{Category, Country};

/// Relative frequency of each category in generated data.
pub const CATEGORY_WEIGHTS: [(Category, f64); 10] = [
    (Category::Florist, 25.0),
    (Category::Nursery, 20.0),
    (Category::Wholesale, 18.0),
    (Category::Grower, 10.0),
    (Category::ImporterExporter, 7.0),
    (Category::GardenCenter, 6.0),
    (Category::Landscaping, 5.0),
    (Category::EventFlorist, 4.0),
    (Category::OnlineRetailer, 3.0),
    (Category::Supplier, 2.0),
];

/// Relative frequency of each country in generated data.
pub const COUNTRY_WEIGHTS: [(Country, f64); 20] = [
    (Country::UnitedStates, 40.0),
    (Country::Netherlands, 15.0),
    (Country::Colombia, 10.0),
    (Country::Ecuador, 5.0),
    (Country::Kenya, 4.0),
    (Country::Ethiopia, 2.0),
    (Country::Japan, 3.0),
    (Country::Germany, 3.0),
    (Country::UnitedKingdom, 3.0),
    (Country::France, 2.0),
    (Country::Italy, 2.0),
    (Country::Spain, 2.0),
    (Country::Australia, 2.0),
    (Country::Canada, 2.0),
    (Country::Mexico, 1.0),
    (Country::Brazil, 1.0),
    (Country::China, 1.0),
    (Country::India, 1.0),
    (Country::Thailand, 0.5),
    (Country::SouthAfrica, 0.5),
];

/// Maps a unit draw onto an index in `0..len`.
///
/// `len` must be non-zero.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "table sizes are tiny and the draw lies in [0, 1)"
)]
pub(crate) fn scale_to_index(draw: f64, len: usize) -> usize {
    let scaled = (draw * len as f64).floor() as usize;
    scaled.min(len.saturating_sub(1))
}

/// Picks one item uniformly, consuming one draw.
///
/// Returns `None` only for an empty table.
///
/// # Examples
///
/// ```
/// use bloom_data::{Mulberry32, pick};
///
/// let mut rng = Mulberry32::new(42);
/// let colours = ["red", "white", "yellow"];
/// let choice = pick(&mut rng, &colours).expect("non-empty table");
/// assert!(colours.contains(choice));
/// ```
pub fn pick<'a, T, S>(source: &mut S, items: &'a [T]) -> Option<&'a T>
where
    S: UniformSource + ?Sized,
{
    let draw = source.next_unit();
    if items.is_empty() {
        return None;
    }
    items.get(scale_to_index(draw, items.len()))
}

/// Picks one item with probability proportional to its weight, consuming one
/// draw.
///
/// The draw is scaled by the total weight and each weight is subtracted in
/// order; the first item that brings the residue to zero or below wins. If
/// rounding leaves a positive residue after the last weight, the last item is
/// returned. Returns `None` only for an empty table.
pub fn pick_weighted<'a, T, S>(source: &mut S, weights: &'a [(T, f64)]) -> Option<&'a T>
where
    S: UniformSource + ?Sized,
{
    let total: f64 = weights.iter().map(|(_, weight)| weight).sum();
    let mut residue = scale_draw(source.next_unit(), total);
    for (item, weight) in weights {
        residue = subtract(residue, *weight);
        if residue <= 0.0 {
            return Some(item);
        }
    }
    let last = weights.last().map(|(item, _)| item);
    if last.is_some() {
        trace!(residue, "weighted pick fell through to the last item");
    }
    last
}

/// Picks `count` distinct items, preserving the shuffled order.
///
/// Shuffles a copy of the table with a Fisher-Yates pass driven by `source`
/// (consuming `len - 1` draws regardless of `count`) and keeps the first
/// `count` entries. Asking for more items than exist returns the whole
/// shuffled table.
pub fn pick_distinct<T, S>(source: &mut S, items: &[T], count: usize) -> Vec<T>
where
    T: Clone,
    S: UniformSource + ?Sized,
{
    let mut shuffled = items.to_vec();
    for upper in (1..shuffled.len()).rev() {
        let other = scale_to_index(source.next_unit(), upper.saturating_add(1));
        shuffled.swap(upper, other);
    }
    shuffled.truncate(count);
    shuffled
}

#[expect(clippy::float_arithmetic, reason = "weighted selection scales the draw")]
fn scale_draw(draw: f64, total: f64) -> f64 {
    draw * total
}

#[expect(clippy::float_arithmetic, reason = "weighted selection walks the residue")]
fn subtract(residue: f64, weight: f64) -> f64 {
    residue - weight
}
