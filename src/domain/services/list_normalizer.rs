//! # List Normalizer
//!
//! Stable deduplication of record lists by natural key, and the portfolio
//! category filter.
//!
//! Every record kind declares its key through [`NaturalKey`]; one generic
//! [`normalize`] serves all of them.
//!
//! # Algorithm
//!
//! ```text
//! for record in input (in order):
//!     if key(record) not in seen: emit record, add key to seen
//!     else: skip
//! ```
//!
//! One pass, `O(n)` time, auxiliary space proportional to the number of
//! distinct keys. The first occurrence of each key wins and survivors keep
//! their relative order.
//!
//! # Examples
//!
//! ```
//! use mural_studio::domain::entities::PortfolioItem;
//! use mural_studio::domain::services::list_normalizer::normalize_records;
//!
//! let items = vec![
//!     PortfolioItem::new("A", "murals"),
//!     PortfolioItem::new("A", "murals"),
//!     PortfolioItem::new("B", "murals"),
//! ];
//! let unique = normalize_records(items);
//! assert_eq!(unique.len(), 2);
//! assert_eq!(unique[0].title.as_deref(), Some("A"));
//! assert_eq!(unique[1].title.as_deref(), Some("B"));
//! ```

use crate::domain::value_objects::category_filter::CategoryFilter;
use std::collections::HashSet;
use std::hash::Hash;

/// Key-extraction strategy of a record kind.
///
/// Two records are duplicates exactly when their keys are equal. Missing
/// key fields are represented as `None`, so records missing the same
/// fields collapse onto each other.
pub trait NaturalKey {
    /// Key tuple type.
    type Key: Eq + Hash;

    /// Extracts the natural key.
    fn natural_key(&self) -> Self::Key;
}

/// A record that belongs to a gallery category.
pub trait Categorized {
    /// The record's category, if it has one.
    fn category(&self) -> Option<&str>;
}

/// Removes records whose key was already seen, keeping first occurrences in
/// their original order.
///
/// Never fails: empty input yields empty output, and records that differ
/// only outside the key collapse onto the first one.
///
/// # Examples
///
/// ```
/// use mural_studio::domain::services::list_normalizer::normalize;
///
/// let words = vec!["apple", "Avocado", "banana", "blueberry", "cherry"];
/// let by_initial = normalize(words, |w| w.chars().next().map(|c| c.to_ascii_lowercase()));
/// assert_eq!(by_initial, vec!["apple", "banana", "cherry"]);
/// ```
pub fn normalize<R, K, F>(records: impl IntoIterator<Item = R>, mut key_of: F) -> Vec<R>
where
    K: Eq + Hash,
    F: FnMut(&R) -> K,
{
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(key_of(record)))
        .collect()
}

/// [`normalize`] using the record type's own [`NaturalKey`].
pub fn normalize_records<R: NaturalKey>(records: impl IntoIterator<Item = R>) -> Vec<R> {
    normalize(records, R::natural_key)
}

/// Returns the records passing `filter`, in their original order.
///
/// [`CategoryFilter::All`] returns every record. A concrete category only
/// matches records whose category is exactly equal.
pub fn filter_by_category<R: Categorized + Clone>(records: &[R], filter: &CategoryFilter) -> Vec<R> {
    if filter.is_all() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| filter.matches(record.category()))
        .cloned()
        .collect()
}

/// Distinct categories in order of first appearance. Records without a
/// category are skipped.
pub fn distinct_categories<R: Categorized>(records: &[R]) -> Vec<String> {
    normalize(records.iter().filter_map(Categorized::category), |c| *c)
        .into_iter()
        .map(str::to_owned)
        .collect()
}
