use std::hash::Hash;

use itertools::Itertools;

/// Returns the most frequent value in the data.
///
/// When several values share the highest count the smallest of them wins, so the
/// result does not depend on the order of the input. Returns `None` for empty input.
pub fn mode<T, I>(data: I) -> Option<T>
where
    I: IntoIterator<Item = T>,
    T: Ord + Hash + Clone,
{
    data.into_iter()
        .counts()
        .into_iter()
        .max_by(|(a, a_count), (b, b_count)| a_count.cmp(b_count).then_with(|| b.cmp(a)))
        .map(|(value, _)| value)
}

/// Counts each distinct value, most frequent first. Values with equal counts
/// are listed in ascending order.
pub fn value_counts<T, I>(data: I) -> Vec<(T, usize)>
where
    I: IntoIterator<Item = T>,
    T: Ord + Hash + Clone,
{
    data.into_iter()
        .counts()
        .into_iter()
        .sorted_by(|(a, a_count), (b, b_count)| b_count.cmp(a_count).then_with(|| a.cmp(b)))
        .collect()
}

/// Smallest and largest value, or `None` for empty input
pub fn min_max<T, I>(data: I) -> Option<(T, T)>
where
    I: IntoIterator<Item = T>,
    T: Ord + Clone,
{
    match data.into_iter().minmax() {
        itertools::MinMaxResult::NoElements => None,
        itertools::MinMaxResult::OneElement(v) => Some((v.clone(), v)),
        itertools::MinMaxResult::MinMax(min, max) => Some((min, max)),
    }
}
