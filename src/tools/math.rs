use num_traits::ToPrimitive;

/// Sums the present values and averages over them. Missing values contribute
/// nothing to the sum and are left out of the mean's denominator.
///
/// The sum of an empty input is 0; the mean of an empty input is `None`.
pub fn sum_and_mean<T, I>(data: I) -> (f64, Option<f64>)
where
    I: IntoIterator<Item = Option<T>>,
    T: ToPrimitive,
{
    let (sum, count) = data
        .into_iter()
        .flatten()
        .filter_map(|v| v.to_f64())
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    let mean = match count {
        0 => None,
        n => Some(sum / n as f64),
    };

    (sum, mean)
}
