/// Computes the arithmetic mean of the present values, skipping `None`.
///
/// Returns `None` when no value is present, so an all-missing group stays
/// missing instead of collapsing to zero.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = values
        .into_iter()
        .flatten()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Largest present value, ignoring `None`.
pub fn max_present<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    values.into_iter().flatten().fold(None, |acc, v| match acc {
        Some(m) if m >= v => Some(m),
        _ => Some(v),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_skips_missing() {
        assert_eq!(mean([Some(4.0), None]), Some(4.0));
        assert_eq!(mean([Some(100.0), Some(200.0)]), Some(150.0));
    }

    #[test]
    fn test_mean_all_missing() {
        assert_eq!(mean([None, None]), None);
        assert_eq!(mean(Vec::<Option<f64>>::new()), None);
    }

    #[test]
    fn test_max_present() {
        assert_eq!(max_present([Some(3.5), None, Some(4.2), Some(4.0)]), Some(4.2));
        assert_eq!(max_present([None]), None);
    }
}
