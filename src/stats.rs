use crate::list::NumberList;

/// Arithmetic mean, 0 for an empty list.
pub fn mean(list: &NumberList) -> f64 {
    if list.is_empty() {
        return 0.0;
    }

    let mut sum = 0.0;
    list.for_each(|value| sum += value);

    sum / list.size() as f64
}

/// Sample standard deviation (Bessel's correction) around `mean`.
///
/// Lists with fewer than two values have no spread and yield 0.
pub fn standard_deviation(list: &NumberList, mean: f64) -> f64 {
    if list.size() <= 1 {
        return 0.0;
    }

    let mut sum_squares = 0.0;
    list.for_each(|value| sum_squares += (value - mean).powi(2));

    (sum_squares / (list.size() - 1) as f64).sqrt()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
}

impl Summary {
    pub fn of(list: &NumberList) -> Self {
        let mean = mean(list);
        Self {
            count: list.size(),
            mean,
            std_dev: standard_deviation(list, mean),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{mean, standard_deviation, Summary};
    use crate::list::NumberList;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn empty_list_has_zero_mean_and_spread() {
        let list = NumberList::new();
        assert_eq!(mean(&list), 0.0);
        assert_eq!(standard_deviation(&list, 0.0), 0.0);
    }

    #[test]
    fn single_value_has_zero_spread() {
        let list: NumberList = [42.0].into_iter().collect();
        assert_eq!(mean(&list), 42.0);
        assert_eq!(standard_deviation(&list, 42.0), 0.0);
    }

    #[test]
    fn mean_is_sum_over_count() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let list: NumberList = values.into_iter().collect();
        assert_close(mean(&list), values.iter().sum::<f64>() / values.len() as f64);
    }

    #[test]
    fn sample_deviation_uses_n_minus_one() {
        // squared deviations sum to 32, over 7 degrees of freedom
        let list: NumberList = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0].into_iter().collect();
        assert_close(standard_deviation(&list, 5.0), (32.0_f64 / 7.0).sqrt());
    }

    #[test]
    fn spread_ignores_insertion_order() {
        let forward: NumberList = [1.0, 10.0, 100.0, 1000.0].into_iter().collect();
        let backward: NumberList = [1000.0, 100.0, 10.0, 1.0].into_iter().collect();

        let a = Summary::of(&forward);
        let b = Summary::of(&backward);
        assert_close(a.mean, b.mean);
        assert_close(a.std_dev, b.std_dev);
        assert_ne!(forward.to_list(), backward.to_list());
    }

    #[test]
    fn summary_of_integer_column() {
        let list: NumberList = [160.0, 591.0, 114.0, 229.0, 230.0, 270.0, 128.0, 1657.0, 624.0, 1503.0]
            .into_iter()
            .collect();
        let summary = Summary::of(&list);
        assert_eq!(summary.count, 10);
        assert_eq!(format!("{:.6}", summary.mean), "550.600000");
        assert_eq!(format!("{:.6}", summary.std_dev), "572.026845");
    }
}
