use argminmax::ArgMinMax;
use statrs::statistics::Statistics;

/// Largest value of a non-empty slice.
pub fn get_max(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmax();
    vec[max_index]
}

/// Smallest value of a non-empty slice.
pub fn get_min(vec: &[f64]) -> f64 {
    let min_index: usize = vec.argmin();
    vec[min_index]
}

pub fn get_min_max(vec: &[f64]) -> (f64, f64) {
    (get_min(vec), get_max(vec))
}

/// Arithmetic mean. `NaN` for an empty slice, callers check emptiness first.
pub fn mean(vec: &[f64]) -> f64 {
    vec.iter().mean()
}

/// `n` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_and_mean() {
        let values = [0.05, 0.07, 0.06];
        assert_eq!(get_min_max(&values), (0.05, 0.07));
        assert!((mean(&values) - 0.06).abs() < 1e-12);
    }

    #[test]
    fn linspace_hits_both_ends() {
        let ticks = linspace(0.0, 1.0, 5);
        assert_eq!(ticks.len(), 5);
        assert_eq!(ticks[0], 0.0);
        assert!((ticks[2] - 0.5).abs() < 1e-12);
        assert_eq!(ticks[4], 1.0);
        assert_eq!(linspace(0.3, 0.9, 1), vec![0.3]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }
}
