//! Uniform sample grids.

/// `n` evenly spaced values over the closed interval `[start, end]`.
///
/// The first element is exactly `start` and the last exactly `end`; interior
/// points are computed from the index (not by accumulation) so rounding error
/// does not build up. Returns an empty vector for `n == 0` and `[start]` for
/// `n == 1`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = n - 1;
            let span = end - start;
            (0..n)
                .map(|i| {
                    if i == last {
                        end
                    } else {
                        start + span * (i as f64 / last as f64)
                    }
                })
                .collect()
        }
    }
}
