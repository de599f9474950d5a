use chrono::{DateTime, Utc};

/// Pearson correlation coefficient over two equal-length samples.
///
/// `None` below two observations, or when either side has no variance.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }

    let n = xs.len() as f64;
    let mean_x: f64 = xs.iter().sum::<f64>() / n;
    let mean_y: f64 = ys.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;

    for i in 0..xs.len() {
        let dx = xs[i] - mean_x;
        let dy = ys[i] - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x < 1e-12 || var_y < 1e-12 {
        return None;
    }

    Some(cov / (var_x.sqrt() * var_y.sqrt()))
}

/// Merge-joins two time-ordered series on exact timestamp, keeping only the
/// observations present in both.
pub fn align(
    a: &[(DateTime<Utc>, f64)],
    b: &[(DateTime<Utc>, f64)],
) -> (Vec<f64>, Vec<f64>) {
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Equal => {
                xs.push(a[i].1);
                ys.push(b[j].1);
                i += 1;
                j += 1;
            }
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
        }
    }

    (xs, ys)
}

/// Square, symmetric table of pairwise correlations with unit diagonal.
/// Off-diagonal cells are NaN when a pair has insufficient overlapping
/// observations or a constant series.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub tickers: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Computes the matrix from per-ticker `(time, value)` observations,
    /// pairing each combination on mutually present timestamps only.
    pub fn compute(series: &[(String, Vec<(DateTime<Utc>, f64)>)]) -> Self {
        let n = series.len();
        let mut values = vec![vec![f64::NAN; n]; n];

        for i in 0..n {
            values[i][i] = 1.0;
            for j in (i + 1)..n {
                let (xs, ys) = align(&series[i].1, &series[j].1);
                let r = pearson(&xs, &ys).unwrap_or(f64::NAN);
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        let tickers = series.iter().map(|(ticker, _)| ticker.clone()).collect();
        Self { tickers, values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    fn series(points: &[(i64, f64)]) -> Vec<(DateTime<Utc>, f64)> {
        points.iter().map(|(secs, v)| (ts(*secs), *v)).collect()
    }

    #[test]
    fn perfect_positive_correlation() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [2.0, 4.0, 6.0, 8.0, 10.0];
        let r = pearson(&a, &b).unwrap();
        assert!((r - 1.0).abs() < 1e-9);
    }

    #[test]
    fn perfect_negative_correlation() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [4.0, 3.0, 2.0, 1.0];
        let r = pearson(&a, &b).unwrap();
        assert!((r + 1.0).abs() < 1e-9);
    }

    #[test]
    fn insufficient_observations() {
        assert!(pearson(&[1.0], &[2.0]).is_none());
        assert!(pearson(&[], &[]).is_none());
        assert!(pearson(&[1.0, 2.0], &[1.0]).is_none());
    }

    #[test]
    fn constant_series_has_no_correlation() {
        let a = [3.0, 3.0, 3.0, 3.0];
        let b = [1.0, 2.0, 3.0, 4.0];
        assert!(pearson(&a, &b).is_none());
    }

    #[test]
    fn align_keeps_mutual_timestamps_only() {
        let a = series(&[(0, 1.0), (60, 2.0), (120, 3.0)]);
        let b = series(&[(60, 20.0), (120, 30.0), (180, 40.0)]);

        let (xs, ys) = align(&a, &b);
        assert_eq!(xs, vec![2.0, 3.0]);
        assert_eq!(ys, vec![20.0, 30.0]);
    }

    #[test]
    fn matrix_is_symmetric_with_unit_diagonal() {
        let data = vec![
            ("A".to_string(), series(&[(0, 1.0), (60, 2.0), (120, 3.0)])),
            ("B".to_string(), series(&[(0, 2.0), (60, 4.0), (120, 6.0)])),
            ("C".to_string(), series(&[(0, 3.0), (60, 2.0), (120, 1.0)])),
        ];

        let matrix = CorrelationMatrix::compute(&data);
        assert_eq!(matrix.tickers, vec!["A", "B", "C"]);
        for i in 0..3 {
            assert_eq!(matrix.values[i][i], 1.0);
            for j in 0..3 {
                assert_eq!(matrix.values[i][j].to_bits(), matrix.values[j][i].to_bits());
            }
        }
        assert!((matrix.values[0][1] - 1.0).abs() < 1e-9);
        assert!((matrix.values[0][2] + 1.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_series_yield_nan() {
        let data = vec![
            ("A".to_string(), series(&[(0, 1.0), (60, 2.0)])),
            ("B".to_string(), series(&[(120, 1.0), (180, 2.0)])),
        ];

        let matrix = CorrelationMatrix::compute(&data);
        assert!(matrix.values[0][1].is_nan());
        assert_eq!(matrix.values[0][0], 1.0);
    }
}
