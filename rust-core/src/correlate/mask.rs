//! Missing-value masking kernels
//!
//! NaN marks a missing sample. Whenever two windows are combined, the mask
//! is the union of both windows' NaN positions: a missing sample in either
//! operand removes that position from both. All sums, means, and norms run
//! over the surviving positions only.

/// Mean over the non-NaN entries of `x`; NaN when every entry is missing
pub fn nan_mean(x: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for &v in x {
        if !v.is_nan() {
            sum += v;
            count += 1;
        }
    }
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

/// Iterate the pairs surviving union masking: positions where both windows
/// hold a real sample
fn masked_pairs<'a>(f: &'a [f64], g: &'a [f64]) -> impl Iterator<Item = (f64, f64)> + 'a {
    f.iter()
        .zip(g.iter())
        .filter(|(a, b)| !a.is_nan() && !b.is_nan())
        .map(|(&a, &b)| (a, b))
}

/// Dot product Σ f·g over the union-masked positions
pub fn masked_dot(f: &[f64], g: &[f64]) -> f64 {
    masked_pairs(f, g).map(|(a, b)| a * b).sum()
}

/// Normalized covariance against externally supplied means
///
/// Σ (f-mean_f)(g-mean_g) / (‖f-mean_f‖·‖g-mean_g‖) over the union-masked
/// positions. A zero norm yields NaN or an infinity, which propagates to the
/// caller unchanged.
pub fn normalized_cov(f: &[f64], g: &[f64], mean_f: f64, mean_g: f64) -> f64 {
    let mut num = 0.0;
    let mut norm_f = 0.0;
    let mut norm_g = 0.0;
    for (a, b) in masked_pairs(f, g) {
        let df = a - mean_f;
        let dg = b - mean_g;
        num += df * dg;
        norm_f += df * df;
        norm_g += dg * dg;
    }
    num / (norm_f.sqrt() * norm_g.sqrt())
}

/// Pearson correlation coefficient of two windows
///
/// Means are taken over the union-masked positions of the windows
/// themselves. Zero variance in either window yields NaN.
pub fn pearson(f: &[f64], g: &[f64]) -> f64 {
    let mut sum_f = 0.0;
    let mut sum_g = 0.0;
    let mut count = 0usize;
    for (a, b) in masked_pairs(f, g) {
        sum_f += a;
        sum_g += b;
        count += 1;
    }
    if count == 0 {
        return f64::NAN;
    }
    let mean_f = sum_f / count as f64;
    let mean_g = sum_g / count as f64;

    let (cov, var_f, var_g) =
        masked_pairs(f, g).fold((0.0, 0.0, 0.0), |(cov, vf, vg), (a, b)| {
            let df = a - mean_f;
            let dg = b - mean_g;
            (cov + df * dg, vf + df * df, vg + dg * dg)
        });

    if var_f == 0.0 || var_g == 0.0 {
        return f64::NAN;
    }
    cov / (var_f.sqrt() * var_g.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAN: f64 = f64::NAN;

    #[test]
    fn test_nan_mean_skips_missing() {
        assert_eq!(nan_mean(&[1.0, NAN, 3.0]), 2.0);
        assert!(nan_mean(&[NAN, NAN]).is_nan());
        assert!(nan_mean(&[]).is_nan());
    }

    #[test]
    fn test_masked_dot_uses_union_of_masks() {
        // Position 1 is missing in f, position 2 in g; only position 0
        // survives in both
        let f = [1.0, NAN, 3.0];
        let g = [4.0, 5.0, NAN];
        assert_eq!(masked_dot(&f, &g), 4.0);
    }

    #[test]
    fn test_masked_dot_without_missing() {
        assert_eq!(masked_dot(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]), 14.0);
    }

    #[test]
    fn test_pearson_perfect_correlation() {
        let x = [1.0, 2.0, 3.0, 4.0];
        assert!((pearson(&x, &x) - 1.0).abs() < 1e-12);

        let neg: Vec<f64> = x.iter().map(|v| -v).collect();
        assert!((pearson(&x, &neg) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_masks_pairs() {
        // The NaN pair is dropped from both windows, leaving a perfectly
        // linear relation
        let f = [1.0, NAN, 3.0, 4.0];
        let g = [2.0, 9.0, 6.0, 8.0];
        assert!((pearson(&f, &g) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_degenerate_is_nan() {
        assert!(pearson(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]).is_nan());
        assert!(pearson(&[NAN, NAN], &[1.0, 2.0]).is_nan());
    }

    #[test]
    fn test_normalized_cov_of_identical_windows() {
        let x = [1.0, 2.0, 3.0];
        let mean = nan_mean(&x);
        assert!((normalized_cov(&x, &x, mean, mean) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalized_cov_degenerate_is_nan() {
        // Empty surviving set: 0/0
        assert!(normalized_cov(&[NAN], &[1.0], 0.0, 0.0).is_nan());
    }
}
