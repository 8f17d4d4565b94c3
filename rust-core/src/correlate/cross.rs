//! Windowed cross-correlation with alignment modes
//!
//! The sweep slides `g` across `f` through three phases: a growing overlap
//! anchored at the start of `g`, a sliding phase where all of `g` overlaps,
//! and a shrinking tail. The alignment mode selects which phases are
//! emitted. Missing samples (NaN) in either operand are masked out of both
//! before any sum.

use super::frames::{FrameSink, SweepFrame};
use super::mask::{masked_dot, nan_mean, normalized_cov};
use super::types::{CorrelateError, LagSeries, Mode};

/// Cross-correlate `f` against `g` over the lags selected by `mode`.
///
/// `times` supplies the external coordinate axis (one entry per sample of
/// `f`); the emitted series pairs every value with its lag coordinate.
/// With `normalize` set, each lag yields the covariance of the overlapping
/// windows normalized by their deviation norms, where deviations are taken
/// against the global non-NaN means of `f` and `g` (computed once, not per
/// window). Without it, each lag yields the raw masked dot product.
///
/// Degenerate normalization (zero deviation norm in a window) propagates as
/// NaN rather than failing. Empty inputs yield an empty series.
pub fn cross_correlate(
    f: &[f64],
    g: &[f64],
    times: &[f64],
    mode: Mode,
    normalize: bool,
) -> LagSeries {
    sweep(f, g, times, mode, normalize, None)
}

/// Like [`cross_correlate`], additionally forwarding one [`SweepFrame`] per
/// lag step to `sink` for external rendering.
pub fn cross_correlate_with_sink(
    f: &[f64],
    g: &[f64],
    times: &[f64],
    mode: Mode,
    normalize: bool,
    sink: &mut dyn FrameSink,
) -> LagSeries {
    sweep(f, g, times, mode, normalize, Some(sink))
}

fn sweep(
    f: &[f64],
    g: &[f64],
    times: &[f64],
    mode: Mode,
    normalize: bool,
    mut sink: Option<&mut dyn FrameSink>,
) -> LagSeries {
    let f_n = f.len();
    let g_n = g.len();
    if f_n == 0 || g_n == 0 {
        return LagSeries::default();
    }

    tracing::debug!(f_n, g_n, mode = %mode, normalize, "cross-correlation sweep");

    // Global means over each signal's own non-missing entries
    let (f_mean, g_mean) = if normalize {
        (nan_mean(f), nan_mean(g))
    } else {
        (0.0, 0.0)
    };

    // Internal lag indices by mode. Full covers every overlap step, Right
    // starts at the first full overlap, Valid keeps only the lags where g
    // overlaps completely.
    let taus = match mode {
        Mode::Full => 0..f_n + g_n - 2,
        Mode::Right => g_n - 1..f_n + g_n - 2,
        Mode::Valid => g_n - 1..f_n,
    };

    let lag_axis = lag_axis(times, g_n, mode);

    let mut values = Vec::with_capacity(taus.len());
    let mut move_off = 0usize;
    let mut sliding = false;
    let mut warned = false;

    for tau in taus {
        let (window_f, window_g): (&[f64], &[f64]) = if tau < g_n - 1 {
            // Growing overlap, anchored at the start of g
            (&f[..(tau + 1).min(f_n)], &g[g_n - 1 - tau..])
        } else if tau <= f_n - 1 {
            // Sliding phase: all of g overlaps
            sliding = true;
            (&f[move_off..tau + 1], g)
        } else {
            // Shrinking tail
            let window_f = &f[move_off..];
            (window_f, &g[..window_f.len()])
        };

        let value = if normalize {
            let v = normalized_cov(window_f, window_g, f_mean, g_mean);
            if v.is_nan() && !warned {
                tracing::warn!(tau, "degenerate normalization, propagating NaN");
                warned = true;
            }
            v
        } else {
            masked_dot(window_f, window_g)
        };
        values.push(value);

        if let Some(sink) = sink.as_deref_mut() {
            let external_tau = tau as i64 - (g_n as i64 - 1);
            sink.push_frame(SweepFrame::capture(
                external_tau,
                move_off,
                window_f,
                window_g,
                times,
                &lag_axis,
                &values,
            ));
        }

        if sliding {
            move_off += 1;
        }
    }

    LagSeries::new(lag_axis, values)
}

/// External lag coordinates for a sweep over signals timed by `times`
///
/// Full mode prepends the reversed, negated tail of `times` so the axis
/// spans the leading partial overlaps; the other modes use `times` as-is.
/// The axis is truncated against the value count when the series is built.
fn lag_axis(times: &[f64], g_n: usize, mode: Mode) -> Vec<f64> {
    match mode {
        Mode::Full => {
            let lead = times.get(1..g_n.min(times.len())).unwrap_or(&[]);
            lead.iter()
                .rev()
                .map(|&t| -t)
                .chain(times.iter().copied())
                .collect()
        }
        Mode::Right | Mode::Valid => times.to_vec(),
    }
}

/// Short-time auto-correlation: correlate a signal against each of its own
/// successive windows.
///
/// Frames of `window_size` samples are taken every `step` samples, exactly
/// as the short-time transform frames a signal, and each frame is
/// cross-correlated against the whole signal in [`Mode::Right`]. One
/// [`LagSeries`] per frame is returned; a signal too short for a single
/// frame yields an empty vector.
pub fn stac(
    times: &[f64],
    signal: &[f64],
    window_size: usize,
    step: usize,
    normalize: bool,
) -> Result<Vec<LagSeries>, CorrelateError> {
    if step == 0 {
        return Err(CorrelateError::InvalidStep);
    }

    let count = if signal.len() < window_size {
        0
    } else {
        (signal.len() - window_size) / step
    };

    tracing::debug!(windows = count, window_size, step, "short-time auto-correlation");

    Ok((0..count)
        .map(|i| {
            let frame = &signal[i * step..i * step + window_size];
            cross_correlate(signal, frame, times, Mode::Right, normalize)
        })
        .collect())
}
