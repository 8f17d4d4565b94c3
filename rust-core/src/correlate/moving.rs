//! Moving Pearson correlation between two equal-length signals

use super::frames::{FrameSink, SweepFrame};
use super::mask::pearson;
use super::types::{CorrelateError, LagSeries};

/// Slide a window of `window` samples along both signals and emit the
/// Pearson correlation coefficient of each window pair.
///
/// One value is produced for every window start τ in `0..len-1`, paired
/// with the start time from `times`. When the window would run past the end
/// of the signals the value is NaN; so is any window where masking leaves
/// zero variance. Unlike the cross-correlation sweep, means are local to
/// each window.
///
/// `center` is accepted but not acted on; windows stay anchored at their
/// start sample.
pub fn moving_correlate(
    a: &[f64],
    b: &[f64],
    times: &[f64],
    window: usize,
    center: bool,
) -> Result<LagSeries, CorrelateError> {
    slide(a, b, times, window, center, None)
}

/// Like [`moving_correlate`], additionally forwarding one [`SweepFrame`]
/// per window position to `sink`.
pub fn moving_correlate_with_sink(
    a: &[f64],
    b: &[f64],
    times: &[f64],
    window: usize,
    center: bool,
    sink: &mut dyn FrameSink,
) -> Result<LagSeries, CorrelateError> {
    slide(a, b, times, window, center, Some(sink))
}

fn slide(
    a: &[f64],
    b: &[f64],
    times: &[f64],
    window: usize,
    center: bool,
    mut sink: Option<&mut dyn FrameSink>,
) -> Result<LagSeries, CorrelateError> {
    if a.len() != b.len() {
        return Err(CorrelateError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    let _ = center; // alignment flag reserved; windows are start-anchored

    let n = a.len();
    if n == 0 {
        return Ok(LagSeries::default());
    }

    tracing::debug!(n, window, "moving-correlation sweep");

    let mut values = Vec::with_capacity(n - 1);
    for tau in 0..n - 1 {
        let value = if tau + window > n {
            // The window would run off the end; emit the missing marker
            // instead of silently truncating the slice
            f64::NAN
        } else {
            pearson(&a[tau..tau + window], &b[tau..tau + window])
        };
        values.push(value);

        if let Some(sink) = sink.as_deref_mut() {
            let end = (tau + window).min(n);
            sink.push_frame(SweepFrame::capture(
                tau as i64,
                tau,
                &a[tau..end],
                &b[tau..end],
                times,
                times,
                &values,
            ));
        }
    }

    Ok(LagSeries::new(times.to_vec(), values))
}
