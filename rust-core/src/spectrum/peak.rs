//! Peak extraction over a 1-D array

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PeakError {
    #[error("input exhausted after {found} qualifying peaks, {requested} requested")]
    ExhaustedInput { requested: usize, found: usize },
}

/// Return the indices of the `num` largest qualifying values, in descending
/// value order.
///
/// Candidates are visited from largest to smallest value. A candidate index
/// qualifies when its value strictly exceeds the value of its left neighbor
/// in the original array; index 0 wraps around and is compared against the
/// final element. The right neighbor is never consulted. This asymmetric
/// rule is intentional and must not be replaced with a symmetric
/// local-maximum test.
///
/// NaN values sort above every finite value and can never qualify, since no
/// NaN difference is strictly positive.
///
/// Each index is visited at most once; if the array runs out before `num`
/// peaks qualify the scan fails with [`PeakError::ExhaustedInput`] rather
/// than looping.
pub fn peak_indices(signal: &[f64], num: usize) -> Result<Vec<usize>, PeakError> {
    if num == 0 {
        return Ok(Vec::new());
    }

    // Indices ordered by ascending value, then reversed; ties therefore come
    // out in descending index order.
    let mut order: Vec<usize> = (0..signal.len()).collect();
    order.sort_by(|&a, &b| signal[a].total_cmp(&signal[b]));
    order.reverse();

    let mut peaks = Vec::with_capacity(num);
    for &idx in &order {
        let left = if idx == 0 { signal.len() - 1 } else { idx - 1 };
        if signal[idx] - signal[left] > 0.0 {
            peaks.push(idx);
            if peaks.len() == num {
                return Ok(peaks);
            }
        }
    }

    Err(PeakError::ExhaustedInput {
        requested: num,
        found: peaks.len(),
    })
}
