//! Per-step frame export for external renderers
//!
//! A correlation sweep can forward its intermediate state, one frame per
//! lag step, to whatever consumes it (an animation writer, a plotting
//! frontend). The core only emits plain data; nothing here draws.

use serde::{Deserialize, Serialize};

/// Snapshot of one sweep step
///
/// Overlay vectors are aligned to the time axis by left-padding with NaN,
/// so a renderer can plot them directly against `time`. `running` is the
/// series accumulated so far, paired with `lag_times`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepFrame {
    /// External lag index for this step
    pub tau: i64,
    /// Display label, e.g. "tau = -3"
    pub label: String,
    /// Time coordinates covering the overlays
    pub time: Vec<f64>,
    /// Current window of the first signal, NaN-padded to its position
    pub overlay_f: Vec<f64>,
    /// Current window of the second signal, NaN-padded to its position
    pub overlay_g: Vec<f64>,
    /// Lag coordinates for the running series
    pub lag_times: Vec<f64>,
    /// Correlation values accumulated so far
    pub running: Vec<f64>,
}

impl SweepFrame {
    pub(crate) fn capture(
        tau: i64,
        pad: usize,
        window_f: &[f64],
        window_g: &[f64],
        times: &[f64],
        lag_axis: &[f64],
        running: &[f64],
    ) -> Self {
        let covered = (pad + window_f.len().max(window_g.len())).min(times.len());
        let mut overlay_f = vec![f64::NAN; pad];
        overlay_f.extend_from_slice(window_f);
        let mut overlay_g = vec![f64::NAN; pad];
        overlay_g.extend_from_slice(window_g);

        Self {
            tau,
            label: format!("tau = {tau}"),
            time: times[..covered].to_vec(),
            overlay_f,
            overlay_g,
            lag_times: lag_axis[..running.len().min(lag_axis.len())].to_vec(),
            running: running.to_vec(),
        }
    }
}

/// Receiver for sweep frames
///
/// The sweep pushes frames in lag order; the sink decides what to do with
/// them. `Vec<SweepFrame>` collects them as-is.
pub trait FrameSink {
    fn push_frame(&mut self, frame: SweepFrame);
}

impl FrameSink for Vec<SweepFrame> {
    fn push_frame(&mut self, frame: SweepFrame) {
        self.push(frame);
    }
}
