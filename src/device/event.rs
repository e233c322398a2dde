use std::time::Instant;

use super::runtime::Device;

/// Device-side timestamp marker, recorded on the device timeline.
///
/// One (start, end) pair forms a timing sample; the derived value is elapsed
/// milliseconds at whatever resolution the monotonic clock provides.
#[derive(Debug, Clone, Copy)]
pub struct DeviceEvent {
    at: Instant,
}

impl DeviceEvent {
    /// Records a marker on the given device's timeline.
    pub fn record(_dev: &Device) -> Self {
        Self { at: Instant::now() }
    }

    /// Elapsed milliseconds between this marker and `end`.
    ///
    /// Meaningful only after the device has been synchronized past `end`.
    pub fn elapsed_ms(&self, end: &DeviceEvent) -> f64 {
        end.at.duration_since(self.at).as_secs_f64() * 1000.0
    }
}
