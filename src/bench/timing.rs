use crate::device::event::DeviceEvent;
use crate::device::runtime::Device;

/// Times one device operation in milliseconds.
///
/// Records a start marker, runs the operation, records a stop marker and
/// forces a full device synchronization before deriving the elapsed time,
/// so every write issued by the operation has retired when the sample is
/// taken. Assumes exclusive use of the device: unrelated device work in the
/// same process would be flushed by the same barrier.
///
/// Callers must run at least one warm-up invocation before the first timed
/// one, so one-time setup costs (pool spin-up, page faults on first touch)
/// stay out of the reported figure.
pub fn time_device_op<F>(dev: &Device, op: F) -> f64
where
    F: FnOnce(),
{
    let start = DeviceEvent::record(dev);
    op();
    let stop = DeviceEvent::record(dev);
    dev.synchronize();

    start.elapsed_ms(&stop)
}
