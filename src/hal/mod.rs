//! Hardware abstraction layer for the membench virtual device.
//! The only backend is the host worker pool; detection exists so the
//! benchmark can refuse to run in environments without usable cores.

pub mod vdev;

/// Attempts to detect whether a virtual device is available on the host.
pub fn detect_device() -> bool {
    vdev::is_available()
}

/// Number of visible devices (0 when detection fails, otherwise 1).
pub fn device_count() -> usize {
    if vdev::is_available() {
        1
    } else {
        0
    }
}
