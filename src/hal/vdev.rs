//! Virtual-device backend detection helpers for the HAL.

use std::env;

use once_cell::sync::Lazy;

/// Worker threads the host can dedicate to device work, probed once.
static HOST_CORES: Lazy<usize> = Lazy::new(num_cpus::get);

/// Returns `true` when the virtual device appears usable on the host.
///
/// `MEMBENCH_NO_DEVICE` forces detection to fail and `MEMBENCH_FORCE_DEVICE`
/// forces it to succeed, which allows exercising both paths in controlled
/// environments (e.g., CI). Without an override, the device is considered
/// present whenever the host reports at least one core.
pub fn is_available() -> bool {
    if env::var_os("MEMBENCH_NO_DEVICE").is_some() {
        return false;
    }
    if env::var_os("MEMBENCH_FORCE_DEVICE").is_some() {
        return true;
    }

    host_cores() > 0
}

/// Probed host core count backing the virtual device.
pub fn host_cores() -> usize {
    *HOST_CORES
}
