use std::fmt;

#[derive(Debug)]
pub enum DeviceError {
    NoDevice,
    BadDeviceIndex(usize),
    PoolBuildFailed,
    AllocationFailed,
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceError::NoDevice =>
                write!(f, "No virtual device available on this host"),
            DeviceError::BadDeviceIndex(idx) =>
                write!(f, "Device index {} out of range", idx),
            DeviceError::PoolBuildFailed =>
                write!(f, "Failed to build device worker pool"),
            DeviceError::AllocationFailed =>
                write!(f, "Device memory allocation failed"),
        }
    }
}

impl std::error::Error for DeviceError {}
