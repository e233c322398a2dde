use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::config;
use crate::hal;

use super::error::DeviceError;
use super::logging::log;

/// Explicit handle to one virtual device.
///
/// Every operation that touches device memory or launches device work takes
/// this handle; there is no ambient "current device" state. The handle owns
/// a dedicated worker pool, built per handle rather than shared through
/// rayon's global pool.
pub struct Device {
    index: usize,
    threads: usize,
    pool: ThreadPool,
}

impl Device {
    /// Opens the device with the given index.
    ///
    /// Fails when detection reports no usable device or the index is out of
    /// range. Pool width comes from `MEMBENCH_THREADS`, defaulting to all
    /// host cores.
    pub fn open(index: usize) -> Result<Self, DeviceError> {
        if !hal::detect_device() {
            return Err(DeviceError::NoDevice);
        }
        if index >= hal::device_count() {
            return Err(DeviceError::BadDeviceIndex(index));
        }

        let threads = config::thread_count();
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|_| DeviceError::PoolBuildFailed)?;

        log(&format!("device {} opened with {} workers", index, threads));

        Ok(Self { index, threads, pool })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Worker pool that carries launched device work.
    pub fn pool(&self) -> &ThreadPool {
        &self.pool
    }

    /// Blocks the host until all work issued to this device has retired.
    ///
    /// Implemented as a full barrier over the worker pool: the broadcast
    /// only returns once every worker has drained its queue and run the
    /// no-op job. This is the only suspension point in the system.
    pub fn synchronize(&self) {
        self.pool.broadcast(|_| {});
        log(&format!("device {} synchronized", self.index));
    }
}
