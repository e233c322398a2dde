use std::f32::consts::TAU;

use rand::random;

use super::error::DeviceError;
use super::logging::log;
use super::runtime::Device;

/// Element width of every buffer in the benchmark (f32).
pub const ELEM_BYTES: usize = 4;

/// Contiguous fixed-length f32 region resident on one virtual device.
///
/// The source buffer is initialized once and never mutated afterwards; each
/// destination buffer is fully overwritten by exactly one copy strategy.
pub struct DeviceBuffer {
    device: usize,
    data: Vec<f32>,
}

impl DeviceBuffer {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn size_bytes(&self) -> usize {
        self.data.len() * ELEM_BYTES
    }

    /// Index of the device this buffer lives on.
    pub fn device(&self) -> usize {
        self.device
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }
}

impl Device {
    /// Allocates an uninitialized (zero-filled) destination buffer.
    pub fn alloc(&self, len: usize) -> Result<DeviceBuffer, DeviceError> {
        if len == 0 {
            return Err(DeviceError::AllocationFailed);
        }

        let mut data = Vec::new();
        if data.try_reserve_exact(len).is_err() {
            return Err(DeviceError::AllocationFailed);
        }
        data.resize(len, 0.0);

        log(&format!("alloc {} elems on device {}", len, self.index()));

        Ok(DeviceBuffer { device: self.index(), data })
    }

    /// Allocates a buffer filled with standard-normal samples (Box-Muller).
    pub fn alloc_randn(&self, len: usize) -> Result<DeviceBuffer, DeviceError> {
        let mut buf = self.alloc(len)?;

        let data = buf.as_mut_slice();
        let mut i = 0;
        while i < len {
            let u1 = random::<f32>().max(1e-7);
            let u2 = random::<f32>();
            let radius = (-2.0 * u1.ln()).sqrt();
            let theta = TAU * u2;
            data[i] = radius * theta.cos();
            if i + 1 < len {
                data[i + 1] = radius * theta.sin();
            }
            i += 2;
        }

        Ok(buf)
    }

    /// Vendor device-to-device copy: delegates the whole transfer to the
    /// platform bulk-copy primitive, treated as a correctness and
    /// performance oracle.
    ///
    /// Shape preconditions are a contract of the benchmark setup itself, so
    /// violations are assertions rather than recoverable errors.
    pub fn copy_dtod(&self, src: &DeviceBuffer, dst: &mut DeviceBuffer) {
        assert_eq!(
            src.len(),
            dst.len(),
            "copy_dtod: source and destination element counts differ"
        );
        assert_eq!(src.device(), self.index(), "copy_dtod: source not on this device");
        assert_eq!(dst.device(), self.index(), "copy_dtod: destination not on this device");

        dst.as_mut_slice().copy_from_slice(src.as_slice());
    }
}
