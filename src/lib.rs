pub mod bench;
pub mod config;
pub mod device;
pub mod hal;
pub mod kernels;

pub use crate::bench::{allclose, assert_allclose, bandwidth_gb_s, time_device_op, transfer_bytes, BenchError};
pub use crate::config::BenchConfig;
pub use crate::device::{Device, DeviceBuffer, DeviceError, DeviceEvent, ELEM_BYTES};
pub use crate::kernels::{grid_dim, launch_block_copy, BLOCK_SIZE};
