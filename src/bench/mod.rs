pub mod bandwidth;
pub mod error;
pub mod timing;
pub mod verify;

pub use bandwidth::{bandwidth_gb_s, transfer_bytes};
pub use error::BenchError;
pub use timing::time_device_op;
pub use verify::{allclose, assert_allclose};
