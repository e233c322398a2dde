pub mod error;
pub mod event;
pub mod logging;
pub mod memory;
pub mod runtime;

pub use error::DeviceError;
pub use event::DeviceEvent;
pub use memory::{DeviceBuffer, ELEM_BYTES};
pub use runtime::Device;
