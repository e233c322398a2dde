pub mod block_copy;

pub use block_copy::{grid_dim, launch_block_copy, BLOCK_SIZE};
