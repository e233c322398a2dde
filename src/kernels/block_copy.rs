//! Parallel block-copy kernel.
//!
//! The index range [0, N) is divided into ceil(N/B) contiguous blocks and
//! each block is handed to one independent, stateless work item on the
//! device pool. Work items own disjoint slices, never communicate, and may
//! run in any order. The tail block may be partial; slicing bounds it to N,
//! so no work item ever touches an index past the end of either buffer.

use rayon::prelude::*;

use crate::device::logging::log;
use crate::device::memory::DeviceBuffer;
use crate::device::runtime::Device;

/// Default elements per work item. Larger blocks reduce launch overhead at
/// the cost of per-item memory pressure.
pub const BLOCK_SIZE: usize = 1024;

/// Number of work items needed to cover `n` elements with blocks of `block`.
pub fn grid_dim(n: usize, block: usize) -> usize {
    assert!(block > 0, "block_copy: block size must be nonzero");
    n.div_ceil(block)
}

/// Launches the block-copy grid over the device pool.
///
/// Shape preconditions are a contract of the benchmark setup itself, so
/// violations are assertions rather than recoverable errors. After the
/// launch and a subsequent `Device::synchronize`, `dst[i] == src[i]` holds
/// for every index.
pub fn launch_block_copy(
    dev: &Device,
    src: &DeviceBuffer,
    dst: &mut DeviceBuffer,
    block_size: usize,
) {
    assert_eq!(
        src.len(),
        dst.len(),
        "block_copy: source and destination element counts differ"
    );
    assert_eq!(src.device(), dev.index(), "block_copy: source not on this device");
    assert_eq!(dst.device(), dev.index(), "block_copy: destination not on this device");

    let n = src.len();
    let grid = grid_dim(n, block_size);
    log(&format!(
        "launch block_copy: n={} block={} grid={}",
        n, block_size, grid
    ));

    let src_slice = src.as_slice();
    let dst_slice = dst.as_mut_slice();

    dev.pool().install(|| {
        dst_slice
            .par_chunks_mut(block_size)
            .zip(src_slice.par_chunks(block_size))
            .for_each(|(dst_block, src_block)| {
                dst_block.copy_from_slice(src_block);
            });
    });
}
