use crate::device::memory::ELEM_BYTES;

use super::error::BenchError;

/// Total bytes moved by one copy of `elems` elements: one read plus one
/// write per element.
pub fn transfer_bytes(elems: usize) -> usize {
    2 * elems * ELEM_BYTES
}

/// Achieved bandwidth in GB/s for `total_bytes` moved in `elapsed_ms`.
///
/// Zero or non-finite elapsed time is surfaced as an inconclusive
/// measurement instead of silently producing infinity or NaN.
pub fn bandwidth_gb_s(total_bytes: usize, elapsed_ms: f64) -> Result<f64, BenchError> {
    if !(elapsed_ms.is_finite() && elapsed_ms > 0.0) {
        return Err(BenchError::InconclusiveTiming { elapsed_ms });
    }

    Ok(total_bytes as f64 / (elapsed_ms * 1e-3) / 1e9)
}
