use crate::device::memory::DeviceBuffer;

/// Default relative tolerance, matching the usual allclose contract.
pub const RTOL: f32 = 1e-5;
/// Default absolute tolerance.
pub const ATOL: f32 = 1e-8;

/// Elementwise `|a - b| <= atol + rtol * |b|` over two equal-shaped slices.
pub fn allclose(a: &[f32], b: &[f32], rtol: f32, atol: f32) -> bool {
    assert_eq!(a.len(), b.len(), "allclose: slice lengths differ");

    a.iter()
        .zip(b.iter())
        .all(|(&x, &y)| (x - y).abs() <= atol + rtol * y.abs())
}

/// Verifies one strategy's output buffer against the source.
///
/// An incorrect benchmark result is worse than no result, so divergence is
/// a process-terminating assertion naming the strategy that failed.
pub fn assert_allclose(strategy: &str, src: &DeviceBuffer, dst: &DeviceBuffer) {
    assert_eq!(
        src.len(),
        dst.len(),
        "{} verification: buffer shapes differ",
        strategy
    );

    for (i, (&want, &got)) in src.as_slice().iter().zip(dst.as_slice().iter()).enumerate() {
        assert!(
            (got - want).abs() <= ATOL + RTOL * want.abs(),
            "{} memcpy failed: dst[{}] = {}, expected {}",
            strategy,
            i,
            got,
            want
        );
    }
}
