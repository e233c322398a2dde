use std::process;

use membench::bench::{assert_allclose, bandwidth_gb_s, time_device_op, transfer_bytes};
use membench::config::BenchConfig;
use membench::device::{Device, DeviceBuffer, DeviceError};
use membench::hal;
use membench::kernels::launch_block_copy;

fn main() {
    println!("{}", hal::detect_device());
    println!("{}", hal::device_count());

    let cfg = BenchConfig::from_env();

    let dev = match Device::open(0) {
        Ok(dev) => dev,
        Err(e) => {
            eprintln!("[BENCH] {}", e);
            process::exit(1);
        }
    };

    let (src, mut dst_parallel, mut dst_vendor) = match alloc_buffers(&dev, cfg.elems) {
        Ok(bufs) => bufs,
        Err(e) => {
            eprintln!("[BENCH] {}", e);
            process::exit(1);
        }
    };

    // Absorb one-time setup costs (pool spin-up, first-touch faults) before
    // any timed run. Only the vendor copy is warmed up, as in the original
    // benchmark; the parallel copy is deliberately measured cold.
    dev.copy_dtod(&src, &mut dst_vendor);
    dev.synchronize();
    println!("Warm-up vendor memcpy complete.");

    let vendor_ms = time_device_op(&dev, || dev.copy_dtod(&src, &mut dst_vendor));
    println!("Vendor memcpy operation completed in {:.3} ms", vendor_ms);

    let parallel_ms = time_device_op(&dev, || {
        launch_block_copy(&dev, &src, &mut dst_parallel, cfg.block_size)
    });
    println!("Parallel memcpy operation completed in {:.3} ms", parallel_ms);

    let bytes = transfer_bytes(cfg.elems);

    match bandwidth_gb_s(bytes, parallel_ms) {
        Ok(gb_s) => println!("Parallel Memory Bandwidth: {:.3} GB/s", gb_s),
        Err(e) => {
            eprintln!("[BENCH] {}", e);
            process::exit(1);
        }
    }

    match bandwidth_gb_s(bytes, vendor_ms) {
        Ok(gb_s) => println!("Vendor Memory Bandwidth: {:.3} GB/s", gb_s),
        Err(e) => {
            eprintln!("[BENCH] {}", e);
            process::exit(1);
        }
    }

    assert_allclose("Parallel", &src, &dst_parallel);
    assert_allclose("Vendor", &src, &dst_vendor);
}

fn alloc_buffers(
    dev: &Device,
    elems: usize,
) -> Result<(DeviceBuffer, DeviceBuffer, DeviceBuffer), DeviceError> {
    let src = dev.alloc_randn(elems)?;
    let dst_parallel = dev.alloc(elems)?;
    let dst_vendor = dev.alloc(elems)?;
    Ok((src, dst_parallel, dst_vendor))
}
