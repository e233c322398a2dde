use membench::device::Device;
use membench::kernels::{grid_dim, launch_block_copy, BLOCK_SIZE};

fn copy_case(n: usize, block: usize) {
    let dev = Device::open(0).expect("device");
    let src = dev.alloc_randn(n).expect("src");
    let mut dst = dev.alloc(n).expect("dst");

    launch_block_copy(&dev, &src, &mut dst, block);
    dev.synchronize();

    for (i, (&a, &b)) in src.as_slice().iter().zip(dst.as_slice().iter()).enumerate() {
        assert_eq!(a.to_bits(), b.to_bits(), "mismatch at index {}", i);
    }
}

#[test]
fn copies_exactly_with_default_block() {
    copy_case(1024 * 1024, BLOCK_SIZE);
}

#[test]
fn copies_partial_tail_block() {
    // 1,000,003 is not divisible by 1024, so the final block is partial.
    assert_ne!(1_000_003 % 1024, 0);
    copy_case(1_000_003, 1024);
}

#[test]
fn copies_degenerate_shapes() {
    copy_case(1, 1024); // single element, block larger than buffer
    copy_case(947, 947); // one exact block
    copy_case(1000, 1); // one element per work item
}

#[test]
fn grid_covers_index_range() {
    assert_eq!(grid_dim(1024 * 1024, 1024), 1024);
    assert_eq!(grid_dim(1_000_003, 1024), 977);
    assert_eq!(grid_dim(1, 1024), 1);
    assert_eq!(grid_dim(1024, 1024), 1);
    assert_eq!(grid_dim(1025, 1024), 2);
}

#[test]
fn relaunch_on_fresh_destination_is_identical() {
    // No hidden state may survive a launch: a second run against a fresh
    // destination must reproduce the source exactly.
    let dev = Device::open(0).expect("device");
    let src = dev.alloc_randn(4096 + 13).expect("src");

    for _ in 0..2 {
        let mut dst = dev.alloc(src.len()).expect("dst");
        launch_block_copy(&dev, &src, &mut dst, BLOCK_SIZE);
        dev.synchronize();
        assert_eq!(src.as_slice(), dst.as_slice());
    }
}

#[test]
#[should_panic(expected = "element counts differ")]
fn rejects_mismatched_shapes() {
    let dev = Device::open(0).expect("device");
    let src = dev.alloc_randn(1024).expect("src");
    let mut dst = dev.alloc(512).expect("dst");
    launch_block_copy(&dev, &src, &mut dst, BLOCK_SIZE);
}

#[test]
#[should_panic(expected = "block size must be nonzero")]
fn rejects_zero_block_size() {
    let dev = Device::open(0).expect("device");
    let src = dev.alloc_randn(1024).expect("src");
    let mut dst = dev.alloc(1024).expect("dst");
    launch_block_copy(&dev, &src, &mut dst, 0);
}
