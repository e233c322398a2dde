use membench::bench::{bandwidth_gb_s, transfer_bytes, BenchError};

#[test]
fn counts_one_read_and_one_write_per_element() {
    assert_eq!(transfer_bytes(1024 * 1024), 8_388_608);
    assert_eq!(transfer_bytes(1), 8);
    assert_eq!(transfer_bytes(0), 0);
}

#[test]
fn one_megabyte_buffer_in_one_ms() {
    // 1,048,576 elements x 4 bytes x 2 moved in 1 ms is 8.388608 GB/s.
    let gb_s = bandwidth_gb_s(8_388_608, 1.0).expect("conclusive");
    assert!((gb_s - 8.388608).abs() < 1e-12);
}

#[test]
fn scales_linearly_with_time() {
    let fast = bandwidth_gb_s(8_388_608, 0.5).expect("conclusive");
    let slow = bandwidth_gb_s(8_388_608, 2.0).expect("conclusive");
    assert!((fast / slow - 4.0).abs() < 1e-9);
}

#[test]
fn zero_elapsed_time_is_inconclusive() {
    match bandwidth_gb_s(8_388_608, 0.0) {
        Err(BenchError::InconclusiveTiming { elapsed_ms }) => assert_eq!(elapsed_ms, 0.0),
        Ok(gb_s) => panic!("expected inconclusive measurement, got {} GB/s", gb_s),
    }
}

#[test]
fn non_finite_elapsed_time_is_inconclusive() {
    assert!(bandwidth_gb_s(8_388_608, f64::NAN).is_err());
    assert!(bandwidth_gb_s(8_388_608, f64::INFINITY).is_err());
    assert!(bandwidth_gb_s(8_388_608, -1.0).is_err());
}

#[test]
fn inconclusive_error_names_the_condition() {
    let err = bandwidth_gb_s(1, 0.0).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("Inconclusive measurement"), "got: {}", msg);
}
