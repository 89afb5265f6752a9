//! Shared helpers for capacity model integration tests.

use lenscap_lib::{CapacityInputs, ProductMix};

/// Default mix with the point parameters replaced.
#[allow(dead_code)]
pub fn inputs(machine_count: u32, hours_per_day: f64, oee: f64) -> CapacityInputs {
    CapacityInputs {
        machine_count,
        hours_per_day,
        oee,
        mix: ProductMix::default(),
    }
}

/// Relative comparison for derived floating-point figures.
#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected approx {expected}, got {actual}"
    );
}
