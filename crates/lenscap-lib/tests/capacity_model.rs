mod common;

use common::{assert_close, inputs};
use lenscap_lib::{
    compute_capacity, CapacityInputs, Error, ProductMix, JOBS_PER_CHAMBER, LENSES_PER_CHAMBER,
};

#[test]
fn default_scenario_matches_hand_calculation() {
    let result = compute_capacity(&CapacityInputs::default()).expect("defaults evaluate");

    // 0.5024×1.6 + 0.2147×1.2 + 0.0425×1.6 + 0.2404×1.1
    assert_close(result.avg_cycle_time_hours, 1.39392, 1e-9);
    // (16 × 0.85 / 1.39392) × 2
    assert_close(result.total_chambers_per_day, 19.513315, 1e-5);
    assert_close(result.lenses_per_day, 1092.7456, 1e-3);
    assert_close(result.jobs_per_day, 546.3728, 1e-3);
}

#[test]
fn repeated_evaluation_is_bit_identical() {
    let first = compute_capacity(&CapacityInputs::default()).unwrap();
    let second = compute_capacity(&CapacityInputs::default()).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first.lenses_per_day.to_bits(),
        second.lenses_per_day.to_bits()
    );
}

#[test]
fn chambers_increase_strictly_with_hours() {
    let mut previous = 0.0;
    for hours in 8..=24 {
        let result = compute_capacity(&inputs(2, f64::from(hours), 0.85)).unwrap();
        assert!(
            result.total_chambers_per_day > previous,
            "hours {hours} did not increase output"
        );
        previous = result.total_chambers_per_day;
    }
}

#[test]
fn chambers_increase_strictly_with_oee() {
    let mut previous = 0.0;
    for step in 0..=8 {
        let oee = 0.6 + f64::from(step) * 0.05;
        let result = compute_capacity(&inputs(2, 16.0, oee.min(1.0))).unwrap();
        assert!(result.total_chambers_per_day > previous, "oee {oee}");
        previous = result.total_chambers_per_day;
    }
}

#[test]
fn chambers_scale_linearly_with_machine_count() {
    let single = compute_capacity(&inputs(1, 16.0, 0.85)).unwrap();
    for machines in 1..=5u32 {
        let many = compute_capacity(&inputs(machines, 16.0, 0.85)).unwrap();
        assert_close(
            many.total_chambers_per_day,
            f64::from(machines) * single.total_chambers_per_day,
            1e-9,
        );
        assert_eq!(many.avg_cycle_time_hours, single.avg_cycle_time_hours);
    }
}

#[test]
fn unit_conversions_are_exact() {
    for (machines, hours, oee) in [(1, 8.0, 0.6), (2, 16.0, 0.85), (5, 24.0, 1.0), (3, 11.5, 0.72)] {
        let result = compute_capacity(&inputs(machines, hours, oee)).unwrap();
        assert_eq!(
            result.lenses_per_day,
            result.total_chambers_per_day * LENSES_PER_CHAMBER
        );
        assert_eq!(
            result.jobs_per_day,
            result.total_chambers_per_day * JOBS_PER_CHAMBER
        );
    }
}

#[test]
fn all_zero_mix_is_invalid_input() {
    let zero = CapacityInputs {
        mix: ProductMix::from_shares([0.0, 0.0, 0.0, 0.0]),
        ..CapacityInputs::default()
    };
    let err = compute_capacity(&zero).expect_err("zero mix must not divide by zero");
    assert!(matches!(err, Error::InvalidInput { .. }));
    assert!(err.to_string().contains("average cycle time"));
}

#[test]
fn mix_is_used_without_normalization() {
    let half = CapacityInputs {
        mix: ProductMix::from_pairs(&[("Sapphire", 50.0)]).unwrap(),
        ..CapacityInputs::default()
    };
    let full = CapacityInputs {
        mix: ProductMix::from_pairs(&[("Sapphire", 100.0)]).unwrap(),
        ..CapacityInputs::default()
    };
    let half_result = compute_capacity(&half).unwrap();
    let full_result = compute_capacity(&full).unwrap();

    assert_close(half_result.avg_cycle_time_hours, 0.8, 1e-12);
    assert_close(full_result.avg_cycle_time_hours, 1.6, 1e-12);
    assert_close(
        half_result.total_chambers_per_day,
        2.0 * full_result.total_chambers_per_day,
        1e-9,
    );
}

#[test]
fn shifting_share_moves_average_toward_recipe_cycle_time() {
    let base = compute_capacity(&CapacityInputs::default()).unwrap();
    let mut mix = ProductMix::default();
    mix.super_hidrofobico += 10.0;
    let shifted = compute_capacity(&CapacityInputs {
        mix,
        ..CapacityInputs::default()
    })
    .unwrap();
    // Super Hidrofobico is the fastest recipe (1.1 h), but an unnormalized
    // mix adds weight rather than trading it, so the average grows by 0.1 × 1.1.
    assert_close(
        shifted.avg_cycle_time_hours - base.avg_cycle_time_hours,
        0.11,
        1e-12,
    );

    let normalized = compute_capacity(&CapacityInputs {
        mix: mix.normalized().unwrap(),
        ..CapacityInputs::default()
    })
    .unwrap();
    let base_normalized = base.avg_cycle_time_hours;
    assert!(normalized.avg_cycle_time_hours < base_normalized);
}

#[test]
fn negative_share_is_rejected() {
    let negative = CapacityInputs {
        mix: ProductMix::from_shares([-5.0, 50.0, 30.0, 25.0]),
        ..CapacityInputs::default()
    };
    assert!(matches!(
        compute_capacity(&negative),
        Err(Error::InvalidInput { .. })
    ));
}
