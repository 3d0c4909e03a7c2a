//! Behavior-driven tests for chart axis scaling
//!
//! These tests verify HOW a set of chart values becomes a padded, rounded
//! axis with tick labels, focusing on rendering-visible outcomes.

use macropulse_analytics::{build_axis, format_tick};

// =============================================================================
// Axis: coverage and floor
// =============================================================================

#[test]
fn when_values_are_charted_the_axis_covers_every_one_of_them() {
    // Given: A month of exchange-rate averages
    let values = [1296.0, 1304.25, 1311.5, 1289.75, 1320.1];

    // When: An axis is built for them
    let axis = build_axis(&values, 4).expect("axis");

    // Then: Every value sits inside the padded range, and the range never
    // dips below zero for these rate/index domains
    for value in values {
        assert!(axis.min <= value, "min {} must cover {}", axis.min, value);
        assert!(axis.max >= value, "max {} must cover {}", axis.max, value);
    }
    assert!(axis.min >= 0.0);
}

#[test]
fn when_values_hug_zero_the_floor_keeps_the_axis_non_negative() {
    let axis = build_axis(&[0.25, 0.5], 4).expect("axis");
    assert_eq!(axis.min, 0.0);
}

// =============================================================================
// Axis: determinism and degenerate input
// =============================================================================

#[test]
fn when_the_same_input_is_scaled_twice_the_axes_are_identical() {
    let first = build_axis(&[100.0], 4).expect("axis");
    let second = build_axis(&[100.0], 4).expect("axis");
    assert_eq!(first, second);
}

#[test]
fn when_there_is_nothing_to_chart_no_axis_is_built() {
    assert!(build_axis(&[], 4).is_none());
    assert!(build_axis(&[f64::NAN], 4).is_none());
}

#[test]
fn when_every_value_is_equal_the_axis_still_has_width() {
    // Given: A flat series
    let axis = build_axis(&[3.5, 3.5, 3.5], 4).expect("axis");

    // Then: A synthetic symmetric pad keeps min < max so sections exist
    assert!(axis.min < axis.max);
    assert!(axis.min <= 3.5 && 3.5 <= axis.max);
    assert!(axis.step > 0.0);
}

// =============================================================================
// Axis: sections and labels
// =============================================================================

#[test]
fn when_the_requested_section_count_is_extreme_it_is_clamped() {
    let too_few = build_axis(&[1.0, 10.0], 1).expect("axis");
    assert_eq!(too_few.sections, 2);

    let too_many = build_axis(&[1.0, 10.0], 99).expect("axis");
    assert_eq!(too_many.sections, 6);
}

#[test]
fn when_labels_are_generated_there_is_one_per_boundary_top_down() {
    let axis = build_axis(&[1250.0, 1350.0], 4).expect("axis");

    assert_eq!(axis.tick_labels.len(), 5);
    assert_eq!(axis.tick_labels[0], format_tick(axis.max));
    assert_eq!(
        *axis.tick_labels.last().expect("label"),
        format_tick(axis.max - 4.0 * axis.step)
    );
}

#[test]
fn when_labels_are_rendered_they_carry_decimals_and_separators() {
    assert_eq!(format_tick(1310.456), "1,310.46");
    assert_eq!(format_tick(85.0), "85.00");
    assert_eq!(format_tick(1234567.0), "1,234,567.00");
}
