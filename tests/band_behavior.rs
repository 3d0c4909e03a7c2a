//! Behavior-driven tests for band classification
//!
//! These tests verify HOW a scalar reading maps onto the named bands of
//! its indicator, including readings far outside the nominal domain.

use macropulse_analytics::BandSet;
use macropulse_core::Indicator;

/// Count how many bands of the effective set contain `value`, using the
/// same half-open-except-last convention the classifier matches with.
fn containing_bands(set: &BandSet, value: f64) -> usize {
    let bands = set.bands();
    bands
        .iter()
        .enumerate()
        .filter(|(index, band)| {
            if *index == bands.len() - 1 {
                band.low <= value && value <= band.high
            } else {
                band.low <= value && value < band.high
            }
        })
        .count()
}

// =============================================================================
// Classification: total coverage
// =============================================================================

#[test]
fn when_any_reading_arrives_exactly_one_band_matches() {
    // Given: Every indicator's nominal band set and a sweep of readings
    // from far below to far above each nominal domain
    for indicator in Indicator::ALL {
        let nominal = BandSet::nominal_for(indicator);
        let (low, high) = nominal.span();
        let sweep = [
            -50.0,
            low - 0.001,
            low,
            (low + high) / 2.0,
            high - 0.001,
            high,
            high + 0.001,
            50.0,
            1475.25,
        ];

        for value in sweep {
            // When: The reading is classified
            let classification = nominal.classify(value).expect("finite reading classifies");

            // Then: The matched band contains it, and it is the only one
            assert!(
                classification.band.low <= value && value <= classification.band.high,
                "{indicator}: band '{}' must contain {value}",
                classification.band.name
            );
            assert_eq!(
                containing_bands(&classification.bands, value),
                1,
                "{indicator}: exactly one band must contain {value}"
            );
        }
    }
}

#[test]
fn when_cpi_swings_to_extremes_it_still_lands_in_the_outer_bands() {
    let nominal = BandSet::nominal_for(Indicator::Cpi);

    let crash = nominal.classify(-50.0).expect("classified");
    assert_eq!(crash.band.name, "deflation");

    let spike = nominal.classify(50.0).expect("classified");
    assert_eq!(spike.band.name, "very_high");
}

// =============================================================================
// Classification: widening is per-call
// =============================================================================

#[test]
fn when_a_reading_is_far_below_nominal_the_first_band_stretches_down() {
    let nominal = BandSet::nominal_for(Indicator::Cpi);
    let classification = nominal.classify(-7.3).expect("classified");

    // floor(-7.3) - 1 leaves one whole unit of headroom below the reading
    assert_eq!(classification.bands.span().0, -9.0);
    assert_eq!(classification.band.name, "deflation");
}

#[test]
fn when_the_next_reading_is_normal_the_bands_are_back_to_nominal() {
    // Given: A set that was widened by an extreme reading
    let nominal = BandSet::nominal_for(Indicator::PolicyRate);
    let widened = nominal.classify(12.0).expect("classified");
    assert_eq!(widened.bands.span().1, 13.0);

    // When: A normal reading is classified next
    let fresh = nominal.classify(2.5).expect("classified");

    // Then: The widening was not remembered
    assert_eq!(fresh.bands.span(), nominal.span());
}

#[test]
fn when_bands_are_widened_the_set_renders_without_gaps() {
    let nominal = BandSet::nominal_for(Indicator::ExchangeRate);
    let classification = nominal.classify(1750.0).expect("classified");

    let bands = classification.bands.bands();
    for pair in bands.windows(2) {
        assert_eq!(
            pair[1].low, pair[0].high,
            "'{}' must start where '{}' ends",
            pair[1].name, pair[0].name
        );
    }
}
