//! Period aggregation of raw observations.
//!
//! Observations arrive irregularly sampled and in no guaranteed order; the
//! bucketer folds them into per-period arithmetic means, grouped by scope.
//! Accumulation is sum-and-count only, so the result is identical for any
//! permutation of the same input multiset.

use std::collections::BTreeMap;

use serde::Serialize;

use macropulse_core::{numeric, CurrencyCode, Observation, PeriodKey};

/// Averages per period, grouped by observation scope.
///
/// `BTreeMap` keys keep both groupings deterministically ordered: scopes
/// lexically, periods chronologically.
pub type ScopedAverages = BTreeMap<Option<CurrencyCode>, BTreeMap<PeriodKey, f64>>;

/// One period's average joined with its change from the preceding period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodChange {
    pub period: PeriodKey,
    pub average: f64,
    /// `None` for the first period in the series.
    pub change: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default)]
struct Accumulator {
    sum: f64,
    count: u32,
}

impl Accumulator {
    fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    // An accumulator only exists once at least one valid value landed in it.
    fn average(self) -> f64 {
        self.sum / f64::from(self.count)
    }
}

/// Group observations into periods and compute the mean per period and scope.
///
/// The period of each observation is derived by `key_fn`, keeping this fold
/// agnostic to calendar semantics. Non-finite values are discarded silently;
/// a period that collected no valid value for a scope is absent from that
/// scope's result rather than reported as zero.
pub fn aggregate<F>(observations: &[Observation], key_fn: F) -> ScopedAverages
where
    F: Fn(&Observation) -> PeriodKey,
{
    let mut buckets: BTreeMap<Option<CurrencyCode>, BTreeMap<PeriodKey, Accumulator>> =
        BTreeMap::new();

    for observation in observations {
        let Some(value) = numeric::finite(observation.value) else {
            continue;
        };

        buckets
            .entry(observation.scope.clone())
            .or_default()
            .entry(key_fn(observation))
            .or_default()
            .add(value);
    }

    buckets
        .into_iter()
        .map(|(scope, periods)| {
            let averages = periods
                .into_iter()
                .map(|(period, accumulator)| (period, accumulator.average()))
                .collect();
            (scope, averages)
        })
        .collect()
}

/// Aggregate into calendar-month buckets.
pub fn monthly_averages(observations: &[Observation]) -> ScopedAverages {
    aggregate(observations, |observation| observation.date.month_key())
}

/// Aggregate into calendar-quarter buckets.
pub fn quarterly_averages(observations: &[Observation]) -> ScopedAverages {
    aggregate(observations, |observation| observation.date.quarter_key())
}

/// Fold an ordered series of period averages into period-over-period changes.
pub fn with_changes(series: &BTreeMap<PeriodKey, f64>) -> Vec<PeriodChange> {
    let mut changes = Vec::with_capacity(series.len());
    let mut previous: Option<f64> = None;

    for (&period, &average) in series {
        changes.push(PeriodChange {
            period,
            average,
            change: previous.map(|prior| average - prior),
        });
        previous = Some(average);
    }

    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use macropulse_core::{Indicator, ObservationDate};

    fn observation(date: &str, value: f64) -> Observation {
        Observation::new(
            ObservationDate::parse(date).expect("date"),
            Indicator::Cpi,
            None,
            value,
        )
        .expect("observation")
    }

    fn scoped(date: &str, currency: &str, value: f64) -> Observation {
        Observation::new(
            ObservationDate::parse(date).expect("date"),
            Indicator::ExchangeRate,
            Some(CurrencyCode::parse(currency).expect("currency")),
            value,
        )
        .expect("observation")
    }

    #[test]
    fn averages_within_month_buckets() {
        let observations = vec![
            observation("2024-01-05", 2.0),
            observation("2024-01-20", 4.0),
            observation("2024-02-10", 5.0),
        ];

        let result = monthly_averages(&observations);
        let series = result.get(&None).expect("unscoped series");

        assert_eq!(
            series.get(&PeriodKey::month(2024, 1).expect("key")),
            Some(&3.0)
        );
        assert_eq!(
            series.get(&PeriodKey::month(2024, 2).expect("key")),
            Some(&5.0)
        );
    }

    #[test]
    fn result_is_order_independent() {
        let mut observations = vec![
            scoped("2024-01-05", "USD", 1300.0),
            scoped("2024-01-15", "USD", 1310.0),
            scoped("2024-02-01", "USD", 1320.0),
            scoped("2024-01-08", "JPY", 9.1),
        ];

        let forward = monthly_averages(&observations);
        observations.reverse();
        let backward = monthly_averages(&observations);

        assert_eq!(forward, backward);
    }

    #[test]
    fn discards_non_finite_values_silently() {
        let mut poisoned = observation("2024-01-05", 2.0);
        poisoned.value = f64::NAN;

        let observations = vec![poisoned, observation("2024-01-20", 4.0)];
        let result = monthly_averages(&observations);
        let series = result.get(&None).expect("unscoped series");

        assert_eq!(
            series.get(&PeriodKey::month(2024, 1).expect("key")),
            Some(&4.0)
        );
    }

    #[test]
    fn empty_buckets_never_appear() {
        let mut poisoned = observation("2024-03-05", 1.0);
        poisoned.value = f64::INFINITY;

        let result = monthly_averages(&[poisoned]);
        assert!(result.is_empty());
    }

    #[test]
    fn changes_fold_starts_with_none() {
        let mut series = BTreeMap::new();
        series.insert(PeriodKey::quarter(2024, 1).expect("key"), 10.0);
        series.insert(PeriodKey::quarter(2024, 2).expect("key"), 12.5);
        series.insert(PeriodKey::quarter(2024, 3).expect("key"), 11.0);

        let changes = with_changes(&series);

        assert_eq!(changes[0].change, None);
        assert_eq!(changes[1].change, Some(2.5));
        assert_eq!(changes[2].change, Some(-1.5));
    }
}
