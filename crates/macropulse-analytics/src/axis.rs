//! Chart axis scaling.
//!
//! Derives a padded, rounded `[min, max]` range with tick labels from the
//! values a chart is about to draw. The scale is recomputed on every
//! request and never persisted.

use serde::Serialize;

/// Padded axis range with precomputed tick labels.
///
/// `tick_labels` holds `sections + 1` labels ordered from the top of the
/// axis down, each formatted with two decimals and thousands separators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisScale {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub sections: u32,
    pub tick_labels: Vec<String>,
}

const MIN_SECTIONS: u32 = 2;
const MAX_SECTIONS: u32 = 6;

/// Build an axis scale over `values`, split into `desired_sections` parts.
///
/// Returns `None` when no finite value is present. The requested section
/// count is clamped to `2..=6`. The minimum is floored at zero: the rate
/// and index series charted here never legitimately go below it, so the
/// floor trades generality for tighter default framing. A reuse for a
/// series that can go negative must lift this policy first.
pub fn build_axis(values: &[f64], desired_sections: u32) -> Option<AxisScale> {
    let mut finite = values.iter().copied().filter(|value| value.is_finite());

    let first = finite.next()?;
    let (mut low, mut high) =
        finite.fold((first, first), |(low, high), value| (low.min(value), high.max(value)));

    if low == high {
        let pad = (low.abs() * 0.01).max(1.0);
        low -= pad;
        high += pad;
    } else {
        let pad = ((high - low) * 0.1).max(1.0);
        low -= pad;
        high += pad;
    }
    low = low.max(0.0);

    let min = round2(low);
    let max = round2(high);
    let sections = desired_sections.clamp(MIN_SECTIONS, MAX_SECTIONS);
    let step = round2((max - min) / f64::from(sections));

    let tick_labels = (0..=sections)
        .map(|index| format_tick(max - step * f64::from(index)))
        .collect();

    Some(AxisScale {
        min,
        max,
        step,
        sections,
        tick_labels,
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format an axis value with two decimals and comma thousands separators.
pub fn format_tick(value: f64) -> String {
    let raw = format!("{value:.2}");
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (index, ch) in int_part.chars().enumerate() {
        if index > 0 && (int_part.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}.{frac_part}")
}
