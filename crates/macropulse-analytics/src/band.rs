//! Band classification of scalar readings.
//!
//! Each indicator carries a nominal, ordered set of named bands covering
//! its expected domain. A reading outside that domain does not fail to
//! classify: the outermost band is widened just enough to contain it,
//! freshly on every call, so the effective set always reflects only the
//! most recent reading.

use serde::{Deserialize, Serialize};

use macropulse_core::{numeric, Indicator, ValidationError};

/// One named classification interval, half-open on the right.
///
/// Colors are hex strings consumed by the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub name: String,
    pub low: f64,
    pub high: f64,
    pub fill_color: String,
    pub text_color: String,
}

impl Band {
    pub fn new(
        name: impl Into<String>,
        low: f64,
        high: f64,
        fill_color: impl Into<String>,
        text_color: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();

        if !low.is_finite() {
            return Err(ValidationError::NonFiniteValue { field: "low" });
        }
        if !high.is_finite() {
            return Err(ValidationError::NonFiniteValue { field: "high" });
        }
        if low >= high {
            return Err(ValidationError::BandEmptyInterval { name });
        }

        Ok(Self {
            name,
            low,
            high,
            fill_color: fill_color.into(),
            text_color: text_color.into(),
        })
    }

    fn contains_half_open(&self, value: f64) -> bool {
        self.low <= value && value < self.high
    }
}

/// Ordered, contiguous, non-overlapping sequence of bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Band>", into = "Vec<Band>")]
pub struct BandSet {
    bands: Vec<Band>,
}

impl BandSet {
    /// Validate that `bands` form a gapless ascending cover.
    pub fn new(bands: Vec<Band>) -> Result<Self, ValidationError> {
        if bands.is_empty() {
            return Err(ValidationError::EmptyBandSet);
        }

        for pair in bands.windows(2) {
            if pair[1].low != pair[0].high {
                return Err(ValidationError::BandNotContiguous {
                    name: pair[1].name.clone(),
                });
            }
        }

        Ok(Self { bands })
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Overall `[low, high]` domain covered by the set.
    pub fn span(&self) -> (f64, f64) {
        // A validated set is never empty.
        let low = self.bands.first().map_or(0.0, |band| band.low);
        let high = self.bands.last().map_or(0.0, |band| band.high);
        (low, high)
    }

    /// Classify a reading against this set.
    ///
    /// A reading below the span pulls the first band's low bound down to
    /// `floor(value) - 1`; one above the span pushes the last band's high
    /// bound up to `ceil(value) + 1`. The widened set is part of the
    /// result and is discarded afterwards, never remembered between
    /// calls. Matching is half-open except the final band, which is
    /// closed on the right so the expanded maximum itself still matches.
    ///
    /// Returns `None` only for a non-finite reading.
    pub fn classify(&self, value: f64) -> Option<Classification> {
        let value = numeric::finite(value)?;

        let mut bands = self.clone();
        let (low, high) = bands.span();
        if value < low {
            if let Some(first) = bands.bands.first_mut() {
                first.low = value.floor() - 1.0;
            }
        } else if value > high {
            if let Some(last) = bands.bands.last_mut() {
                last.high = value.ceil() + 1.0;
            }
        }

        let last_index = bands.bands.len() - 1;
        let band = bands
            .bands
            .iter()
            .enumerate()
            .find(|(index, band)| {
                if *index == last_index {
                    band.low <= value && value <= band.high
                } else {
                    band.contains_half_open(value)
                }
            })
            .map(|(_, band)| band.clone())?;

        Some(Classification { value, band, bands })
    }

    /// Nominal CPI bands, year-over-year percent.
    pub fn cpi_nominal() -> Self {
        Self::from_static(&[
            ("deflation", -1.0, 0.0, "#42a5f5", "#0d47a1"),
            ("low", 0.0, 1.0, "#66bb6a", "#1b5e20"),
            ("stable", 1.0, 3.0, "#9ccc65", "#33691e"),
            ("high", 3.0, 5.0, "#ffa726", "#e65100"),
            ("very_high", 5.0, 6.0, "#ef5350", "#b71c1c"),
        ])
    }

    /// Nominal policy-rate bands, annual percent.
    pub fn policy_rate_nominal() -> Self {
        Self::from_static(&[
            ("very_low", 0.0, 1.0, "#42a5f5", "#0d47a1"),
            ("low", 1.0, 2.0, "#66bb6a", "#1b5e20"),
            ("neutral", 2.0, 3.5, "#9ccc65", "#33691e"),
            ("high", 3.5, 5.0, "#ffa726", "#e65100"),
            ("very_high", 5.0, 7.0, "#ef5350", "#b71c1c"),
        ])
    }

    /// Nominal exchange-rate bands, domestic units per USD.
    pub fn exchange_rate_nominal() -> Self {
        Self::from_static(&[
            ("very_strong", 1000.0, 1100.0, "#42a5f5", "#0d47a1"),
            ("strong", 1100.0, 1200.0, "#66bb6a", "#1b5e20"),
            ("neutral", 1200.0, 1300.0, "#9ccc65", "#33691e"),
            ("weak", 1300.0, 1400.0, "#ffa726", "#e65100"),
            ("very_weak", 1400.0, 1500.0, "#ef5350", "#b71c1c"),
        ])
    }

    /// Nominal band set for an indicator.
    pub fn nominal_for(indicator: Indicator) -> Self {
        match indicator {
            Indicator::ExchangeRate => Self::exchange_rate_nominal(),
            Indicator::PolicyRate => Self::policy_rate_nominal(),
            Indicator::Cpi => Self::cpi_nominal(),
        }
    }

    // Literal tables above are ascending and gapless by construction.
    fn from_static(entries: &[(&str, f64, f64, &str, &str)]) -> Self {
        Self {
            bands: entries
                .iter()
                .map(|(name, low, high, fill, text)| Band {
                    name: (*name).to_owned(),
                    low: *low,
                    high: *high,
                    fill_color: (*fill).to_owned(),
                    text_color: (*text).to_owned(),
                })
                .collect(),
        }
    }
}

impl TryFrom<Vec<Band>> for BandSet {
    type Error = ValidationError;

    fn try_from(value: Vec<Band>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BandSet> for Vec<Band> {
    fn from(value: BandSet) -> Self {
        value.bands
    }
}

/// Result of classifying one reading: the matched band plus the effective
/// (possibly widened) set, so boundaries render consistently with the match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub value: f64,
    pub band: Band,
    pub bands: BandSet,
}

impl Classification {
    /// Position of the reading within the effective span, clamped to `[0, 1]`.
    ///
    /// This is the normalized needle position for gauge rendering.
    pub fn position_ratio(&self) -> f64 {
        let (low, high) = self.bands.span();
        if high <= low {
            return 0.0;
        }
        ((self.value - low) / (high - low)).clamp(0.0, 1.0)
    }
}
