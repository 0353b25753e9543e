use serde::{Deserialize, Serialize};

/// Ordered per-category deltas of one dataset.
///
/// Entries that are `None` or non-finite are non-numeric: they keep their
/// category slot but contribute `0` to every sum.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Series {
    #[serde(default)]
    pub label: String,
    pub values: Vec<Option<f64>>,
}

impl Series {
    #[must_use]
    pub fn new(label: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }

    /// Builds a fully numeric series; `NaN` entries are kept as non-numeric slots.
    #[must_use]
    pub fn from_deltas(label: impl Into<String>, deltas: &[f64]) -> Self {
        Self::new(label, deltas.iter().copied().map(Some).collect())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw numeric value of one category, if it has one.
    #[must_use]
    pub fn label_value(&self, index: usize) -> Option<f64> {
        self.values
            .get(index)
            .copied()
            .flatten()
            .filter(|value| value.is_finite())
    }

    /// Contribution of one category to cumulative sums.
    #[must_use]
    pub fn numeric_at(&self, index: usize) -> f64 {
        self.label_value(index).unwrap_or(0.0)
    }

    #[must_use]
    pub fn has_numeric(&self) -> bool {
        (0..self.len()).any(|index| self.label_value(index).is_some())
    }

    /// Sum of every numeric entry.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.prefix_total(self.len())
    }

    /// Sum of numeric entries at indices `< end` (clamped to the series length).
    #[must_use]
    pub fn prefix_total(&self, end: usize) -> f64 {
        (0..end.min(self.len())).fold(0.0, |total, index| total + self.numeric_at(index))
    }
}
