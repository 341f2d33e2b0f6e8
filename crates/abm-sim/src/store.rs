//! `OutputStore`: named time series collected during a run.

use std::collections::BTreeMap;

use abm_core::Epoch;

/// Series name → (epoch → value).
///
/// Helpers write into `sim.output` during their epilogue; exporters read it
/// back after the run.  Both levels are ordered so exports are stable.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutputStore {
    series: BTreeMap<String, BTreeMap<Epoch, f64>>,
}

impl OutputStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` for `series` at `epoch`, returning the value it
    /// overwrote.
    pub fn record(&mut self, series: &str, epoch: Epoch, value: f64) -> Option<f64> {
        self.series.entry(series.to_owned()).or_default().insert(epoch, value)
    }

    pub fn series(&self, name: &str) -> Option<&BTreeMap<Epoch, f64>> {
        self.series.get(name)
    }

    pub fn value(&self, name: &str, epoch: Epoch) -> Option<f64> {
        self.series.get(name)?.get(&epoch).copied()
    }

    /// The most recent sample of `name`.
    pub fn latest(&self, name: &str) -> Option<(Epoch, f64)> {
        self.series
            .get(name)?
            .last_key_value()
            .map(|(&epoch, &value)| (epoch, value))
    }

    /// Series names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.series.keys().map(String::as_str)
    }

    /// Every sample as `(series, epoch, value)`, sorted by series then epoch.
    pub fn rows(&self) -> impl Iterator<Item = (&str, Epoch, f64)> + '_ {
        self.series.iter().flat_map(|(name, samples)| {
            samples.iter().map(move |(&epoch, &value)| (name.as_str(), epoch, value))
        })
    }

    /// Total number of samples across all series.
    pub fn len(&self) -> usize {
        self.series.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.series.clear();
    }
}
