//! Per-target, per-mode filter state.
//!
//! A (target, mode) pair either has a non-empty [`FilterValueMap`] or no entry
//! at all; empty maps are never stored.

use serde::Serialize;

use super::catalog::FilterName;
use super::synth::synthesize;
use super::Mode;
use crate::core::util::IndexMap;

pub type TargetId = String;

/// Insertion-ordered filter values. The order is the order the filter
/// functions are composed in the synthesized CSS.
pub type FilterValueMap = IndexMap<FilterName, String>;

type Partition = IndexMap<TargetId, FilterValueMap>;

#[derive(Clone, Debug, Default, Serialize)]
pub struct FilterStore {
    #[serde(rename = "filter")]
    normal: Partition,
    #[serde(rename = "backdrop-filter")]
    backdrop: Partition,
}

impl FilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites `filter` for the pair. Filters that are already
    /// set keep their position; new ones are appended.
    pub fn set_value(
        &mut self,
        target: &str,
        mode: Mode,
        filter: FilterName,
        value: impl Into<String>,
    ) {
        let partition = self.partition_mut(mode);
        let value = value.into();

        if let Some(values) = partition.get_mut(target) {
            values.insert(filter, value);
        } else {
            let mut values = FilterValueMap::default();
            values.insert(filter, value);
            partition.insert(target.to_string(), values);
        }
    }

    /// Removes every filter of the pair. Returns whether anything was set.
    pub fn clear_one(&mut self, target: &str, mode: Mode) -> bool {
        self.partition_mut(mode).shift_remove(target).is_some()
    }

    /// Removes every target's filters for `mode`, leaving the other mode
    /// untouched. Returns the targets that were cleared.
    pub fn clear_all(&mut self, mode: Mode) -> Vec<TargetId> {
        self.partition_mut(mode)
            .drain(..)
            .map(|(target, _)| target)
            .collect()
    }

    pub fn get_value(
        &self,
        target: &str,
        mode: Mode,
        filter: FilterName,
    ) -> Option<&str> {
        self.filters(target, mode)
            .and_then(|values| values.get(&filter))
            .map(String::as_str)
    }

    pub fn filters(&self, target: &str, mode: Mode) -> Option<&FilterValueMap> {
        self.partition(mode).get(target)
    }

    /// The CSS value for the pair, `""` when nothing is set
    pub fn render(&self, target: &str, mode: Mode) -> String {
        self.filters(target, mode)
            .map(synthesize)
            .unwrap_or_default()
    }

    /// Targets that currently have filters in `mode`, in first-set order
    pub fn targets(&self, mode: Mode) -> impl Iterator<Item = &str> {
        self.partition(mode).keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.normal.is_empty() && self.backdrop.is_empty()
    }

    fn partition(&self, mode: Mode) -> &Partition {
        match mode {
            Mode::Normal => &self.normal,
            Mode::Backdrop => &self.backdrop,
        }
    }

    fn partition_mut(&mut self, mode: Mode) -> &mut Partition {
        match mode {
            Mode::Normal => &mut self.normal,
            Mode::Backdrop => &mut self.backdrop,
        }
    }
}
