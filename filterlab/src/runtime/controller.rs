//! Which targets are selected, which mode is active, and which filter the
//! value field currently edits.
//!
//! The controller never owns filter state: every mutation goes through the
//! [`FilterStore`] handed to it, under the active mode, for the selected
//! targets.

use log::{debug, info};

use super::events::ResetScope;
use crate::core::util::IndexSet;
use crate::filters::catalog::{self, FilterName};
use crate::filters::{FilterStore, Mode, TargetId};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ActiveFilter {
    #[default]
    NoFilterSelected,
    FilterSelected(FilterName),
}

impl ActiveFilter {
    pub fn name(&self) -> Option<FilterName> {
        match self {
            ActiveFilter::NoFilterSelected => None,
            ActiveFilter::FilterSelected(name) => Some(*name),
        }
    }
}

/// Model of the editable value input
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValueField {
    pub text: String,
    pub enabled: bool,
}

#[derive(Clone, Debug)]
pub struct SelectionController {
    selected_targets: IndexSet<TargetId>,
    mode: Mode,
    active_filter: ActiveFilter,
    field: ValueField,
}

impl SelectionController {
    pub fn new<I, S>(targets: I, mode: Mode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<TargetId>,
    {
        Self {
            selected_targets: targets.into_iter().map(Into::into).collect(),
            mode,
            active_filter: ActiveFilter::default(),
            field: ValueField::default(),
        }
    }

    pub fn selected_targets(&self) -> impl Iterator<Item = &str> {
        self.selected_targets.iter().map(String::as_str)
    }

    /// The target whose stored value seeds the value field
    pub fn first_target(&self) -> Option<&str> {
        self.selected_targets.first().map(String::as_str)
    }

    pub fn has_selected_targets(&self) -> bool {
        !self.selected_targets.is_empty()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn active_filter(&self) -> ActiveFilter {
        self.active_filter
    }

    pub fn value_field(&self) -> &ValueField {
        &self.field
    }

    pub fn set_targets<I, S>(&mut self, targets: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<TargetId>,
    {
        self.selected_targets = targets.into_iter().map(Into::into).collect();
        info!("Selected targets: {:?}", self.selected_targets);
        self.clear_selection();
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        info!("Filter mode changed. Backdrop mode: {}", mode.is_backdrop());
        self.clear_selection();
    }

    /// Back to `NoFilterSelected` with a cleared, disabled value field
    pub fn clear_selection(&mut self) {
        self.active_filter = ActiveFilter::NoFilterSelected;
        self.field = ValueField::default();
    }

    /// Makes `name` the edited filter and loads the field from the first
    /// selected target, or from the catalog default when that target has no
    /// value. Other selected targets' values are not consulted.
    pub fn select_filter(&mut self, name: FilterName, store: &FilterStore) {
        let stored = self
            .first_target()
            .and_then(|target| store.get_value(target, self.mode, name))
            .filter(|value| !value.is_empty());

        self.active_filter = ActiveFilter::FilterSelected(name);
        self.field = ValueField {
            text: stored.unwrap_or(catalog::default_value(name)).to_string(),
            enabled: true,
        };

        info!("Selected filter: {}", name);
    }

    /// Writes the typed text, or the catalog default when it is empty, to
    /// every selected target under the active mode. Returns the targets that
    /// were written; none when no filter is selected.
    pub fn edit_value(
        &mut self,
        text: &str,
        store: &mut FilterStore,
    ) -> Vec<TargetId> {
        let ActiveFilter::FilterSelected(name) = self.active_filter else {
            debug!("Ignoring value edit with no filter selected");
            return vec![];
        };

        self.field.text = text.to_string();

        let value = if text.is_empty() {
            catalog::default_value(name)
        } else {
            text
        };

        for target in &self.selected_targets {
            store.set_value(target, self.mode, name, value);
        }

        self.selected_targets.iter().cloned().collect()
    }

    /// Selects `name` and types `value` into the field as if by hand
    pub fn apply_random(
        &mut self,
        name: FilterName,
        value: &str,
        store: &mut FilterStore,
    ) -> Vec<TargetId> {
        self.active_filter = ActiveFilter::FilterSelected(name);
        self.field = ValueField {
            text: value.to_string(),
            enabled: true,
        };

        let written = self.edit_value(value, store);
        info!("Feeling Lucky! Selected filter: {} with value: {}", name, value);
        written
    }

    /// Clears the active mode's filters and returns the targets whose state
    /// was removed. With no target selected a `Selected` reset clears every
    /// target.
    pub fn reset(
        &mut self,
        scope: ResetScope,
        store: &mut FilterStore,
    ) -> Vec<TargetId> {
        let scope = match scope {
            ResetScope::Selected if !self.has_selected_targets() => {
                ResetScope::All
            }
            scope => scope,
        };

        let cleared = match scope {
            ResetScope::All => store.clear_all(self.mode),
            ResetScope::Selected => self
                .selected_targets
                .iter()
                .filter(|target| store.clear_one(target, self.mode))
                .cloned()
                .collect(),
        };

        self.clear_selection();
        cleared
    }
}
