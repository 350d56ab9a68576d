//! Toggle selection for multi-select dropdowns
//!
//! `ToggleSelect` wraps any `MultiSelect` widget model. With the
//! `toggle_select` flag set, choosing an item that is already selected
//! unselects it instead of selecting it again, and selected items stay
//! highlightable in the dropdown so they can be chosen a second time.

/// One entry of a dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub id: String,
    pub label: String,
    pub disabled: bool,
}

impl Choice {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Extension points of a multi-select widget.
pub trait MultiSelect {
    fn choices(&self) -> &[Choice];

    fn is_selected(&self, id: &str) -> bool;

    /// Choices the keyboard/mouse highlight may land on.
    fn highlightable_choices(&self) -> Vec<&Choice>;

    /// Default selection behavior. Returns true when a selection was made.
    fn trigger_select(&mut self, id: &str) -> bool;

    /// Returns true when `id` was selected and is no longer.
    fn unselect(&mut self, id: &str) -> bool;

    fn clear_search(&mut self);
}

pub struct ToggleSelect<S> {
    inner: S,
    toggle_select: bool,
}

impl<S: MultiSelect> ToggleSelect<S> {
    pub fn new(inner: S, toggle_select: bool) -> Self {
        Self { inner, toggle_select }
    }

    pub fn toggle_select(&self) -> bool {
        self.toggle_select
    }

    pub fn set_toggle_select(&mut self, toggle_select: bool) {
        self.toggle_select = toggle_select;
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: MultiSelect> MultiSelect for ToggleSelect<S> {
    fn choices(&self) -> &[Choice] {
        self.inner.choices()
    }

    fn is_selected(&self, id: &str) -> bool {
        self.inner.is_selected(id)
    }

    fn highlightable_choices(&self) -> Vec<&Choice> {
        if self.toggle_select {
            return self.inner.choices().iter().filter(|c| !c.disabled).collect();
        }
        self.inner.highlightable_choices()
    }

    /// With toggling on, an already selected `id` is unselected and the
    /// default selection is suppressed (returns false).
    fn trigger_select(&mut self, id: &str) -> bool {
        if self.toggle_select && self.inner.is_selected(id) {
            if self.inner.unselect(id) {
                self.inner.clear_search();
            }
            return false;
        }
        self.inner.trigger_select(id)
    }

    fn unselect(&mut self, id: &str) -> bool {
        self.inner.unselect(id)
    }

    fn clear_search(&mut self) {
        self.inner.clear_search()
    }
}

/// In-memory multi-select model.
#[derive(Debug, Clone, Default)]
pub struct SimpleMultiSelect {
    choices: Vec<Choice>,
    selected: Vec<String>,
    search: String,
}

impl SimpleMultiSelect {
    pub fn new(choices: Vec<Choice>) -> Self {
        Self {
            choices,
            selected: Vec::new(),
            search: String::new(),
        }
    }

    /// Selected ids, in selection order.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }
}

impl MultiSelect for SimpleMultiSelect {
    fn choices(&self) -> &[Choice] {
        &self.choices
    }

    fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    fn highlightable_choices(&self) -> Vec<&Choice> {
        self.choices
            .iter()
            .filter(|c| !c.disabled && !self.is_selected(&c.id))
            .collect()
    }

    fn trigger_select(&mut self, id: &str) -> bool {
        let selectable = self.choices.iter().any(|c| c.id == id && !c.disabled);
        if !selectable || self.is_selected(id) {
            return false;
        }
        self.selected.push(id.to_string());
        true
    }

    fn unselect(&mut self, id: &str) -> bool {
        let before = self.selected.len();
        self.selected.retain(|s| s != id);
        self.selected.len() != before
    }

    fn clear_search(&mut self) {
        self.search.clear();
    }
}
