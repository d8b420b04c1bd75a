//! Single-choice selector state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::validation::Validatable;

/// Unique identifier for a SelectField instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectFieldId(usize);

impl SelectFieldId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for SelectFieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__select_field_{}", self.0)
    }
}

#[derive(Debug, Default)]
struct SelectFieldInner {
    /// Available option labels
    options: Vec<String>,
    /// Currently selected index (None = placeholder)
    selected: Option<usize>,
    /// Placeholder shown while nothing is selected
    placeholder: String,
    /// Erroneous marking (set by the error renderer)
    error: Option<String>,
}

/// A single-choice selector with reactive state.
///
/// The *selection value* is the selected option's label, or the empty string
/// while nothing is selected; that value is what the position rule validates.
/// Selection changes never touch the error slot; the live-feedback binder
/// re-validates on change.
#[derive(Debug)]
pub struct SelectField {
    id: SelectFieldId,
    inner: Arc<RwLock<SelectFieldInner>>,
    dirty: Arc<AtomicBool>,
    focus_requested: Arc<AtomicBool>,
}

impl SelectField {
    pub fn new() -> Self {
        Self {
            id: SelectFieldId::new(),
            inner: Arc::new(RwLock::new(SelectFieldInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
            focus_requested: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn id(&self) -> SelectFieldId {
        self.id
    }

    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Options
    // -------------------------------------------------------------------------

    /// Replace the option labels and drop any selection.
    pub fn set_options(&self, options: Vec<impl Into<String>>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.options = options.into_iter().map(|l| l.into()).collect();
            guard.selected = None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn options(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|guard| guard.options.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.options.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    pub fn selected(&self) -> Option<usize> {
        self.inner
            .read()
            .map(|guard| guard.selected)
            .unwrap_or(None)
    }

    /// Select an option by index; out-of-range indices are ignored.
    pub fn select(&self, index: usize) {
        if let Ok(mut guard) = self.inner.write()
            && index < guard.options.len()
            && guard.selected != Some(index)
        {
            guard.selected = Some(index);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Drop the selection back to the placeholder.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.selected.is_some()
        {
            guard.selected = None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Move the selection down one option (first option when none selected).
    pub fn select_next(&self) {
        if let Ok(mut guard) = self.inner.write()
            && !guard.options.is_empty()
        {
            let next = match guard.selected {
                None => 0,
                Some(i) => (i + 1).min(guard.options.len() - 1),
            };
            if guard.selected != Some(next) {
                guard.selected = Some(next);
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Move the selection up one option (first option when none selected).
    pub fn select_prev(&self) {
        if let Ok(mut guard) = self.inner.write()
            && !guard.options.is_empty()
        {
            let prev = match guard.selected {
                None => 0,
                Some(i) => i.saturating_sub(1),
            };
            if guard.selected != Some(prev) {
                guard.selected = Some(prev);
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Label of the selected option, if any.
    pub fn selected_label(&self) -> Option<String> {
        self.inner.read().ok().and_then(|guard| {
            guard
                .selected
                .and_then(|idx| guard.options.get(idx).cloned())
        })
    }

    /// The selection value: the selected label, or empty when none.
    pub fn value(&self) -> String {
        self.selected_label().unwrap_or_default()
    }

    pub fn placeholder(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.placeholder.clone())
            .unwrap_or_default()
    }

    pub fn set_placeholder(&self, placeholder: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.placeholder = placeholder.into();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Focus control
    // -------------------------------------------------------------------------

    pub fn focus(&self) {
        self.focus_requested.store(true, Ordering::SeqCst);
    }

    pub fn take_focus_request(&self) -> bool {
        self.focus_requested.swap(false, Ordering::SeqCst)
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Error marking
    // -------------------------------------------------------------------------

    pub fn set_error(&self, msg: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error = Some(msg.into());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn clear_error(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.error.is_some()
        {
            guard.error = None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn has_error(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.error.is_some())
            .unwrap_or(false)
    }

    pub fn error(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.error.clone())
            .unwrap_or(None)
    }
}

impl Clone for SelectField {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            focus_requested: Arc::clone(&self.focus_requested),
        }
    }
}

impl Default for SelectField {
    fn default() -> Self {
        Self::new()
    }
}

impl Validatable for SelectField {
    type Value = String;

    fn validation_value(&self) -> Self::Value {
        self.value()
    }

    fn set_error(&self, msg: impl Into<String>) {
        SelectField::set_error(self, msg)
    }

    fn clear_error(&self) {
        SelectField::clear_error(self)
    }

    fn has_error(&self) -> bool {
        SelectField::has_error(self)
    }

    fn error(&self) -> Option<String> {
        SelectField::error(self)
    }

    fn widget_id(&self) -> String {
        self.id_string()
    }
}
