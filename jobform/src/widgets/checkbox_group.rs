//! Multi-choice checkbox group state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// Unique identifier for a CheckboxGroup instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckboxGroupId(usize);

impl CheckboxGroupId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for CheckboxGroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__checkbox_group_{}", self.0)
    }
}

#[derive(Debug)]
struct CheckboxGroupInner {
    /// Option labels
    options: Vec<String>,
    /// Per-option checked flags, same length as `options`
    checked: Vec<bool>,
    /// Indicator shown for a checked option
    checked_char: char,
    /// Indicator shown for an unchecked option
    unchecked_char: char,
}

impl Default for CheckboxGroupInner {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            checked: Vec::new(),
            checked_char: '■',
            unchecked_char: '□',
        }
    }
}

/// A group of checkboxes validated as one unit.
///
/// The group shares a single error display; what its rule consumes is the
/// checked count across all options. Focusing the group means focusing its
/// first checkbox.
#[derive(Debug)]
pub struct CheckboxGroup {
    id: CheckboxGroupId,
    inner: Arc<RwLock<CheckboxGroupInner>>,
    dirty: Arc<AtomicBool>,
    /// Focus request for the group's first checkbox
    focus_requested: Arc<AtomicBool>,
}

impl CheckboxGroup {
    pub fn new() -> Self {
        Self {
            id: CheckboxGroupId::new(),
            inner: Arc::new(RwLock::new(CheckboxGroupInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
            focus_requested: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn id(&self) -> CheckboxGroupId {
        self.id
    }

    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Options
    // -------------------------------------------------------------------------

    /// Replace the option labels; every option starts unchecked.
    pub fn set_options(&self, options: Vec<impl Into<String>>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.options = options.into_iter().map(|l| l.into()).collect();
            guard.checked = vec![false; guard.options.len()];
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn options(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|guard| guard.options.clone())
            .unwrap_or_default()
    }

    pub fn label(&self, index: usize) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.options.get(index).cloned())
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
    // Checked state
    // -------------------------------------------------------------------------

    pub fn is_checked(&self, index: usize) -> bool {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.checked.get(index).copied())
            .unwrap_or(false)
    }

    /// Set one option's checked state; out-of-range indices are ignored.
    pub fn set_checked(&self, index: usize, checked: bool) {
        if let Ok(mut guard) = self.inner.write()
            && let Some(slot) = guard.checked.get_mut(index)
            && *slot != checked
        {
            *slot = checked;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Toggle one option; out-of-range indices are ignored.
    pub fn toggle(&self, index: usize) {
        if let Ok(mut guard) = self.inner.write()
            && let Some(slot) = guard.checked.get_mut(index)
        {
            *slot = !*slot;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Number of checked options across the whole group.
    pub fn checked_count(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.checked.iter().filter(|c| **c).count())
            .unwrap_or(0)
    }

    /// Uncheck every option.
    pub fn clear_all(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.checked.fill(false);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Indicators
    // -------------------------------------------------------------------------

    pub fn set_indicators(&self, checked: char, unchecked: char) {
        if let Ok(mut guard) = self.inner.write() {
            guard.checked_char = checked;
            guard.unchecked_char = unchecked;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn checked_char(&self) -> char {
        self.inner
            .read()
            .map(|guard| guard.checked_char)
            .unwrap_or('■')
    }

    pub fn unchecked_char(&self) -> char {
        self.inner
            .read()
            .map(|guard| guard.unchecked_char)
            .unwrap_or('□')
    }

    // -------------------------------------------------------------------------
    // Focus control
    // -------------------------------------------------------------------------

    /// Request focus for the group's first checkbox.
    pub fn focus_first(&self) {
        self.focus_requested.store(true, Ordering::SeqCst);
    }

    /// Check and clear the focus request (called by the host runtime).
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
}

impl Clone for CheckboxGroup {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            focus_requested: Arc::clone(&self.focus_requested),
        }
    }
}

impl Default for CheckboxGroup {
    fn default() -> Self {
        Self::new()
    }
}
