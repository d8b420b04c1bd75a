//! Single-line text field state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::validation::Validatable;

/// Unique identifier for a TextField instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextFieldId(usize);

impl TextFieldId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TextFieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__text_field_{}", self.0)
    }
}

#[derive(Debug, Default)]
struct TextFieldInner {
    /// Current text value
    value: String,
    /// Placeholder shown while the value is empty
    placeholder: String,
    /// Cursor position (byte offset)
    cursor: usize,
    /// Erroneous marking (set by the error renderer, never by editing)
    error: Option<String>,
}

/// A text input with reactive state.
///
/// Used for the name, email, phone, and cover-letter fields. Editing never
/// touches the error slot; inline errors persist until the next validation
/// pass over the field (blur, change, or submit).
#[derive(Debug)]
pub struct TextField {
    id: TextFieldId,
    inner: Arc<RwLock<TextFieldInner>>,
    dirty: Arc<AtomicBool>,
    /// Focus request flag, consumed by the host runtime
    focus_requested: Arc<AtomicBool>,
}

impl TextField {
    pub fn new() -> Self {
        Self {
            id: TextFieldId::new(),
            inner: Arc::new(RwLock::new(TextFieldInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
            focus_requested: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the unique ID for this field.
    pub fn id(&self) -> TextFieldId {
        self.id
    }

    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// The current text value.
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    pub fn placeholder(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.placeholder.clone())
            .unwrap_or_default()
    }

    /// Cursor position as a byte offset into the value.
    pub fn cursor(&self) -> usize {
        self.inner.read().map(|guard| guard.cursor).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.value.is_empty())
            .unwrap_or(true)
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    pub fn set_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
            guard.cursor = guard.value.len();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Clear the value and move the cursor home.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value.clear();
            guard.cursor = 0;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn set_placeholder(&self, placeholder: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.placeholder = placeholder.into();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Editing (called by the host runtime on key events)
    // -------------------------------------------------------------------------

    /// Insert a character at the cursor.
    pub fn insert_char(&self, c: char) {
        if let Ok(mut guard) = self.inner.write() {
            let cursor = guard.cursor;
            guard.value.insert(cursor, c);
            guard.cursor += c.len_utf8();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Delete the character before the cursor (backspace).
    pub fn delete_char_before(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.cursor > 0
        {
            let prev = guard.value[..guard.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            guard.value.remove(prev);
            guard.cursor = prev;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Delete the character at the cursor (delete key).
    pub fn delete_char_at(&self) {
        if let Ok(mut guard) = self.inner.write() {
            let cursor = guard.cursor;
            if cursor < guard.value.len() {
                guard.value.remove(cursor);
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    pub fn cursor_left(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.cursor > 0
        {
            guard.cursor = guard.value[..guard.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn cursor_right(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.cursor < guard.value.len()
        {
            guard.cursor = guard.value[guard.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| guard.cursor + i)
                .unwrap_or(guard.value.len());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn cursor_home(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.cursor != 0
        {
            guard.cursor = 0;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn cursor_end(&self) {
        if let Ok(mut guard) = self.inner.write() {
            let end = guard.value.len();
            if guard.cursor != end {
                guard.cursor = end;
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Focus control
    // -------------------------------------------------------------------------

    /// Request focus for this field.
    pub fn focus(&self) {
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

    // -------------------------------------------------------------------------
    // Error marking
    // -------------------------------------------------------------------------

    /// Mark the field erroneous.
    pub fn set_error(&self, msg: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error = Some(msg.into());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Remove the erroneous marking.
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

impl Clone for TextField {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            focus_requested: Arc::clone(&self.focus_requested),
        }
    }
}

impl Default for TextField {
    fn default() -> Self {
        Self::new()
    }
}

impl Validatable for TextField {
    type Value = String;

    fn validation_value(&self) -> Self::Value {
        self.value()
    }

    fn set_error(&self, msg: impl Into<String>) {
        TextField::set_error(self, msg)
    }

    fn clear_error(&self) {
        TextField::clear_error(self)
    }

    fn has_error(&self) -> bool {
        TextField::has_error(self)
    }

    fn error(&self) -> Option<String> {
        TextField::error(self)
    }

    fn widget_id(&self) -> String {
        self.id_string()
    }
}
