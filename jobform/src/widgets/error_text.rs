//! Inline error-display element.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// Unique identifier for an ErrorText instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorTextId(usize);

impl ErrorTextId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for ErrorTextId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__error_text_{}", self.0)
    }
}

#[derive(Debug, Default)]
struct ErrorTextInner {
    text: String,
    visible: bool,
}

/// The error line rendered under a control or group.
///
/// Hidden and empty until the error renderer shows a message; showing sets
/// both the text and visibility, clearing resets both.
#[derive(Debug)]
pub struct ErrorText {
    id: ErrorTextId,
    inner: Arc<RwLock<ErrorTextInner>>,
    dirty: Arc<AtomicBool>,
}

impl ErrorText {
    pub fn new() -> Self {
        Self {
            id: ErrorTextId::new(),
            inner: Arc::new(RwLock::new(ErrorTextInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn id(&self) -> ErrorTextId {
        self.id
    }

    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// Set the message and make the element visible.
    pub fn show(&self, msg: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.text = msg.into();
            guard.visible = true;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Clear the message and hide the element.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.inner.write()
            && (guard.visible || !guard.text.is_empty())
        {
            guard.text.clear();
            guard.visible = false;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn text(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.text.clone())
            .unwrap_or_default()
    }

    pub fn is_visible(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.visible)
            .unwrap_or(false)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for ErrorText {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for ErrorText {
    fn default() -> Self {
        Self::new()
    }
}
