//! Global feedback region.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use log::debug;

/// Unique identifier for a FeedbackRegion instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackRegionId(usize);

impl FeedbackRegionId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for FeedbackRegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__feedback_region_{}", self.0)
    }
}

/// Whether the current feedback message reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

#[derive(Debug, Default)]
struct FeedbackInner {
    text: String,
    kind: Option<FeedbackKind>,
}

/// The single element announcing overall submit outcome.
///
/// Holds at most one message at a time; each [`set`](Self::set) replaces the
/// previous one. Updates are announced passively (logged, the polite
/// live-region analog) and never steal focus; moving focus here is a
/// separate, best-effort request the host runtime may ignore.
#[derive(Debug)]
pub struct FeedbackRegion {
    id: FeedbackRegionId,
    inner: Arc<RwLock<FeedbackInner>>,
    dirty: Arc<AtomicBool>,
    focus_requested: Arc<AtomicBool>,
}

impl FeedbackRegion {
    pub fn new() -> Self {
        Self {
            id: FeedbackRegionId::new(),
            inner: Arc::new(RwLock::new(FeedbackInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
            focus_requested: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn id(&self) -> FeedbackRegionId {
        self.id
    }

    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// Replace the feedback message.
    pub fn set(&self, text: impl Into<String>, kind: FeedbackKind) {
        if let Ok(mut guard) = self.inner.write() {
            guard.text = text.into();
            guard.kind = Some(kind);
            debug!("feedback announced ({kind:?}): {}", guard.text);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Remove the feedback message.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.kind.is_some()
        {
            guard.text.clear();
            guard.kind = None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn text(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.text.clone())
            .unwrap_or_default()
    }

    pub fn kind(&self) -> Option<FeedbackKind> {
        self.inner.read().map(|guard| guard.kind).unwrap_or(None)
    }

    pub fn has_message(&self) -> bool {
        self.kind().is_some()
    }

    /// Best-effort focus request; the host runtime may not support it.
    pub fn focus(&self) {
        self.focus_requested.store(true, Ordering::SeqCst);
    }

    pub fn take_focus_request(&self) -> bool {
        self.focus_requested.swap(false, Ordering::SeqCst)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for FeedbackRegion {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            focus_requested: Arc::clone(&self.focus_requested),
        }
    }
}

impl Default for FeedbackRegion {
    fn default() -> Self {
        Self::new()
    }
}
