use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// Callback notified with the requested value whenever a merged state changes.
pub type OnChange<T> = Arc<dyn Fn(T) + Send + Sync>;

/// State cell that can be driven by its owner or handed over to a caller.
///
/// Each render calls [`MergedState::merge`] with the caller's current value
/// (if any). When a value is supplied the state is *controlled*: that value
/// is what the render sees, and writes only notify the caller. Otherwise the
/// cell is *uncontrolled* and writes land in the cell itself.
///
/// When the caller stops supplying a value, the cell is reseeded from the
/// default instead of resuming from what the caller last held.
///
/// It is an `Arc<RwLock<_>>` internally, so clones share the same value and
/// can be moved into handlers.
///
/// # Example
///
/// ```
/// use prolist::state::MergedState;
///
/// let cell = MergedState::new();
/// let merged = cell.merge(None, false, None);
/// assert!(!merged.value);
///
/// merged.setter.set(true);
/// assert!(cell.is_dirty());
/// assert!(cell.merge(None, false, None).value);
/// ```
pub struct MergedState<T> {
    inner: Arc<RwLock<Option<T>>>,
    dirty: Arc<AtomicBool>,
    controlled: Arc<AtomicBool>,
}

/// The outcome of merging for one render: the value to render with and the
/// setter to hand to event handlers.
#[derive(Debug, Clone)]
pub struct Merged<T> {
    pub value: T,
    pub setter: MergedSetter<T>,
}

/// Write half of a merged state, bound to the mode it was resolved in.
#[derive(Clone)]
pub struct MergedSetter<T> {
    state: MergedState<T>,
    controlled: bool,
    on_change: Option<OnChange<T>>,
}

impl<T: Clone> MergedState<T> {
    /// Create an unseeded cell. The first `merge` seeds it.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(None)),
            dirty: Arc::new(AtomicBool::new(false)),
            controlled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a cell already holding `value`.
    pub fn with_value(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(value))),
            dirty: Arc::new(AtomicBool::new(false)),
            controlled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Resolve the value for this render.
    ///
    /// - `controlled`: the caller's current value, if the caller owns it.
    /// - `default`: the seed used when the cell is read for the first time,
    ///   and again when the caller releases control.
    /// - `on_change`: notified on every write, in both modes.
    pub fn merge(&self, controlled: Option<T>, default: T, on_change: Option<OnChange<T>>) -> Merged<T> {
        let is_controlled = controlled.is_some();
        let was_controlled = self.controlled.swap(is_controlled, Ordering::SeqCst);
        let value = match controlled {
            Some(value) => value,
            None if was_controlled => {
                self.store(default.clone());
                default
            }
            None => self.get_or_seed(default),
        };
        Merged {
            value,
            setter: MergedSetter {
                state: self.clone(),
                controlled: is_controlled,
                on_change,
            },
        }
    }

    /// Current cell value, if seeded.
    pub fn peek(&self) -> Option<T> {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Forget the stored value; the next `merge` seeds again.
    pub fn reset(&self) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    fn get_or_seed(&self, default: T) -> T {
        if let Some(value) = self.peek() {
            return value;
        }
        self.store(default.clone());
        default
    }

    fn store(&self, value: T) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = Some(value);
        }
    }

    /// Check if a write happened since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<T: Clone> MergedSetter<T> {
    /// Request a new value.
    ///
    /// Uncontrolled: stored locally and the cell is marked dirty.
    /// Controlled: the local cell is left alone and only `on_change` hears of it.
    pub fn set(&self, value: T) {
        if !self.controlled {
            if let Ok(mut guard) = self.state.inner.write() {
                *guard = Some(value.clone());
                self.state.dirty.store(true, Ordering::SeqCst);
            }
        }
        if let Some(on_change) = &self.on_change {
            on_change(value);
        }
    }

    /// Whether this setter defers to the caller.
    pub fn is_controlled(&self) -> bool {
        self.controlled
    }
}

impl<T> Clone for MergedState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            controlled: Arc::clone(&self.controlled),
        }
    }
}

impl<T: Clone> Default for MergedState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for MergedState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MergedState")
            .field("inner", &self.inner)
            .field("dirty", &self.dirty)
            .field("controlled", &self.controlled)
            .finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for MergedSetter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MergedSetter")
            .field("controlled", &self.controlled)
            .field("has_on_change", &self.on_change.is_some())
            .finish()
    }
}
