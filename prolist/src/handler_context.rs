//! Event handlers for rendered rows.
//!
//! This module provides:
//! - `HandlerContext`: what a handler learns about the event that triggered it
//! - `Handler`: closure type for handlers
//! - `HandlerRegistry`: stores element handlers keyed by (element_id, event)
//!   and bubbles events from a target element up to the root

use std::cell::Cell;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use listdom::{path_to, Element};
use log::trace;

// =============================================================================
// Handler Type
// =============================================================================

/// A handler closure that receives a HandlerContext.
pub type Handler = Arc<dyn Fn(&HandlerContext) + Send + Sync>;

// =============================================================================
// Event Kinds
// =============================================================================

/// Pointer events a row and its parts can react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    DoubleClick,
    ContextMenu,
    MouseEnter,
    MouseLeave,
}

/// Result of dispatching an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// No handler on the path reacted.
    Ignored,
    /// At least one handler ran.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

// =============================================================================
// HandlerContext
// =============================================================================

/// Context passed to a handler while an event bubbles.
pub struct HandlerContext {
    kind: EventKind,
    target: String,
    current: String,
    stopped: Cell<bool>,
}

impl HandlerContext {
    pub fn new(kind: EventKind, target: impl Into<String>) -> Self {
        let target = target.into();
        Self {
            kind,
            current: target.clone(),
            target,
            stopped: Cell::new(false),
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// The element the event was originally dispatched to.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The element whose handler is running.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Keep the event from reaching ancestors of the current element.
    pub fn stop_propagation(&self) {
        self.stopped.set(true);
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.stopped.get()
    }
}

impl fmt::Debug for HandlerContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerContext")
            .field("kind", &self.kind)
            .field("target", &self.target)
            .field("current", &self.current)
            .field("stopped", &self.stopped.get())
            .finish()
    }
}

// =============================================================================
// HandlerRegistry
// =============================================================================

/// Registry for element event handlers.
///
/// Maps (element_id, event) to handler closures. Rows register into it while
/// rendering and drop their own previous entries first, so a registry can be
/// reused across renders. Hosts rendering a different set of rows call
/// `clear()` before the pass.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    handlers: Arc<RwLock<HashMap<String, HashMap<EventKind, Handler>>>>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an element event, replacing any previous one.
    pub fn register(&self, element_id: &str, event: EventKind, handler: Handler) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers
                .entry(element_id.to_string())
                .or_default()
                .insert(event, handler);
        }
    }

    /// Get a handler for an element event.
    pub fn get(&self, element_id: &str, event: EventKind) -> Option<Handler> {
        self.handlers.read().ok()?.get(element_id)?.get(&event).cloned()
    }

    /// Drop every handler registered for an element.
    pub fn remove_element(&self, element_id: &str) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.remove(element_id);
        }
    }

    /// Clear all handlers.
    pub fn clear(&self) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.clear();
        }
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers
            .read()
            .map(|h| h.values().map(HashMap::len).sum())
            .unwrap_or(0)
    }

    /// Dispatch an event at `target` and bubble it towards `root`.
    ///
    /// Handlers run innermost first. A handler that calls
    /// `stop_propagation()` ends the walk after it returns.
    pub fn dispatch(&self, root: &Element, target: &str, kind: EventKind) -> EventResult {
        let path = path_to(root, target);
        let mut cx = HandlerContext::new(kind, target);
        let mut result = EventResult::Ignored;

        for id in path.iter().rev() {
            let Some(handler) = self.get(id, kind) else {
                continue;
            };
            trace!("dispatch {:?}: {} (target {})", kind, id, target);
            cx.current = id.clone();
            handler(&cx);
            result = EventResult::Consumed;
            if cx.is_propagation_stopped() {
                break;
            }
        }

        result
    }

    /// Shorthand for dispatching a click.
    pub fn click(&self, root: &Element, target: &str) -> EventResult {
        self.dispatch(root, target, EventKind::Click)
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.len();
        f.debug_struct("HandlerRegistry")
            .field("handler_count", &count)
            .finish()
    }
}
