//! In-memory document: element registry, head content and ready state

use std::{
    collections::BTreeMap,
    fmt,
    sync::{Arc, Mutex},
};
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info};

use super::{
    styles::{BASE_STYLESHEET, VIEWPORT_CONTENT},
    Element, Surface, SurfaceLookup, SurfaceRef,
};
use crate::utils::lock;

/// Document loading state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    /// Whether callers may touch the document
    pub fn is_ready(self) -> bool {
        self != ReadyState::Loading
    }
}

/// Meta tags and stylesheets of the document head
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Head {
    pub meta: BTreeMap<String, String>,
    pub styles: Vec<String>,
}

type ReadyCallback = Box<dyn FnOnce() + Send>;

/// The page's document
pub struct Document {
    /// Elements in insertion order
    elements: Mutex<Vec<Arc<Element>>>,
    head: Mutex<Head>,
    /// Callbacks waiting for the document to become interactive
    pending: Mutex<Vec<ReadyCallback>>,
    ready_tx: watch::Sender<ReadyState>,
    /// Keep the receiver alive to prevent channel closure
    _ready_rx: watch::Receiver<ReadyState>,
}

impl Document {
    /// Create an empty document in the `Loading` state
    pub fn new() -> Self {
        let (ready_tx, ready_rx) = watch::channel(ReadyState::Loading);

        Self {
            elements: Mutex::new(Vec::new()),
            head: Mutex::new(Head::default()),
            pending: Mutex::new(Vec::new()),
            ready_tx,
            _ready_rx: ready_rx,
        }
    }

    /// Append an element and return a handle to it
    pub fn append(&self, element: Element) -> SurfaceRef {
        let element = Arc::new(element);
        lock(&self.elements).push(Arc::clone(&element));
        element
    }

    /// Detach the element with the given id. Returns whether one was removed.
    pub fn remove(&self, id: &str) -> bool {
        let mut elements = lock(&self.elements);
        let before = elements.len();
        elements.retain(|el| el.id().as_deref() != Some(id));
        let removed = elements.len() != before;
        if removed {
            debug!("Removed element #{}", id);
        }
        removed
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<SurfaceRef> {
        lock(&self.elements)
            .iter()
            .find(|el| el.id().as_deref() == Some(id))
            .map(|el| Arc::clone(el) as SurfaceRef)
    }

    /// Find the main page container.
    ///
    /// Matches the first element carrying the `container` or `game-container`
    /// class, or the `data-game-container` attribute.
    pub fn query_container(&self) -> Option<SurfaceRef> {
        lock(&self.elements)
            .iter()
            .find(|el| {
                el.has_class("container")
                    || el.has_class("game-container")
                    || el.has_attribute("data-game-container")
            })
            .map(|el| Arc::clone(el) as SurfaceRef)
    }

    pub fn head(&self) -> Head {
        lock(&self.head).clone()
    }

    /// Set the viewport meta tag and add the shared stylesheet.
    ///
    /// Calling it again leaves the head unchanged.
    pub fn inject_base_styles(&self) {
        let mut head = lock(&self.head);
        head.meta
            .insert("viewport".to_string(), VIEWPORT_CONTENT.to_string());

        if head.styles.iter().any(|s| s == BASE_STYLESHEET) {
            debug!("Base styles already injected");
            return;
        }
        head.styles.push(BASE_STYLESHEET.to_string());
        info!("Injected base styles");
    }

    pub fn ready_state(&self) -> ReadyState {
        *self.ready_tx.borrow()
    }

    /// Move to a new ready state. Leaving `Loading` runs queued ready callbacks in order.
    pub fn set_ready_state(&self, state: ReadyState) {
        let callbacks = {
            let mut pending = lock(&self.pending);
            let previous = self.ready_tx.send_replace(state);
            debug!("Document ready state: {:?} -> {:?}", previous, state);

            if previous.is_ready() || !state.is_ready() {
                return;
            }
            std::mem::take(&mut *pending)
        };

        info!("Document interactive, running {} ready callbacks", callbacks.len());
        for callback in callbacks {
            callback();
        }
    }

    /// Run `f` now if the document is interactive, otherwise once it becomes so
    pub fn ready<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        {
            let mut pending = lock(&self.pending);
            if !self.ready_state().is_ready() {
                pending.push(Box::new(f));
                debug!("Document loading, deferred ready callback");
                return;
            }
        }
        f();
    }

    /// Wait until the document leaves the `Loading` state
    pub async fn wait_ready(&self) -> ReadyState {
        let mut rx = self.ready_tx.subscribe();
        let state = match rx.wait_for(|state| state.is_ready()).await {
            Ok(state) => *state,
            // Sender dropped: only during teardown
            Err(_) => self.ready_state(),
        };
        state
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceLookup for Document {
    fn lookup(&self, id: &str) -> Option<SurfaceRef> {
        self.get_element_by_id(id)
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("elements", &lock(&self.elements).len())
            .field("ready_state", &self.ready_state())
            .field("pending_callbacks", &lock(&self.pending).len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn lookup_by_id() {
        let doc = Document::new();
        doc.append(Element::new("timer").with_content("00:00"));

        let timer = doc.lookup("timer").unwrap();
        assert_eq!(timer.content(), "00:00");
        assert!(doc.lookup("missing").is_none());
    }

    #[test]
    fn removed_elements_are_not_found() {
        let doc = Document::new();
        doc.append(Element::new("board"));
        assert!(doc.remove("board"));
        assert!(!doc.remove("board"));
        assert!(doc.get_element_by_id("board").is_none());
    }

    #[test]
    fn container_matches_class_or_attribute() {
        let doc = Document::new();
        doc.append(Element::new("title"));
        doc.append(Element::new("wrap").with_attribute("data-game-container", ""));
        doc.append(Element::new("main").with_class("game-container"));

        let container = doc.query_container().unwrap();
        assert_eq!(container.id().as_deref(), Some("wrap"));
    }

    #[test]
    fn base_styles_injected_once() {
        let doc = Document::new();
        doc.inject_base_styles();
        doc.inject_base_styles();

        let head = doc.head();
        assert_eq!(head.styles.len(), 1);
        assert_eq!(head.meta.get("viewport").map(String::as_str), Some(VIEWPORT_CONTENT));
    }

    #[test]
    fn ready_callbacks_run_in_order_on_transition() {
        let doc = Document::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for n in 0..3 {
            let order = Arc::clone(&order);
            doc.ready(move || order.lock().unwrap().push(n));
        }
        assert!(order.lock().unwrap().is_empty());

        doc.set_ready_state(ReadyState::Interactive);
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2]);

        // Later transitions do not replay them
        doc.set_ready_state(ReadyState::Complete);
        assert_eq!(order.lock().unwrap().len(), 3);
    }

    #[test]
    fn ready_runs_immediately_when_interactive() {
        let doc = Document::new();
        doc.set_ready_state(ReadyState::Complete);

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        doc.ready(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn wait_ready_resolves_after_transition() {
        let doc = Arc::new(Document::new());
        let waiter = {
            let doc = Arc::clone(&doc);
            tokio::spawn(async move { doc.wait_ready().await })
        };

        tokio::task::yield_now().await;
        doc.set_ready_state(ReadyState::Interactive);
        assert_eq!(waiter.await.unwrap(), ReadyState::Interactive);
    }
}
