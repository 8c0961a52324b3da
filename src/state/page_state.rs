//! Per-page context that owns the document, the scheduler and the spinner

use std::sync::Arc;
use tracing::info;

use crate::{
    dom::{Document, SurfaceLookup},
    tasks::Scheduler,
    widgets::{Spinner, Timer},
};

/// Everything one page needs. Two pages never share state.
#[derive(Debug)]
pub struct Page {
    pub document: Arc<Document>,
    pub scheduler: Scheduler,
    pub spinner: Spinner,
}

impl Page {
    /// Create a page with an empty, loading document.
    ///
    /// Must be called inside a tokio runtime for timers to tick.
    pub fn new() -> Self {
        Self::with_document(Arc::new(Document::new()))
    }

    pub fn with_document(document: Arc<Document>) -> Self {
        info!("Creating page context");
        Self {
            document,
            scheduler: Scheduler::new(),
            spinner: Spinner::new(),
        }
    }

    /// Create a timer displayed in the element with the given id
    pub fn timer(&self, id: &str) -> Timer {
        Timer::create(&*self.document, id, self.scheduler.clone())
    }

    /// Show the spinner in the element with the given id
    pub fn show_spinner(&self, id: &str, message: Option<&str>) {
        let surface = self.document.lookup(id);
        self.spinner.show(surface.as_ref(), message);
    }

    /// Hide the spinner in the element with the given id
    pub fn hide_spinner(&self, id: &str) {
        let surface = self.document.lookup(id);
        self.spinner.hide(surface.as_ref());
    }

    /// Detach an element and release any spinner state saved for it
    pub fn remove_element(&self, id: &str) -> bool {
        let removed = self.document.remove(id);
        if removed {
            self.spinner.forget_dropped();
        }
        removed
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Element, Surface};

    #[test]
    fn spinner_by_id() {
        let page = Page::new();
        let board = page
            .document
            .append(Element::new("board").with_content("cells").with_class("grid"));

        page.show_spinner("board", Some("Generating"));
        assert!(board.content().contains("Generating"));

        page.hide_spinner("board");
        assert_eq!(board.content(), "cells");
        assert_eq!(board.class_name(), "grid");

        page.show_spinner("missing", None);
        page.hide_spinner("missing");
    }

    #[test]
    fn pages_do_not_share_spinner_state() {
        let first = Page::new();
        let second = Page::new();
        let shared: crate::dom::SurfaceRef = Arc::new(Element::new("x").with_content("orig"));

        first.spinner.show(Some(&shared), None);
        second.spinner.hide(Some(&shared));
        assert_ne!(shared.content(), "orig");

        first.spinner.hide(Some(&shared));
        assert_eq!(shared.content(), "orig");
    }

    #[test]
    fn removing_an_element_releases_its_saved_content() {
        let page = Page::new();
        let big = "x".repeat(1_000_000);
        page.document.append(Element::new("board").with_content(&big));
        page.document.append(Element::new("status").with_content("ok"));

        page.show_spinner("board", None);
        page.show_spinner("status", None);
        assert_eq!(page.spinner.stored(), 2);

        assert!(page.remove_element("board"));
        assert_eq!(page.spinner.stored(), 1);
        assert!(!page.remove_element("board"));

        page.hide_spinner("status");
        assert_eq!(page.document.lookup("status").unwrap().content(), "ok");
    }
}
