//! Display surfaces and the in-memory element that backs a document

use std::{
    collections::BTreeMap,
    fmt,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::utils::lock;

/// A UI element that holds markup or text content, a class list and inline styles
pub trait Surface: Send + Sync + fmt::Debug {
    /// Element id, if it has one
    fn id(&self) -> Option<String>;

    /// Current content (markup or text)
    fn content(&self) -> String;

    /// Replace the content
    fn set_content(&self, content: String);

    /// Replace the content with plain text
    fn set_text(&self, text: &str) {
        self.set_content(text.to_string());
    }

    /// Space separated class list
    fn class_name(&self) -> String;

    /// Replace the whole class list
    fn set_class_name(&self, class_name: String);

    /// Inline style property, `None` when unset
    fn style(&self, property: &str) -> Option<String>;

    /// Set an inline style property. An empty value removes it.
    fn set_style(&self, property: &str, value: &str);

    fn has_attribute(&self, name: &str) -> bool;

    fn has_class(&self, class: &str) -> bool {
        self.class_name().split_whitespace().any(|c| c == class)
    }

    /// Append a class unless it is already present
    fn add_class(&self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let current = self.class_name();
        let current = current.trim();
        if current.is_empty() {
            self.set_class_name(class.to_string());
        } else {
            self.set_class_name(format!("{} {}", current, class));
        }
    }

    /// Remove every listed class, keeping the others in order
    fn remove_classes(&self, classes: &[&str]) {
        let kept: Vec<String> = self
            .class_name()
            .split_whitespace()
            .filter(|c| !classes.contains(c))
            .map(str::to_string)
            .collect();
        self.set_class_name(kept.join(" "));
    }
}

/// Shared handle to a surface. Identity is the allocation, not the id.
pub type SurfaceRef = Arc<dyn Surface>;

/// Resolve an element id to a live surface
pub trait SurfaceLookup {
    fn lookup(&self, id: &str) -> Option<SurfaceRef>;
}

/// A surface addressed either by id or directly
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    Id(&'a str),
    Surface(&'a SurfaceRef),
}

impl Target<'_> {
    /// Resolve to a surface; unknown ids resolve to `None`
    pub fn resolve(&self, lookup: &dyn SurfaceLookup) -> Option<SurfaceRef> {
        match self {
            Target::Id(id) => lookup.lookup(id),
            Target::Surface(surface) => Some(Arc::clone(surface)),
        }
    }
}

impl<'a> From<&'a str> for Target<'a> {
    fn from(id: &'a str) -> Self {
        Target::Id(id)
    }
}

impl<'a> From<&'a SurfaceRef> for Target<'a> {
    fn from(surface: &'a SurfaceRef) -> Self {
        Target::Surface(surface)
    }
}

/// Plain data view of an element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementState {
    pub id: Option<String>,
    pub content: String,
    pub class_name: String,
    pub styles: BTreeMap<String, String>,
    pub attributes: BTreeMap<String, String>,
}

/// In-memory element used by [`Document`](super::Document)
#[derive(Debug, Default)]
pub struct Element {
    inner: Mutex<ElementState>,
}

impl Element {
    /// Create an element with the given id
    pub fn new(id: &str) -> Self {
        Self::from_state(ElementState {
            id: Some(id.to_string()),
            ..ElementState::default()
        })
    }

    pub fn from_state(state: ElementState) -> Self {
        Self {
            inner: Mutex::new(state),
        }
    }

    pub fn with_content(self, content: &str) -> Self {
        self.state().content = content.to_string();
        self
    }

    pub fn with_class(self, class_name: &str) -> Self {
        self.state().class_name = class_name.to_string();
        self
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.state()
            .attributes
            .insert(name.to_string(), value.to_string());
        self
    }

    fn state(&self) -> MutexGuard<'_, ElementState> {
        lock(&self.inner)
    }
}

impl Surface for Element {
    fn id(&self) -> Option<String> {
        self.state().id.clone()
    }

    fn content(&self) -> String {
        self.state().content.clone()
    }

    fn set_content(&self, content: String) {
        self.state().content = content;
    }

    fn class_name(&self) -> String {
        self.state().class_name.clone()
    }

    fn set_class_name(&self, class_name: String) {
        self.state().class_name = class_name;
    }

    fn style(&self, property: &str) -> Option<String> {
        self.state().styles.get(property).cloned()
    }

    fn set_style(&self, property: &str, value: &str) {
        let mut state = self.state();
        if value.is_empty() {
            state.styles.remove(property);
        } else {
            state.styles.insert(property.to_string(), value.to_string());
        }
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.state().attributes.contains_key(name)
    }
}
