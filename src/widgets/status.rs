//! Success / error / info messages on a status surface

use serde::Serialize;
use tracing::debug;

use crate::dom::{SurfaceLookup, Target};

/// Kind of status message, also its CSS class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Error,
    Info,
}

impl StatusKind {
    pub const ALL: [StatusKind; 3] = [StatusKind::Success, StatusKind::Error, StatusKind::Info];

    pub fn class(self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
            StatusKind::Info => "info",
        }
    }
}

/// Show `message` with the class of `kind`, dropping the other status classes
pub fn show<'a>(
    lookup: &dyn SurfaceLookup,
    target: impl Into<Target<'a>>,
    kind: StatusKind,
    message: &str,
) {
    let target: Target<'a> = target.into();
    let Some(surface) = target.resolve(lookup) else {
        debug!("Status target not found, {} message dropped", kind.class());
        return;
    };

    surface.set_text(message);
    let others: Vec<&str> = StatusKind::ALL
        .iter()
        .filter(|k| **k != kind)
        .map(|k| k.class())
        .collect();
    surface.remove_classes(&others);
    surface.add_class(kind.class());
}

pub fn success<'a>(lookup: &dyn SurfaceLookup, target: impl Into<Target<'a>>, message: &str) {
    show(lookup, target, StatusKind::Success, message);
}

pub fn error<'a>(lookup: &dyn SurfaceLookup, target: impl Into<Target<'a>>, message: &str) {
    show(lookup, target, StatusKind::Error, message);
}

pub fn info<'a>(lookup: &dyn SurfaceLookup, target: impl Into<Target<'a>>, message: &str) {
    show(lookup, target, StatusKind::Info, message);
}

/// Empty the text and remove every status class
pub fn clear<'a>(lookup: &dyn SurfaceLookup, target: impl Into<Target<'a>>) {
    let target: Target<'a> = target.into();
    let Some(surface) = target.resolve(lookup) else {
        return;
    };

    surface.set_text("");
    let all: Vec<&str> = StatusKind::ALL.iter().map(|k| k.class()).collect();
    surface.remove_classes(&all);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Document, Element, Surface};

    #[test]
    fn kinds_replace_each_other() {
        let doc = Document::new();
        let status = doc.append(Element::new("status").with_class("banner"));

        success(&doc, "status", "🎉 You won!");
        assert_eq!(status.content(), "🎉 You won!");
        assert_eq!(status.class_name(), "banner success");

        error(&doc, "status", "Wrong answer!");
        assert_eq!(status.class_name(), "banner error");

        info(&doc, &status, "Try again");
        assert_eq!(status.content(), "Try again");
        assert_eq!(status.class_name(), "banner info");
    }

    #[test]
    fn repeating_a_kind_keeps_one_class() {
        let doc = Document::new();
        let status = doc.append(Element::new("status"));

        info(&doc, "status", "one");
        info(&doc, "status", "two");
        assert_eq!(status.class_name(), "info");
    }

    #[test]
    fn clear_keeps_unrelated_classes() {
        let doc = Document::new();
        let status = doc.append(Element::new("status").with_class("banner success"));
        status.set_text("done");

        clear(&doc, "status");
        assert_eq!(status.content(), "");
        assert_eq!(status.class_name(), "banner");
    }

    #[test]
    fn missing_target_is_ignored() {
        let doc = Document::new();
        success(&doc, "nowhere", "ok");
        clear(&doc, "nowhere");
    }
}
