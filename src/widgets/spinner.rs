//! Busy indicator that swaps a surface's content and restores it later

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, Weak},
};
use tracing::{debug, warn};

use crate::{
    dom::{Surface, SurfaceRef},
    utils::lock,
};

/// Message shown when the caller does not pass one
pub const DEFAULT_MESSAGE: &str = "⏳ Loading…";

/// Content and class list captured by `show`
#[derive(Debug)]
struct SavedState {
    surface: Weak<dyn Surface>,
    content: String,
    class_name: String,
}

/// Shows and hides a loading spinner inside any surface.
///
/// Saved state is keyed by surface identity and only holds weak references.
/// Entries for dropped surfaces are pruned on the next `show`/`hide`, or
/// right away through [`Spinner::forget_dropped`].
/// [`Page::remove_element`](crate::state::Page::remove_element) does the latter.
#[derive(Debug, Default)]
pub struct Spinner {
    saved: Mutex<HashMap<usize, SavedState>>,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save the surface's content and class list, then replace the content
    /// with the spinner markup.
    ///
    /// Showing twice without a `hide` in between saves the spinner markup
    /// itself, so the second `hide` cannot bring the original back.
    pub fn show(&self, surface: Option<&SurfaceRef>, message: Option<&str>) {
        let Some(surface) = surface else {
            debug!("Spinner show ignored: no surface");
            return;
        };

        {
            let mut saved = lock(&self.saved);
            prune(&mut saved);

            let previous = saved.insert(
                surface_key(surface),
                SavedState {
                    surface: Arc::downgrade(surface),
                    content: surface.content(),
                    class_name: surface.class_name(),
                },
            );
            if previous.is_some() {
                warn!("Spinner shown twice on {}; original content is lost", describe(surface));
            }
        }

        let message = message.filter(|m| !m.is_empty()).unwrap_or(DEFAULT_MESSAGE);
        surface.set_content(busy_markup(message));
        debug!("Spinner shown on {}", describe(surface));
    }

    /// Restore what `show` saved. Does nothing if nothing was saved.
    pub fn hide(&self, surface: Option<&SurfaceRef>) {
        let Some(surface) = surface else {
            debug!("Spinner hide ignored: no surface");
            return;
        };

        let restored = {
            let mut saved = lock(&self.saved);
            prune(&mut saved);
            saved.remove(&surface_key(surface))
        };

        match restored {
            Some(state) => {
                surface.set_content(state.content);
                surface.set_class_name(state.class_name);
                debug!("Spinner hidden on {}", describe(surface));
            }
            None => debug!("Spinner hide on {} without a saved state", describe(surface)),
        }
    }

    /// Release saved state of surfaces that no longer exist
    pub fn forget_dropped(&self) {
        prune(&mut lock(&self.saved));
    }

    /// Entries in the table, dead ones included
    #[cfg(test)]
    pub(crate) fn stored(&self) -> usize {
        lock(&self.saved).len()
    }

    /// Number of surfaces currently holding saved state
    #[cfg(test)]
    pub(crate) fn tracked(&self) -> usize {
        let mut saved = lock(&self.saved);
        prune(&mut saved);
        saved.len()
    }
}

/// Markup that replaces a surface's content while it is busy
pub fn busy_markup(message: &str) -> String {
    format!(
        r#"
    <div class="cjs-spinner-wrap">
        <div class="cjs-spinner"></div>
        <div class="cjs-spinner-text">{}</div>
    </div>"#,
        message
    )
}

fn surface_key(surface: &SurfaceRef) -> usize {
    Arc::as_ptr(surface) as *const () as usize
}

/// Drop entries whose surface no longer exists
fn prune(saved: &mut HashMap<usize, SavedState>) {
    let before = saved.len();
    saved.retain(|_, state| state.surface.strong_count() > 0);
    if saved.len() != before {
        debug!("Pruned {} spinner states of dropped surfaces", before - saved.len());
    }
}

fn describe(surface: &SurfaceRef) -> String {
    match surface.id() {
        Some(id) => format!("#{}", id),
        None => "anonymous surface".to_string(),
    }
}
