//! Auto-resize: fit the main container to the viewport in any orientation

use std::{sync::Arc, time::Duration};
use serde::Serialize;
use tokio::{runtime::Handle, task::JoinHandle, time::sleep};
use tracing::{debug, error};

use crate::dom::Document;

/// Viewports shorter than this in landscape count as a landscape phone
pub const SMALL_LANDSCAPE_MAX_HEIGHT: u32 = 500;
/// Upper bound for the container width on a landscape phone
pub const MAX_CONTAINER_WIDTH: f64 = 700.0;
/// Wait after an orientation change before measuring again
pub const ORIENTATION_SETTLE_DELAY: Duration = Duration::from_millis(350);

/// Inner size of the window in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Classification passed to the resize callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutInfo {
    pub vw: u32,
    pub vh: u32,
    pub is_landscape: bool,
    pub is_small_landscape: bool,
}

impl From<Viewport> for LayoutInfo {
    fn from(viewport: Viewport) -> Self {
        let is_landscape = viewport.width > viewport.height;
        Self {
            vw: viewport.width,
            vh: viewport.height,
            is_landscape,
            is_small_landscape: is_landscape && viewport.height < SMALL_LANDSCAPE_MAX_HEIGHT,
        }
    }
}

pub type ResizeCallback = Box<dyn Fn(LayoutInfo) + Send + Sync>;

/// Applies container constraints for the current viewport
pub struct AutoResize {
    callback: Option<ResizeCallback>,
}

impl AutoResize {
    pub fn new(callback: Option<ResizeCallback>) -> Self {
        Self { callback }
    }

    /// Constrain or release the main container, then notify the callback
    pub fn apply(&self, document: &Document, viewport: Viewport) -> LayoutInfo {
        let info = LayoutInfo::from(viewport);

        match document.query_container() {
            Some(container) if info.is_small_landscape => {
                let max_width = (f64::from(info.vw) * 0.99).min(MAX_CONTAINER_WIDTH);
                container.set_style("max-width", &format!("{}px", max_width));
                container.set_style("max-height", &format!("{}px", info.vh));
                container.set_style("overflow-y", "auto");
            }
            Some(container) => {
                container.set_style("max-width", "");
                container.set_style("max-height", "");
                container.set_style("overflow-y", "");
            }
            None => debug!("No page container found"),
        }

        debug!("Layout applied: {:?}", info);
        if let Some(callback) = &self.callback {
            callback(info);
        }
        info
    }

    /// Window resize: apply right away
    pub fn on_resize(&self, document: &Document, viewport: Viewport) -> LayoutInfo {
        self.apply(document, viewport)
    }

    /// Orientation change: apply once the new size has settled.
    ///
    /// Outside a tokio runtime there is nothing to wait on, so the layout is
    /// applied right away and `None` is returned.
    pub fn on_orientation_change(
        self: &Arc<Self>,
        document: Arc<Document>,
        viewport: Viewport,
    ) -> Option<JoinHandle<LayoutInfo>> {
        let Ok(runtime) = Handle::try_current() else {
            error!("No tokio runtime available, applying orientation change without delay");
            self.apply(&document, viewport);
            return None;
        };

        let resize = Arc::clone(self);
        Some(runtime.spawn(async move {
            sleep(ORIENTATION_SETTLE_DELAY).await;
            resize.apply(&document, viewport)
        }))
    }
}
