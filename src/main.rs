//! Page Kit - shared presentation helpers for front-end pages
//!
//! This binary drives the helpers against an in-memory page: it shows the
//! spinner, runs the timer until a deadline or a shutdown signal, and then
//! restores the page.

use std::{sync::Arc, time::Duration};
use tokio::time::sleep;
use tracing::{debug, error, info};

use page_kit::{
    config::Config,
    dom::{Element, ReadyState, Surface},
    state::Page,
    utils::shutdown_signal,
    widgets::{status, AutoResize, LayoutInfo, Viewport},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("page_kit={}", config.log_level()))
        .init();

    info!("Starting page-kit demo v1.0.0");
    info!("Configuration: seconds={}, viewport={}x{}",
          config.seconds, config.width, config.height);

    let page = Page::new();
    let document = Arc::clone(&page.document);

    document.inject_base_styles();
    document.append(Element::new("main").with_class("game-container"));
    document.append(Element::new("timer").with_content("--:--"));
    document.append(Element::new("status"));
    document.append(
        Element::new("board")
            .with_class("game-grid")
            .with_content("<div class=\"cell\"></div>"),
    );

    let resize = AutoResize::new(Some(Box::new(|layout: LayoutInfo| {
        debug!("Resized: {}x{} landscape={} small={}",
               layout.vw, layout.vh, layout.is_landscape, layout.is_small_landscape);
    })));
    resize.apply(&document, Viewport::new(config.width, config.height));

    let timer = Arc::new(page.timer("timer"));
    {
        let timer = Arc::clone(&timer);
        document.ready(move || timer.start());
    }

    page.show_spinner("board", config.message.as_deref());
    status::info(&*document, "status", "Working…");
    document.set_ready_state(ReadyState::Interactive);

    let mut updates = timer.subscribe();
    let deadline = sleep(Duration::from_secs(config.seconds));
    let shutdown = shutdown_signal();
    tokio::pin!(deadline);
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut deadline => {
                info!("Demo deadline reached");
                break;
            }
            result = &mut shutdown => {
                match result {
                    Ok(signal) => info!("Shutdown signal {} received", signal),
                    Err(e) => error!("Signal handling failed: {}", e),
                }
                break;
            }
            Ok(()) = updates.changed() => {
                let state = updates.borrow_and_update().clone();
                info!("Timer: {}", state.display);
            }
        }
    }

    timer.stop();
    page.hide_spinner("board");
    status::success(
        &*document,
        "status",
        &format!("Finished in {}", timer.format()),
    );

    let report = serde_json::json!({
        "timer": timer.snapshot(),
        "ready_state": document.ready_state(),
        "status": document.get_element_by_id("status").map(|s| s.content()),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    timer.reset();
    info!("Demo complete");
    Ok(())
}
