use std::time::Duration;

use page_kit::{
    dom::{Element, ReadyState, Surface},
    format_elapsed, Page, RunState, Scheduler, Timer,
};
use tokio::time::sleep;

#[tokio::test(start_paused = true)]
async fn start_stop_reset_end_to_end() {
    let page = Page::new();
    let display = page.document.append(Element::new("timer"));
    assert_eq!(display.content(), "");

    let timer = page.timer("timer");
    assert_eq!(timer.value(), 0);
    assert_eq!(timer.run_state(), RunState::Stopped);

    timer.start();
    sleep(Duration::from_millis(2500)).await;
    assert_eq!(display.content(), "00:02");

    timer.stop();
    sleep(Duration::from_secs(3)).await;
    assert_eq!(display.content(), "00:02");
    assert_eq!(timer.value(), 2);

    timer.reset();
    assert_eq!(display.content(), "00:00");
    assert_eq!(timer.format(), "00:00");
}

#[tokio::test(start_paused = true)]
async fn any_start_stop_sequence_keeps_one_registration() {
    let scheduler = Scheduler::new();
    let timer = Timer::with_target(None, scheduler.clone());

    // start = true, stop = false
    let sequence = [true, true, false, true, false, false, true, true, true, false, true];
    for (step, start) in sequence.into_iter().enumerate() {
        if start {
            timer.start();
        } else {
            timer.stop();
        }
        assert!(scheduler.active_registrations() <= 1, "step {}", step);
        sleep(Duration::from_millis(300)).await;
        assert!(scheduler.active_registrations() <= 1, "step {}", step);
    }

    timer.reset();
    assert_eq!(scheduler.active_registrations(), 0);
}

#[tokio::test(start_paused = true)]
async fn resumes_from_where_it_stopped() {
    let timer = Timer::with_target(None, Scheduler::new());

    timer.start();
    sleep(Duration::from_millis(3500)).await;
    timer.stop();
    timer.start();
    sleep(Duration::from_millis(2500)).await;

    assert_eq!(timer.value(), 5);
}

#[tokio::test(start_paused = true)]
async fn timers_on_one_page_are_independent() {
    let page = Page::new();
    let left = page.document.append(Element::new("left"));
    let right = page.document.append(Element::new("right"));

    let a = page.timer("left");
    let b = page.timer("right");

    a.start();
    sleep(Duration::from_millis(1500)).await;
    b.start();
    sleep(Duration::from_millis(2200)).await;
    a.reset();

    assert_eq!(left.content(), "00:00");
    assert_eq!(right.content(), "00:02");
    assert!(b.is_running());
}

#[tokio::test(start_paused = true)]
async fn ready_callback_starts_timer() {
    let page = Page::new();
    page.document.append(Element::new("timer"));
    let timer = std::sync::Arc::new(page.timer("timer"));

    {
        let timer = std::sync::Arc::clone(&timer);
        page.document.ready(move || timer.start());
    }
    sleep(Duration::from_secs(2)).await;
    assert_eq!(timer.value(), 0);

    page.document.set_ready_state(ReadyState::Interactive);
    sleep(Duration::from_millis(1500)).await;
    assert_eq!(timer.value(), 1);
}

#[test]
fn format_examples() {
    assert_eq!(format_elapsed(0), "00:00");
    assert_eq!(format_elapsed(59), "00:59");
    assert_eq!(format_elapsed(60), "01:00");
    assert_eq!(format_elapsed(3661), "61:01");
}
