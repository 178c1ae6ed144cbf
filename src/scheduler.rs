//! Delayed Tasks
//!
//! Transient overlays and chatbot replies are restored/shown through a
//! `Scheduler`, so tests can drive time by hand.

/// Run a task once after a delay
pub trait Scheduler {
    fn schedule(&self, after_ms: u32, task: Box<dyn FnOnce()>);
}

/// Browser timers via `setTimeout`
#[derive(Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, after_ms: u32, task: Box<dyn FnOnce()>) {
        gloo_timers::callback::Timeout::new(after_ms, task).forget();
    }
}
