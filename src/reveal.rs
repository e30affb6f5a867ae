//! One-shot "reveal on scroll" state machine.
//!
//! A controller starts `Pending`. The first visibility report at or above
//! [`REVEAL_THRESHOLD`] arms a timer for the configured delay; when it fires the
//! controller becomes `Activated` for good. Releasing the controller drops the
//! timer handle, which cancels anything still outstanding.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::Callback;

use crate::config::REVEAL_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Activated,
}

/// What the observer reported for the tracked element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visibility {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl Visibility {
    pub fn crosses(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio >= threshold
    }
}

/// Runs a task after a delay. Dropping the returned handle cancels the task.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timers via `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

pub struct RevealController<S: Scheduler> {
    delay_ms: u32,
    state: Rc<Cell<RevealState>>,
    pending: RefCell<Option<S::Handle>>,
    scheduler: S,
    on_activate: Callback<()>,
}

impl<S: Scheduler> RevealController<S> {
    pub fn new(delay_ms: u32, scheduler: S, on_activate: Callback<()>) -> Self {
        Self {
            delay_ms,
            state: Rc::new(Cell::new(RevealState::Pending)),
            pending: RefCell::new(None),
            scheduler,
            on_activate,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state.get()
    }

    pub fn is_scheduled(&self) -> bool {
        self.state() == RevealState::Pending && self.pending.borrow().is_some()
    }

    /// Feeds one visibility report into the state machine.
    pub fn observe(&self, visibility: Visibility) {
        if self.state() == RevealState::Activated || self.pending.borrow().is_some() {
            return;
        }
        if !visibility.crosses(REVEAL_THRESHOLD) {
            return;
        }

        log::debug!(
            "Reveal triggered at ratio {:.2}, activating in {}ms",
            visibility.ratio,
            self.delay_ms
        );
        let state = self.state.clone();
        let on_activate = self.on_activate.clone();
        let handle = self.scheduler.schedule(
            self.delay_ms,
            Box::new(move || activate(&state, &on_activate)),
        );
        *self.pending.borrow_mut() = Some(handle);
    }

    /// Skips observation entirely, used when the element cannot be watched.
    pub fn activate_now(&self) {
        self.release();
        activate(&self.state, &self.on_activate);
    }

    /// Cancels a timer that has not fired yet. Safe to call repeatedly.
    pub fn release(&self) {
        if self.is_scheduled() {
            log::debug!("Reveal released before activation");
        }
        self.pending.borrow_mut().take();
    }
}

impl<S: Scheduler> Drop for RevealController<S> {
    fn drop(&mut self) {
        self.release();
    }
}

fn activate(state: &Cell<RevealState>, on_activate: &Callback<()>) {
    if state.get() == RevealState::Activated {
        return;
    }
    state.set(RevealState::Activated);
    on_activate.emit(());
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Task {
        due: u64,
        cancelled: Rc<Cell<bool>>,
        run: Option<Box<dyn FnOnce()>>,
    }

    /// Virtual clock: tasks only run when the test advances time.
    #[derive(Clone, Default)]
    struct ManualScheduler {
        now: Rc<Cell<u64>>,
        tasks: Rc<RefCell<Vec<Task>>>,
    }

    struct ManualHandle(Rc<Cell<bool>>);

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            self.tasks.borrow_mut().push(Task {
                due: self.now.get() + u64::from(delay_ms),
                cancelled: cancelled.clone(),
                run: Some(task),
            });
            ManualHandle(cancelled)
        }
    }

    impl ManualScheduler {
        fn advance(&self, ms: u64) {
            let target = self.now.get() + ms;
            loop {
                let next = {
                    let mut tasks = self.tasks.borrow_mut();
                    tasks
                        .iter_mut()
                        .filter(|t| t.run.is_some() && t.due <= target)
                        .min_by_key(|t| t.due)
                        .map(|t| (t.due, t.cancelled.get(), t.run.take()))
                };
                match next {
                    Some((due, cancelled, run)) => {
                        self.now.set(due);
                        if let (false, Some(run)) = (cancelled, run) {
                            run();
                        }
                    }
                    None => break,
                }
            }
            self.now.set(target);
        }

        fn outstanding(&self) -> usize {
            self.tasks
                .borrow()
                .iter()
                .filter(|t| t.run.is_some() && !t.cancelled.get())
                .count()
        }
    }

    const SEEN: Visibility = Visibility { is_intersecting: true, ratio: 0.5 };
    const GONE: Visibility = Visibility { is_intersecting: false, ratio: 0.0 };

    fn counting(counter: &Rc<Cell<u32>>) -> Callback<()> {
        let counter = counter.clone();
        Callback::from(move |_| counter.set(counter.get() + 1))
    }

    fn recording(log: &Rc<RefCell<Vec<&'static str>>>, name: &'static str) -> Callback<()> {
        let log = log.clone();
        Callback::from(move |_| log.borrow_mut().push(name))
    }

    #[test]
    fn starts_pending_and_ignores_invisible_reports() {
        let scheduler = ManualScheduler::default();
        let fired = Rc::new(Cell::new(0));
        let controller = RevealController::new(0, scheduler.clone(), counting(&fired));

        controller.observe(GONE);
        scheduler.advance(1_000);

        assert_eq!(controller.state(), RevealState::Pending);
        assert_eq!(fired.get(), 0);
        assert_eq!(scheduler.outstanding(), 0);
    }

    #[test]
    fn needs_the_threshold_ratio() {
        let scheduler = ManualScheduler::default();
        let fired = Rc::new(Cell::new(0));
        let controller = RevealController::new(0, scheduler.clone(), counting(&fired));

        controller.observe(Visibility { is_intersecting: true, ratio: 0.14 });
        scheduler.advance(10);
        assert_eq!(controller.state(), RevealState::Pending);

        controller.observe(Visibility { is_intersecting: true, ratio: REVEAL_THRESHOLD });
        scheduler.advance(0);
        assert_eq!(controller.state(), RevealState::Activated);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn zero_delay_still_goes_through_the_timer() {
        let scheduler = ManualScheduler::default();
        let fired = Rc::new(Cell::new(0));
        let controller = RevealController::new(0, scheduler.clone(), counting(&fired));

        controller.observe(SEEN);
        assert!(controller.is_scheduled());
        assert_eq!(controller.state(), RevealState::Pending);

        scheduler.advance(0);
        assert_eq!(controller.state(), RevealState::Activated);
        assert!(!controller.is_scheduled());
    }

    #[test]
    fn activates_after_the_delay() {
        let scheduler = ManualScheduler::default();
        let fired = Rc::new(Cell::new(0));
        let controller = RevealController::new(300, scheduler.clone(), counting(&fired));

        controller.observe(SEEN);
        scheduler.advance(299);
        assert_eq!(controller.state(), RevealState::Pending);
        scheduler.advance(1);
        assert_eq!(controller.state(), RevealState::Activated);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn shorter_delay_activates_first() {
        let scheduler = ManualScheduler::default();
        let order = Rc::new(RefCell::new(Vec::new()));
        let fast = RevealController::new(0, scheduler.clone(), recording(&order, "fast"));
        let slow = RevealController::new(300, scheduler.clone(), recording(&order, "slow"));

        // Same observer event reaches both.
        slow.observe(SEEN);
        fast.observe(SEEN);

        scheduler.advance(0);
        assert_eq!(fast.state(), RevealState::Activated);
        assert_eq!(slow.state(), RevealState::Pending);

        scheduler.advance(300);
        assert_eq!(*order.borrow(), vec!["fast", "slow"]);
    }

    #[test]
    fn repeated_reports_keep_a_single_timer() {
        let scheduler = ManualScheduler::default();
        let fired = Rc::new(Cell::new(0));
        let controller = RevealController::new(200, scheduler.clone(), counting(&fired));

        controller.observe(SEEN);
        controller.observe(GONE);
        controller.observe(SEEN);
        assert_eq!(scheduler.outstanding(), 1);

        scheduler.advance(500);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn leaving_the_viewport_does_not_cancel_a_triggered_reveal() {
        let scheduler = ManualScheduler::default();
        let fired = Rc::new(Cell::new(0));
        let controller = RevealController::new(100, scheduler.clone(), counting(&fired));

        controller.observe(SEEN);
        controller.observe(GONE);
        scheduler.advance(100);
        assert_eq!(controller.state(), RevealState::Activated);
    }

    #[test]
    fn activated_is_terminal() {
        let scheduler = ManualScheduler::default();
        let fired = Rc::new(Cell::new(0));
        let controller = RevealController::new(0, scheduler.clone(), counting(&fired));

        controller.observe(SEEN);
        scheduler.advance(0);

        for report in [GONE, SEEN, GONE, Visibility { is_intersecting: true, ratio: 0.01 }, SEEN] {
            controller.observe(report);
            scheduler.advance(1_000);
            assert_eq!(controller.state(), RevealState::Activated);
        }
        assert_eq!(fired.get(), 1);
        assert_eq!(scheduler.outstanding(), 0);
    }

    #[test]
    fn release_before_timer_fires_cancels_activation() {
        let scheduler = ManualScheduler::default();
        let fired = Rc::new(Cell::new(0));
        let controller = RevealController::new(300, scheduler.clone(), counting(&fired));

        controller.observe(SEEN);
        controller.release();
        scheduler.advance(1_000);

        assert_eq!(controller.state(), RevealState::Pending);
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn dropping_the_controller_cancels_its_timer() {
        let scheduler = ManualScheduler::default();
        let fired = Rc::new(Cell::new(0));
        {
            let controller = RevealController::new(300, scheduler.clone(), counting(&fired));
            controller.observe(SEEN);
            assert_eq!(scheduler.outstanding(), 1);
        }
        assert_eq!(scheduler.outstanding(), 0);
        scheduler.advance(1_000);
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn release_without_trigger_is_harmless() {
        let scheduler = ManualScheduler::default();
        let fired = Rc::new(Cell::new(0));
        let controller = RevealController::new(0, scheduler.clone(), counting(&fired));
        controller.release();
        controller.release();
        assert_eq!(controller.state(), RevealState::Pending);
    }

    #[test]
    fn fallback_activates_immediately_once() {
        let scheduler = ManualScheduler::default();
        let fired = Rc::new(Cell::new(0));
        let controller = RevealController::new(300, scheduler.clone(), counting(&fired));

        controller.observe(SEEN);
        controller.activate_now();
        assert_eq!(controller.state(), RevealState::Activated);

        scheduler.advance(1_000);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn instances_do_not_share_state() {
        let scheduler = ManualScheduler::default();
        let fired = Rc::new(Cell::new(0));
        let seen = RevealController::new(0, scheduler.clone(), counting(&fired));
        let unseen = RevealController::new(0, scheduler.clone(), counting(&fired));

        seen.observe(SEEN);
        scheduler.advance(0);

        assert_eq!(seen.state(), RevealState::Activated);
        assert_eq!(unseen.state(), RevealState::Pending);
        assert_eq!(fired.get(), 1);
    }
}
