//! Single-slot transient message.
use std::time::Duration;

use super::schedule::{DeferredEvent, DeferredSchedule, ScheduleHandle};

pub const HOP: &str = "Hop!";
pub const CHOMP: &str = "Chomp! +food";
pub const SHARED_WITH_MATE: &str = "Shared with mate <3 +affection";
pub const TRASH_TIPPED: &str = "Trash tipped! +mischief";
pub const FEEDER_SHAKEN: &str = "You shook the feeder! +mischief";
pub const PICNIC_SWIPED: &str = "Swiped from picnic! +mischief";
pub const FAMILY_STARTED: &str = "You started a raccoon family!";

/// The message currently on screen and its pending expiry.
#[derive(Debug, Clone, Default)]
pub struct ToastState {
    message: String,
    expiry: Option<ScheduleHandle>,
}

impl ToastState {
    /// Current message, empty when nothing is shown.
    pub fn message(&self) -> &str {
        &self.message
    }

    #[allow(dead_code)]
    pub fn is_visible(&self) -> bool {
        !self.message.is_empty()
    }

    /// When the current message disappears, if one is pending.
    #[allow(dead_code)]
    pub fn expires_at(&self) -> Option<Duration> {
        self.expiry.map(|handle| handle.due())
    }

    /// Replaces the message and restarts the expiry window.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        now: Duration,
        duration: Duration,
        schedule: &mut DeferredSchedule,
    ) {
        if let Some(previous) = self.expiry.take() {
            schedule.cancel(previous);
        }
        self.message = message.into();
        self.expiry = Some(schedule.schedule(now + duration, DeferredEvent::ExpireToast));
    }

    /// Clears the message if `handle` is the expiry currently armed.
    pub fn expire(&mut self, handle: ScheduleHandle) {
        if self.expiry == Some(handle) {
            self.expiry = None;
            self.message.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(1200);

    fn drain(toast: &mut ToastState, schedule: &mut DeferredSchedule, now: Duration) {
        while let Some((handle, event)) = schedule.pop_due(now) {
            if event == DeferredEvent::ExpireToast {
                toast.expire(handle);
            }
        }
    }

    #[test]
    fn message_expires_after_the_window() {
        let mut schedule = DeferredSchedule::default();
        let mut toast = ToastState::default();
        toast.show(CHOMP, Duration::ZERO, WINDOW, &mut schedule);
        assert_eq!(toast.message(), CHOMP);
        assert_eq!(toast.expires_at(), Some(WINDOW));

        drain(&mut toast, &mut schedule, Duration::from_millis(1199));
        assert!(toast.is_visible());

        drain(&mut toast, &mut schedule, WINDOW);
        assert!(!toast.is_visible());
        assert_eq!(toast.expires_at(), None);
    }

    #[test]
    fn newer_message_overwrites_and_restarts_window() {
        let mut schedule = DeferredSchedule::default();
        let mut toast = ToastState::default();
        toast.show(CHOMP, Duration::ZERO, WINDOW, &mut schedule);
        toast.show(
            SHARED_WITH_MATE,
            Duration::from_millis(1000),
            WINDOW,
            &mut schedule,
        );
        assert_eq!(schedule.len(), 1);

        drain(&mut toast, &mut schedule, Duration::from_millis(1500));
        assert_eq!(toast.message(), SHARED_WITH_MATE);

        drain(&mut toast, &mut schedule, Duration::from_millis(2200));
        assert!(!toast.is_visible());
    }
}
