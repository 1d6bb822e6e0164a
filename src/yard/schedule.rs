//! Deterministic queue of deferred events, drained once per tick.
use std::{collections::BTreeMap, time::Duration};

/// Work the host would otherwise run from free-running timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredEvent {
    SpawnFood,
    ExpireToast,
}

/// Handle returned by [`DeferredSchedule::schedule`], used to cancel the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScheduleHandle {
    due: Duration,
    sequence: u64,
}

impl ScheduleHandle {
    pub fn due(&self) -> Duration {
        self.due
    }
}

/// Events ordered by due time, then by the order they were scheduled.
#[derive(Debug, Clone, Default)]
pub struct DeferredSchedule {
    pending: BTreeMap<ScheduleHandle, DeferredEvent>,
    next_sequence: u64,
}

impl DeferredSchedule {
    pub fn schedule(&mut self, due: Duration, event: DeferredEvent) -> ScheduleHandle {
        let handle = ScheduleHandle {
            due,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.pending.insert(handle, event);
        handle
    }

    /// Returns `true` if the event was still pending.
    pub fn cancel(&mut self, handle: ScheduleHandle) -> bool {
        self.pending.remove(&handle).is_some()
    }

    /// Pops the earliest event due at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<(ScheduleHandle, DeferredEvent)> {
        let (handle, _) = self.pending.first_key_value()?;
        if handle.due > now {
            return None;
        }
        self.pending.pop_first()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn drains_in_due_then_insertion_order() {
        let mut schedule = DeferredSchedule::default();
        schedule.schedule(ms(500), DeferredEvent::SpawnFood);
        schedule.schedule(ms(100), DeferredEvent::ExpireToast);
        schedule.schedule(ms(100), DeferredEvent::SpawnFood);

        assert!(schedule.pop_due(ms(99)).is_none());

        let drained: Vec<_> = std::iter::from_fn(|| schedule.pop_due(ms(100)))
            .map(|(_, event)| event)
            .collect();
        assert_eq!(
            drained,
            vec![DeferredEvent::ExpireToast, DeferredEvent::SpawnFood]
        );
        assert_eq!(schedule.len(), 1);
    }

    #[test]
    fn cancelled_events_never_fire() {
        let mut schedule = DeferredSchedule::default();
        let handle = schedule.schedule(ms(10), DeferredEvent::ExpireToast);
        assert_eq!(handle.due(), ms(10));
        assert!(schedule.cancel(handle));
        assert!(!schedule.cancel(handle));
        assert!(schedule.pop_due(ms(1_000)).is_none());
        assert!(schedule.is_empty());
    }
}
