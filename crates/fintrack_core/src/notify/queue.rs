//! Ordered, auto-expiring notification queue.
//!
//! # Responsibility
//! - Own the live toast list and its per-record expiry timers.
//! - Notify subscribers synchronously after every effective mutation.
//!
//! # Invariants
//! - Records keep insertion order; nothing is ever reordered.
//! - At most one record per id; ids come from a monotonic counter.
//! - Removing an absent id is a no-op, so timer/dismiss races are harmless.
//! - Removing a record drops its pending timer with it.

use crate::model::notification::{
    Notification, NotificationId, NotificationKind, DEFAULT_DURATION_MS,
};
use crate::notify::clock::Clock;
use log::debug;

/// Default presentation delay between `dismiss` and actual removal.
pub const DEFAULT_EXIT_DELAY_MS: u64 = 300;

/// Tunables for one queue instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueConfig {
    /// Auto-dismiss delay used when `add` gets `None` or `Some(0)`.
    pub default_duration_ms: u64,
    /// Exit-transition delay applied by `dismiss`.
    pub exit_delay_ms: u64,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: DEFAULT_DURATION_MS,
            exit_delay_ms: DEFAULT_EXIT_DELAY_MS,
        }
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Change listener; receives the fresh snapshot in display order.
pub type Listener = Box<dyn FnMut(&[Notification]) + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerKind {
    Expire,
    Exit,
}

struct Entry {
    record: Notification,
    deadline_ms: u64,
    timer: TimerKind,
}

/// Live notification list with injectable clock.
///
/// The host event loop drives timers by calling `poll_expired`, and can sleep
/// until `next_deadline` in between.
pub struct NotificationQueue<C: Clock> {
    clock: C,
    config: QueueConfig,
    entries: Vec<Entry>,
    next_sequence: u64,
    revision: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<C: Clock> NotificationQueue<C> {
    pub fn new(clock: C) -> Self {
        Self::with_config(clock, QueueConfig::default())
    }

    pub fn with_config(clock: C, config: QueueConfig) -> Self {
        Self {
            clock,
            config,
            entries: Vec::new(),
            next_sequence: 1,
            revision: 0,
            listeners: Vec::new(),
            next_subscription: 1,
        }
    }

    pub fn config(&self) -> QueueConfig {
        self.config
    }

    /// Appends a record at the tail and starts its expiry timer.
    ///
    /// `duration_ms` of `None` or `Some(0)` falls back to the configured
    /// default. Always succeeds.
    pub fn add(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: Option<&str>,
        duration_ms: Option<u64>,
    ) -> NotificationId {
        let duration_ms = match duration_ms {
            Some(0) | None => self.config.default_duration_ms.max(1),
            Some(value) => value,
        };
        let id = NotificationId::from_sequence(self.next_sequence);
        self.next_sequence += 1;

        let now = self.clock.now_ms();
        let record = Notification {
            id,
            kind,
            title: title.into(),
            message: message.map(str::to_string),
            duration_ms,
            created_at_ms: now,
        };
        let deadline_ms = record.expires_at_ms();
        self.entries.push(Entry {
            record,
            deadline_ms,
            timer: TimerKind::Expire,
        });

        debug!(
            "event=notification_add module=notify status=ok id={} kind={} duration_ms={}",
            id,
            kind.as_str(),
            duration_ms
        );
        self.publish();
        id
    }

    pub fn success(
        &mut self,
        title: impl Into<String>,
        message: Option<&str>,
        duration_ms: Option<u64>,
    ) -> NotificationId {
        self.add(NotificationKind::Success, title, message, duration_ms)
    }

    pub fn error(
        &mut self,
        title: impl Into<String>,
        message: Option<&str>,
        duration_ms: Option<u64>,
    ) -> NotificationId {
        self.add(NotificationKind::Error, title, message, duration_ms)
    }

    pub fn warning(
        &mut self,
        title: impl Into<String>,
        message: Option<&str>,
        duration_ms: Option<u64>,
    ) -> NotificationId {
        self.add(NotificationKind::Warning, title, message, duration_ms)
    }

    pub fn info(
        &mut self,
        title: impl Into<String>,
        message: Option<&str>,
        duration_ms: Option<u64>,
    ) -> NotificationId {
        self.add(NotificationKind::Info, title, message, duration_ms)
    }

    /// Removes a record immediately, cancelling its timer.
    ///
    /// Returns `false` (and notifies nobody) when the id is not live.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let Some(index) = self.position(id) else {
            debug!("event=notification_remove module=notify status=noop id={id}");
            return false;
        };
        self.entries.remove(index);
        debug!("event=notification_remove module=notify status=ok id={id}");
        self.publish();
        true
    }

    /// Starts the exit transition for a record.
    ///
    /// The record stays listed (flagged by `is_leaving`) until the configured
    /// exit delay elapses; its expiry timer is replaced by the exit timer.
    /// Returns `false` when the id is absent or already leaving.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if self.config.exit_delay_ms == 0 {
            return self.remove(id);
        }
        let now = self.clock.now_ms();
        let exit_delay_ms = self.config.exit_delay_ms;
        let Some(entry) = self.entries.iter_mut().find(|entry| entry.record.id == id) else {
            return false;
        };
        if entry.timer == TimerKind::Exit {
            return false;
        }
        entry.timer = TimerKind::Exit;
        entry.deadline_ms = now.saturating_add(exit_delay_ms);
        debug!(
            "event=notification_dismiss module=notify status=ok id={id} exit_delay_ms={exit_delay_ms}"
        );
        self.publish();
        true
    }

    /// Whether a live record is in its exit transition.
    pub fn is_leaving(&self, id: NotificationId) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.record.id == id && entry.timer == TimerKind::Exit)
    }

    /// Removes every record whose timer is due.
    ///
    /// Returns removed ids ordered by deadline (ties by creation order).
    /// Subscribers are notified once per call when anything was removed.
    pub fn poll_expired(&mut self) -> Vec<NotificationId> {
        let now = self.clock.now_ms();
        let mut due = self
            .entries
            .iter()
            .filter(|entry| entry.deadline_ms <= now)
            .map(|entry| (entry.deadline_ms, entry.record.id))
            .collect::<Vec<_>>();
        if due.is_empty() {
            return Vec::new();
        }
        due.sort_unstable();

        self.entries.retain(|entry| entry.deadline_ms > now);
        let removed = due.into_iter().map(|(_, id)| id).collect::<Vec<_>>();
        debug!(
            "event=notification_expire module=notify status=ok count={}",
            removed.len()
        );
        self.publish();
        removed
    }

    /// Earliest pending timer deadline, in clock milliseconds.
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.iter().map(|entry| entry.deadline_ms).min()
    }

    /// Current reading of the queue's clock; deadlines share this origin.
    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    /// Milliseconds until `next_deadline`, `Some(0)` when already due.
    pub fn next_due_in_ms(&self) -> Option<u64> {
        let now = self.clock.now_ms();
        self.next_deadline().map(|deadline| deadline.saturating_sub(now))
    }

    /// Drops every record and timer.
    pub fn clear(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.entries.clear();
        debug!("event=notification_clear module=notify status=ok");
        self.publish();
    }

    /// Read-only snapshot in display order.
    pub fn list(&self) -> Vec<Notification> {
        self.entries
            .iter()
            .map(|entry| entry.record.clone())
            .collect()
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.entries
            .iter()
            .find(|entry| entry.record.id == id)
            .map(|entry| &entry.record)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counter bumped on every effective mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Registers a change listener.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&[Notification]) + Send + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener; returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(current, _)| *current != id);
        self.listeners.len() != before
    }

    fn position(&self, id: NotificationId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.record.id == id)
    }

    fn publish(&mut self) {
        self.revision += 1;
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.list();
        for (_, listener) in self.listeners.iter_mut() {
            listener(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NotificationQueue, QueueConfig};
    use crate::model::notification::NotificationKind;
    use crate::notify::clock::ManualClock;

    #[test]
    fn zero_duration_uses_default() {
        let mut queue = NotificationQueue::new(ManualClock::new());
        let id = queue.info("hello", None, Some(0));
        assert_eq!(queue.get(id).map(|record| record.duration_ms), Some(5_000));
    }

    #[test]
    fn revision_tracks_effective_mutations_only() {
        let mut queue = NotificationQueue::new(ManualClock::new());
        let id = queue.add(NotificationKind::Success, "saved", None, None);
        assert_eq!(queue.revision(), 1);
        assert!(queue.remove(id));
        assert!(!queue.remove(id));
        assert_eq!(queue.revision(), 2);
    }

    #[test]
    fn next_deadline_reflects_earliest_timer() {
        let clock = ManualClock::starting_at(1_000);
        let mut queue = NotificationQueue::new(clock.clone());
        queue.info("slow", None, Some(8_000));
        queue.info("fast", None, Some(2_000));
        assert_eq!(queue.next_deadline(), Some(3_000));
    }

    #[test]
    fn zero_exit_delay_dismisses_immediately() {
        let config = QueueConfig {
            exit_delay_ms: 0,
            ..QueueConfig::default()
        };
        let mut queue = NotificationQueue::with_config(ManualClock::new(), config);
        let id = queue.warning("low balance", None, None);
        assert!(queue.dismiss(id));
        assert!(queue.is_empty());
    }
}
