//! In-memory store of transient user-facing notifications.
//!
//! The center owns an ordered active set and the expiry timers attached to
//! it. Each notification gets a process-unique, monotonically assigned id;
//! removal (manual or by timer, whichever fires first) is terminal and
//! idempotent, so a stale timer firing after a manual dismissal or a
//! `clear` has no observable effect.
//!
//! Other components talk to the center through cloneable
//! [`NotificationHandle`]s backed by a weak reference; using a handle after
//! the center has been dropped fails loudly with [`NotificationGone`]
//! instead of silently doing nothing, so integration bugs surface
//! immediately.

use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use marquee_bridge::notification::{NotificationCategory, NotificationMessage};
use tokio::time::Instant;

/// Default lifetime of an auto-expiring notification.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

/// One active notification. Immutable once created.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Process-unique id, assigned in increasing order starting at 1.
    pub id: u64,
    /// The text to display.
    pub message: String,
    /// Category driving the presentation.
    pub category: NotificationCategory,
    /// Absolute expiry time; `None` means the notification persists until
    /// it is dismissed manually.
    pub expires_at: Option<Instant>,
}

#[derive(Debug)]
struct ActiveSet {
    next_id: u64,
    items: Vec<Notification>,
}

/// The error returned by handle operations after the center was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("notification center is no longer running")]
pub struct NotificationGone;

/// Owner of the active set. Dropping the center tears the whole mechanism
/// down: timers become no-ops and outstanding handles start erroring.
pub struct NotificationCenter {
    inner: Arc<Mutex<ActiveSet>>,
    default_duration: Duration,
}

/// Cloneable accessor to a [`NotificationCenter`], safe to hand to any
/// component that wants to publish or dismiss notifications.
#[derive(Clone)]
pub struct NotificationHandle {
    inner: Weak<Mutex<ActiveSet>>,
    default_duration: Duration,
}

impl NotificationCenter {
    pub fn new(default_duration: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ActiveSet {
                next_id: 1,
                items: Vec::new(),
            })),
            default_duration,
        }
    }

    /// Creates a weak accessor bound to this center's lifetime.
    pub fn handle(&self) -> NotificationHandle {
        NotificationHandle {
            inner: Arc::downgrade(&self.inner),
            default_duration: self.default_duration,
        }
    }

    /// Changes the default lifetime applied by [`NotificationCenter::post`].
    /// Handles created before the change keep the old default.
    pub fn set_default_duration(&mut self, duration: Duration) {
        self.default_duration = duration;
    }

    /// Appends a notification to the active set and returns its id.
    ///
    /// `duration: Some(d)` schedules a one-shot timer that removes the
    /// notification after `d`; `None` makes it persist until dismissed.
    pub fn add(
        &self,
        message: impl Into<String>,
        category: NotificationCategory,
        duration: Option<Duration>,
    ) -> u64 {
        add_to(&self.inner, message.into(), category, duration)
    }

    /// Adds a bridge notification payload with the default lifetime.
    pub fn post(&self, notification: NotificationMessage) -> u64 {
        self.add(
            notification.message,
            notification.category,
            Some(self.default_duration),
        )
    }

    /// Removes a notification by id. Removing an unknown or already-removed
    /// id is a no-op.
    pub fn remove(&self, id: u64) {
        remove_from(&self.inner, id);
    }

    /// Removes all active notifications immediately. Pending timers are
    /// left alone; their eventual `remove` hits an empty set and does
    /// nothing.
    pub fn clear(&self) {
        self.inner
            .lock()
            .expect("notification set lock poisoned")
            .items
            .clear();
    }

    /// A copy of the active set in insertion order.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.inner
            .lock()
            .expect("notification set lock poisoned")
            .items
            .clone()
    }
}

impl NotificationHandle {
    fn upgrade(&self) -> Result<Arc<Mutex<ActiveSet>>, NotificationGone> {
        self.inner.upgrade().ok_or(NotificationGone)
    }

    /// See [`NotificationCenter::add`].
    pub fn add(
        &self,
        message: impl Into<String>,
        category: NotificationCategory,
        duration: Option<Duration>,
    ) -> Result<u64, NotificationGone> {
        let inner = self.upgrade()?;
        Ok(add_to(&inner, message.into(), category, duration))
    }

    /// See [`NotificationCenter::post`].
    pub fn post(&self, notification: NotificationMessage) -> Result<u64, NotificationGone> {
        self.add(
            notification.message,
            notification.category,
            Some(self.default_duration),
        )
    }

    /// See [`NotificationCenter::remove`].
    pub fn remove(&self, id: u64) -> Result<(), NotificationGone> {
        remove_from(&self.upgrade()?, id);
        Ok(())
    }

    /// See [`NotificationCenter::clear`].
    pub fn clear(&self) -> Result<(), NotificationGone> {
        self.upgrade()?
            .lock()
            .expect("notification set lock poisoned")
            .items
            .clear();
        Ok(())
    }

    /// See [`NotificationCenter::snapshot`].
    pub fn snapshot(&self) -> Result<Vec<Notification>, NotificationGone> {
        Ok(self
            .upgrade()?
            .lock()
            .expect("notification set lock poisoned")
            .items
            .clone())
    }
}

fn add_to(
    inner: &Arc<Mutex<ActiveSet>>,
    message: String,
    category: NotificationCategory,
    duration: Option<Duration>,
) -> u64 {
    let id = {
        let mut set = inner.lock().expect("notification set lock poisoned");
        let id = set.next_id;
        set.next_id += 1;
        set.items.push(Notification {
            id,
            message,
            category,
            expires_at: duration.map(|d| Instant::now() + d),
        });
        id
    };

    if let Some(duration) = duration {
        // The timer holds only a weak reference so a dropped center cannot
        // be resurrected by stragglers.
        let weak = Arc::downgrade(inner);
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            if let Some(inner) = weak.upgrade() {
                remove_from(&inner, id);
            }
        });
    }

    id
}

fn remove_from(inner: &Arc<Mutex<ActiveSet>>, id: u64) {
    inner
        .lock()
        .expect("notification set lock poisoned")
        .items
        .retain(|n| n.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Lets the removal tasks spawned by expired timers run to completion
    /// on the test runtime.
    async fn settle() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    fn active_ids(center: &NotificationCenter) -> Vec<u64> {
        center.snapshot().iter().map(|n| n.id).collect()
    }

    #[tokio::test]
    async fn ids_start_at_one_and_never_repeat() {
        let center = NotificationCenter::new(DEFAULT_DURATION);
        let a = center.add("first", NotificationCategory::Info, None);
        let b = center.add("second", NotificationCategory::Info, None);
        assert_eq!((a, b), (1, 2));

        center.remove(a);
        let c = center.add("third", NotificationCategory::Info, None);
        // removed ids are never reused
        assert_eq!(c, 3);
        assert_eq!(active_ids(&center), vec![2, 3]);
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let center = NotificationCenter::new(DEFAULT_DURATION);
        let id = center.add("once", NotificationCategory::Info, None);
        center.remove(id);
        center.remove(id);
        center.remove(999);
        assert!(center.snapshot().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn finite_duration_expires_exactly_once_after_the_delay() {
        let center = NotificationCenter::new(DEFAULT_DURATION);
        let id = center.add(
            "Saved",
            NotificationCategory::Success,
            Some(Duration::from_millis(3000)),
        );
        assert_eq!(id, 1);

        tokio::time::advance(Duration::from_millis(2999)).await;
        settle().await;
        assert_eq!(active_ids(&center), vec![1]);

        tokio::time::advance(Duration::from_millis(2)).await;
        settle().await;
        assert!(center.snapshot().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn manual_removal_wins_over_the_timer() {
        let center = NotificationCenter::new(DEFAULT_DURATION);
        let id = center.add(
            "going away",
            NotificationCategory::Info,
            Some(Duration::from_millis(100)),
        );
        center.remove(id);
        assert!(center.snapshot().is_empty());

        // the timer still fires, but has nothing left to do
        tokio::time::advance(Duration::from_millis(200)).await;
        settle().await;
        assert!(center.snapshot().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn unbounded_notifications_persist_until_dismissed() {
        let center = NotificationCenter::new(DEFAULT_DURATION);
        let id = center.add("sticky", NotificationCategory::Warning, None);

        tokio::time::advance(Duration::from_secs(3600)).await;
        settle().await;
        assert_eq!(active_ids(&center), vec![id]);

        center.remove(id);
        assert!(center.snapshot().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn clear_empties_everything_and_stale_timers_are_harmless() {
        let center = NotificationCenter::new(DEFAULT_DURATION);
        center.add("a", NotificationCategory::Info, Some(Duration::from_millis(500)));
        center.add("b", NotificationCategory::Error, None);
        center.add("c", NotificationCategory::Success, Some(Duration::from_millis(900)));

        center.clear();
        assert!(center.snapshot().is_empty());

        let after = center.add("d", NotificationCategory::Info, None);
        assert_eq!(after, 4);

        tokio::time::advance(Duration::from_secs(2)).await;
        settle().await;
        // the cleared ids' timers fired without touching the survivor
        assert_eq!(active_ids(&center), vec![4]);
    }

    #[tokio::test]
    async fn insertion_order_is_display_order() {
        let center = NotificationCenter::new(DEFAULT_DURATION);
        center.add("first", NotificationCategory::Info, None);
        center.add("second", NotificationCategory::Info, None);
        center.add("third", NotificationCategory::Info, None);
        center.remove(2);

        let messages: Vec<_> = center
            .snapshot()
            .iter()
            .map(|n| n.message.clone())
            .collect();
        assert_eq!(messages, vec!["first", "third"]);
    }

    #[tokio::test]
    async fn handles_fail_loudly_after_the_center_is_gone() {
        let center = NotificationCenter::new(DEFAULT_DURATION);
        let handle = center.handle();
        assert_eq!(
            handle.add("still here", NotificationCategory::Info, None),
            Ok(1)
        );

        drop(center);
        assert_eq!(
            handle.add("too late", NotificationCategory::Info, None),
            Err(NotificationGone)
        );
        assert_eq!(handle.remove(1), Err(NotificationGone));
        assert_eq!(handle.clear(), Err(NotificationGone));
    }
}
