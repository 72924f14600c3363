//! Notification inbox state and the background poller that keeps it fresh.

use std::sync::Arc;
use std::time::Duration;

use attest_client::{ApiClient, ApiError};
use attest_core::entities::Notification;
use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Unread notifications plus the unread counter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Inbox {
    pub unread: Vec<Notification>,
    pub unread_count: u64,
}

impl Inbox {
    #[must_use]
    pub const fn new(unread: Vec<Notification>, unread_count: u64) -> Self {
        Self {
            unread,
            unread_count,
        }
    }

    /// Drop a notification after it was marked read. Returns whether it was
    /// in the inbox. The counter never goes below zero.
    pub fn mark_read(&mut self, id: u64) -> bool {
        let before = self.unread.len();
        self.unread.retain(|notification| notification.id != id);
        let removed = self.unread.len() != before;
        self.unread_count = self.unread_count.saturating_sub(1);
        removed
    }

    pub fn mark_all_read(&mut self) {
        self.unread.clear();
        self.unread_count = 0;
    }

    /// Fetch the unread list and counter for `user_id`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ApiError`] of the two requests.
    pub async fn fetch(client: &ApiClient, user_id: u64) -> Result<Self, ApiError> {
        let (unread, count) = tokio::try_join!(
            client.unread_notifications(user_id),
            client.unread_count(user_id)
        )?;
        Ok(Self::new(unread, count))
    }
}

/// Mark one notification read on the server, then locally.
///
/// # Errors
///
/// Returns [`ApiError`] if the server call fails; the inbox is then left as is.
pub async fn mark_read(client: &ApiClient, inbox: &mut Inbox, id: u64) -> Result<(), ApiError> {
    client.mark_notification_read(id).await?;
    inbox.mark_read(id);
    Ok(())
}

/// # Errors
///
/// Returns [`ApiError`] if the server call fails; the inbox is then left as is.
pub async fn mark_all_read(
    client: &ApiClient,
    inbox: &mut Inbox,
    user_id: u64,
) -> Result<(), ApiError> {
    client.mark_all_notifications_read(user_id).await?;
    inbox.mark_all_read();
    Ok(())
}

/// Polls the inbox immediately and then on every tick until stopped.
///
/// Snapshots are published on a watch channel; `None` until the first
/// successful poll. Failed polls are logged and otherwise ignored.
pub struct NotificationPoller {
    snapshots: watch::Receiver<Option<Inbox>>,
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl NotificationPoller {
    #[must_use]
    pub fn spawn(client: Arc<ApiClient>, user_id: u64, interval: Duration) -> Self {
        let (snapshot_tx, snapshots) = watch::channel(None);
        let (shutdown, mut shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    changed = shutdown_rx.changed() => {
                        if changed.is_err() || *shutdown_rx.borrow() {
                            tracing::debug!("notification poller stopping");
                            break;
                        }
                    }
                    _ = ticker.tick() => {
                        match Inbox::fetch(&client, user_id).await {
                            Ok(inbox) => {
                                snapshot_tx.send_replace(Some(inbox));
                            }
                            Err(error) => {
                                tracing::warn!(%error, user_id, "notification poll failed");
                            }
                        }
                    }
                }
            }
        });
        Self {
            snapshots,
            shutdown,
            task,
        }
    }

    /// A receiver that sees every published snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Inbox>> {
        self.snapshots.clone()
    }

    /// Latest snapshot, if a poll has succeeded.
    #[must_use]
    pub fn latest(&self) -> Option<Inbox> {
        self.snapshots.borrow().clone()
    }

    /// Stop polling and wait for the task to finish.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        if let Err(error) = self.task.await {
            tracing::warn!(%error, "notification poller task failed");
        }
    }
}
