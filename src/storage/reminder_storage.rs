use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{Reminder, ReminderId, ReminderStatus};

use super::model::{DecodeError, ReminderRow, StoredReminder, status_label};

/// Narrow query surface over the hosted reminder table.
#[async_trait]
pub trait ReminderStorage: Send + Sync {
    async fn get(&self, id: ReminderId) -> anyhow::Result<Option<Reminder>>;

    /// Reminders of pets owned by `owner_id` that are not completed, sorted
    /// by due date ascending.
    async fn get_pending_for_owner(&self, owner_id: &str) -> anyhow::Result<Vec<Reminder>>;

    async fn mark_completed(&self, id: ReminderId) -> anyhow::Result<()>;
}

pub struct InMemoryReminderStorage {
    store: RwLock<Vec<StoredReminder>>,
}

impl Default for InMemoryReminderStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryReminderStorage {
    pub fn new() -> Self {
        InMemoryReminderStorage {
            store: RwLock::new(Vec::new()),
        }
    }

    pub fn from_rows(rows: Vec<ReminderRow>) -> Result<Self, DecodeError> {
        let stored = rows
            .into_iter()
            .map(StoredReminder::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        log::info!("Loaded {} reminders", stored.len());
        Ok(Self {
            store: RwLock::new(stored),
        })
    }

    pub async fn insert(&self, reminder: StoredReminder) -> anyhow::Result<ReminderId> {
        let mut store = self.store.write().await;
        let id = reminder.reminder.id;
        if store.iter().any(|stored| stored.reminder.id == id) {
            anyhow::bail!("Reminder {id} already exists");
        }

        store.push(reminder);
        Ok(id)
    }
}

#[async_trait]
impl ReminderStorage for InMemoryReminderStorage {
    async fn get(&self, id: ReminderId) -> anyhow::Result<Option<Reminder>> {
        let store = self.store.read().await;
        Ok(store
            .iter()
            .find(|stored| stored.reminder.id == id)
            .map(|stored| stored.reminder.clone()))
    }

    async fn get_pending_for_owner(&self, owner_id: &str) -> anyhow::Result<Vec<Reminder>> {
        let store = self.store.read().await;
        let mut reminders: Vec<Reminder> = store
            .iter()
            .filter(|stored| stored.owner_id == owner_id)
            .filter(|stored| stored.status != ReminderStatus::Completed)
            .map(|stored| stored.reminder.clone())
            .collect();

        reminders.sort_by_key(|reminder| (reminder.next_due_date, reminder.id));
        Ok(reminders)
    }

    async fn mark_completed(&self, id: ReminderId) -> anyhow::Result<()> {
        let mut store = self.store.write().await;
        match store.iter_mut().find(|stored| stored.reminder.id == id) {
            Some(stored) => {
                log::info!(
                    "Reminder {id} moved from {} to {}",
                    status_label(stored.status),
                    status_label(ReminderStatus::Completed)
                );
                stored.status = ReminderStatus::Completed;
                Ok(())
            }
            None => anyhow::bail!("Reminder {id} does not exist"),
        }
    }
}
