use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    alerts::{AlertWindow, HealthAlert, assemble_health_alerts},
    storage::ReminderStorage,
};

/// Fetches an owner's open reminders and keeps the ones that need attention.
pub struct HealthAlertService {
    storage: Arc<dyn ReminderStorage>,
    window: AlertWindow,
}

impl HealthAlertService {
    pub fn new(storage: Arc<dyn ReminderStorage>, window: AlertWindow) -> Self {
        Self { storage, window }
    }

    pub async fn alerts_for_owner(
        &self,
        owner_id: &str,
        now: DateTime<Utc>,
    ) -> anyhow::Result<Vec<HealthAlert>> {
        let reminders = self.storage.get_pending_for_owner(owner_id).await?;
        let total = reminders.len();
        let alerts = assemble_health_alerts(reminders, &self.window, now);

        log::info!(
            "Owner {owner_id}: {} of {total} open reminders need attention",
            alerts.len()
        );
        Ok(alerts)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone};

    use super::*;
    use crate::{
        alerts::DueStatus,
        models::{Reminder, ReminderStatus},
        storage::{InMemoryReminderStorage, StoredReminder},
    };

    fn stored(id: i64, owner: &str, status: ReminderStatus, due: NaiveDate) -> StoredReminder {
        StoredReminder {
            owner_id: owner.to_string(),
            status,
            reminder: Reminder {
                id,
                vaccine_name: "Leptospirosis".to_string(),
                next_due_date: due,
                pet_id: id,
                pet_name: format!("Pet {id}"),
                pet_image_url: None,
            },
        }
    }

    #[tokio::test]
    async fn alerts_come_back_in_due_order_with_status() {
        let storage = Arc::new(InMemoryReminderStorage::new());
        let day = |d| NaiveDate::from_ymd_opt(2025, 5, d).unwrap();
        for reminder in [
            stored(1, "sam", ReminderStatus::Pending, day(28)),
            stored(2, "sam", ReminderStatus::Pending, day(2)),
            stored(3, "sam", ReminderStatus::Completed, day(1)),
            stored(4, "kai", ReminderStatus::Pending, day(3)),
        ] {
            storage.insert(reminder).await.unwrap();
        }

        let service = HealthAlertService::new(storage.clone(), AlertWindow::days(14));
        let now = Utc.with_ymd_and_hms(2025, 5, 10, 9, 0, 0).unwrap();

        let alerts = service.alerts_for_owner("sam", now).await.unwrap();

        // Reminder 1 is due 18 days out, past the 14 day window.
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].reminder.id, 2);
        assert_eq!(alerts[0].status, DueStatus::Overdue);

        storage.mark_completed(2).await.unwrap();
        assert!(service.alerts_for_owner("sam", now).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_owner_has_no_alerts() {
        let service = HealthAlertService::new(
            Arc::new(InMemoryReminderStorage::new()),
            AlertWindow::default(),
        );

        let alerts = service.alerts_for_owner("nobody", Utc::now()).await.unwrap();

        assert!(alerts.is_empty());
    }
}
