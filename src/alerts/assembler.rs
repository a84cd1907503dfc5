use chrono::{DateTime, Utc};

use crate::models::Reminder;

use super::window::{AlertWindow, DueStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthAlert {
    pub reminder: Reminder,
    pub status: DueStatus,
}

/// Keeps the reminders that need attention, in their original order.
///
/// The input is expected to be sorted by due date already; that ordering is
/// not checked here.
pub fn assemble_health_alerts<I>(
    reminders: I,
    window: &AlertWindow,
    now: DateTime<Utc>,
) -> Vec<HealthAlert>
where
    I: IntoIterator<Item = Reminder>,
{
    reminders
        .into_iter()
        .filter_map(|reminder| {
            let status = window.classify(reminder.next_due_date, now);
            log::debug!(
                "Reminder {} ({} for {}) due {} is {:?}",
                reminder.id,
                reminder.vaccine_name,
                reminder.pet_name,
                reminder.next_due_date,
                status
            );
            status
                .is_actionable()
                .then_some(HealthAlert { reminder, status })
        })
        .collect()
}

pub fn assemble_alerts<I>(reminders: I, window: &AlertWindow, now: DateTime<Utc>) -> Vec<Reminder>
where
    I: IntoIterator<Item = Reminder>,
{
    assemble_health_alerts(reminders, window, now)
        .into_iter()
        .map(|alert| alert.reminder)
        .collect()
}
