use chrono::NaiveDate;

pub type ReminderId = i64;
pub type PetId = i64;
pub type OwnerId = String;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReminderStatus {
    Pending,
    Completed,
}

/// A vaccination or medical due date tied to a pet.
///
/// Reminders are read-only for the alert logic: they are filtered, never
/// mutated. `vaccine_name` is never empty once a reminder has been decoded
/// from a store row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub id: ReminderId,
    pub vaccine_name: String,
    pub next_due_date: NaiveDate,
    pub pet_id: PetId,
    pub pet_name: String,
    pub pet_image_url: Option<String>,
}
