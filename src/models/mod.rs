pub mod event;
pub mod reminder;

pub use event::{EventId, OutreachEvent};
pub use reminder::{OwnerId, PetId, Reminder, ReminderId, ReminderStatus};
