mod fixtures;
mod model;
mod reminder_storage;

pub use fixtures::load_rows;
pub use model::{DecodeError, EventRow, PetRow, ReminderRow, StoredReminder};
pub use reminder_storage::{InMemoryReminderStorage, ReminderStorage};
