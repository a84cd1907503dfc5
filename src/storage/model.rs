use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use thiserror::Error;

use crate::models::{EventId, OutreachEvent, OwnerId, PetId, Reminder, ReminderId, ReminderStatus};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("field `{field}` is not a valid date: {value:?}")]
    InvalidDate { field: &'static str, value: String },
    #[error("field `{field}` is not a valid time: {value:?}")]
    InvalidTime { field: &'static str, value: String },
    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),
    #[error("unknown reminder status {0:?}")]
    UnknownStatus(String),
    #[error("related row `{0}` was not expanded")]
    MissingRelation(&'static str),
}

/// A `pets` row as expanded into a reminder query.
#[derive(Deserialize, Debug, Clone)]
pub struct PetRow {
    pub name: String,
    pub image_url: Option<String>,
    pub owner_id: OwnerId,
}

/// A `medical_reminders` row joined with its pet.
#[derive(Deserialize, Debug, Clone)]
pub struct ReminderRow {
    pub id: ReminderId,
    pub pet_id: PetId,
    pub vaccine_name: String,
    pub next_due_date: String,
    pub status: String,
    pub pets: Option<PetRow>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct EventRow {
    pub id: EventId,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub event_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// A decoded reminder together with the columns the query interface filters on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredReminder {
    pub owner_id: OwnerId,
    pub status: ReminderStatus,
    pub reminder: Reminder,
}

impl TryFrom<ReminderRow> for StoredReminder {
    type Error = DecodeError;

    fn try_from(value: ReminderRow) -> Result<Self, Self::Error> {
        let pet = value.pets.ok_or(DecodeError::MissingRelation("pets"))?;
        if value.vaccine_name.trim().is_empty() {
            return Err(DecodeError::EmptyField("vaccine_name"));
        }

        Ok(Self {
            owner_id: pet.owner_id,
            status: parse_status(&value.status)?,
            reminder: Reminder {
                id: value.id,
                vaccine_name: value.vaccine_name,
                next_due_date: parse_date("next_due_date", &value.next_due_date)?,
                pet_id: value.pet_id,
                pet_name: pet.name,
                pet_image_url: pet.image_url.filter(|url| !url.is_empty()),
            },
        })
    }
}

impl TryFrom<EventRow> for OutreachEvent {
    type Error = DecodeError;

    fn try_from(value: EventRow) -> Result<Self, Self::Error> {
        Ok(Self {
            title: value.title,
            description: non_empty(value.description),
            location: non_empty(value.location),
            event_date: non_empty(value.event_date)
                .map(|date| parse_date("event_date", &date))
                .transpose()?,
            start_time: non_empty(value.start_time)
                .map(|time| parse_time("start_time", &time))
                .transpose()?,
            end_time: non_empty(value.end_time)
                .map(|time| parse_time("end_time", &time))
                .transpose()?,
        })
    }
}

pub(crate) fn status_label(status: ReminderStatus) -> &'static str {
    match status {
        ReminderStatus::Pending => "pending",
        ReminderStatus::Completed => "completed",
    }
}

fn parse_status(status: &str) -> Result<ReminderStatus, DecodeError> {
    match status {
        "pending" => Ok(ReminderStatus::Pending),
        "completed" => Ok(ReminderStatus::Completed),
        other => Err(DecodeError::UnknownStatus(other.to_string())),
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, DecodeError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| DecodeError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Accepts both `HH:MM` and the `HH:MM:SS` form the database returns.
fn parse_time(field: &'static str, value: &str) -> Result<NaiveTime, DecodeError> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| DecodeError::InvalidTime {
            field,
            value: value.to_string(),
        })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
