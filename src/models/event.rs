use chrono::{NaiveDate, NaiveTime};

pub type EventId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutreachEvent {
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    /// Assumed later than `start_time` when present.
    pub end_time: Option<NaiveTime>,
}
