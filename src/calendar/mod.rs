use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use thiserror::Error;

use crate::models::OutreachEvent;


pub const GOOGLE_CALENDAR_TEMPLATE_URL: &str =
    "https://calendar.google.com/calendar/render?action=TEMPLATE";

pub const DEFAULT_EVENT_DURATION: TimeDelta = TimeDelta::hours(1);

/// Compact UTC form the calendar service expects, e.g. `20240601T100000Z`.
const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Everything except the characters `encodeURIComponent` leaves alone.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MalformedEventError {
    #[error("event has no date")]
    MissingDate,
    #[error("{0} does not exist in timezone {1}")]
    UnresolvableLocalTime(chrono::NaiveDateTime, Tz),
    #[error("event end is out of the supported date range")]
    OutOfRange,
}

#[derive(Debug, Clone)]
pub struct CalendarLinkBuilder {
    base_url: String,
    timezone: Tz,
    default_duration: TimeDelta,
}

impl Default for CalendarLinkBuilder {
    fn default() -> Self {
        Self::new(Tz::UTC)
    }
}

impl CalendarLinkBuilder {
    /// Event dates and times are wall-clock values in `timezone`.
    pub fn new(timezone: Tz) -> Self {
        Self {
            base_url: GOOGLE_CALENDAR_TEMPLATE_URL.to_string(),
            timezone,
            default_duration: DEFAULT_EVENT_DURATION,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_default_duration(mut self, duration: TimeDelta) -> Self {
        self.default_duration = duration;
        self
    }

    /// Start and end of the event in UTC.
    ///
    /// Without a start time the event starts at midnight. Without an end
    /// time it lasts the default duration, rolling over into the next day
    /// when needed.
    pub fn event_span(
        &self,
        event: &OutreachEvent,
    ) -> Result<(DateTime<Utc>, DateTime<Utc>), MalformedEventError> {
        let date = event.event_date.ok_or(MalformedEventError::MissingDate)?;
        let start = self.resolve(date, event.start_time.unwrap_or(NaiveTime::MIN))?;
        let end = match event.end_time {
            Some(end_time) => self.resolve(date, end_time)?,
            None => start
                .checked_add_signed(self.default_duration)
                .ok_or(MalformedEventError::OutOfRange)?,
        };

        Ok((start, end))
    }

    /// Builds the link, refusing events whose dates cannot be resolved.
    pub fn try_build(&self, event: &OutreachEvent) -> Result<String, MalformedEventError> {
        let (start, end) = self.event_span(event)?;
        let dates = format!("{}/{}", format_timestamp(start), format_timestamp(end));
        Ok(self.assemble(event, &dates))
    }

    /// Builds the link without failing. An event with a missing date or a
    /// non-existent local time gets an empty `dates` range, which the
    /// calendar service will not accept.
    pub fn build(&self, event: &OutreachEvent) -> String {
        match self.try_build(event) {
            Ok(link) => link,
            Err(error) => {
                log::warn!("Building calendar link for '{}' anyway: {error}", event.title);
                self.assemble(event, "/")
            }
        }
    }

    fn resolve(
        &self,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<DateTime<Utc>, MalformedEventError> {
        let local = date.and_time(time);
        self.timezone
            .from_local_datetime(&local)
            .earliest()
            .map(|instant| instant.with_timezone(&Utc))
            .ok_or(MalformedEventError::UnresolvableLocalTime(local, self.timezone))
    }

    fn assemble(&self, event: &OutreachEvent, dates: &str) -> String {
        let mut link = format!(
            "{}&text={}&dates={}",
            self.base_url,
            encode_component(&event.title),
            dates
        );

        if let Some(location) = &event.location {
            link.push_str("&location=");
            link.push_str(&encode_component(location));
        }

        if let Some(description) = &event.description {
            link.push_str("&details=");
            link.push_str(&encode_component(description));
        }

        link
    }
}

pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}
