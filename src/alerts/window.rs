use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};

pub const DEFAULT_ALERT_WINDOW_DAYS: u32 = 30;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DueStatus {
    Overdue,
    Upcoming,
    Ignorable,
}

impl DueStatus {
    pub fn is_actionable(&self) -> bool {
        !matches!(self, DueStatus::Ignorable)
    }
}

/// Lookahead used to decide which due dates need attention.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AlertWindow(TimeDelta);

impl Default for AlertWindow {
    fn default() -> Self {
        Self::days(DEFAULT_ALERT_WINDOW_DAYS)
    }
}

impl AlertWindow {
    pub fn days(days: u32) -> Self {
        Self(TimeDelta::days(i64::from(days)))
    }

    pub fn lookahead(&self) -> TimeDelta {
        self.0
    }

    /// `due < now + lookahead`, strict. A due date landing exactly on the
    /// cutoff is outside the window.
    pub fn is_within_window(&self, due: NaiveDate, now: DateTime<Utc>) -> bool {
        match now.checked_add_signed(self.0) {
            Some(limit) => due_instant(due) < limit,
            // Cutoff is past the end of the calendar, nothing can reach it.
            None => true,
        }
    }

    pub fn is_actionable(&self, due: NaiveDate, now: DateTime<Utc>) -> bool {
        is_overdue(due, now) || self.is_within_window(due, now)
    }

    pub fn classify(&self, due: NaiveDate, now: DateTime<Utc>) -> DueStatus {
        if is_overdue(due, now) {
            DueStatus::Overdue
        } else if self.is_within_window(due, now) {
            DueStatus::Upcoming
        } else {
            DueStatus::Ignorable
        }
    }
}

/// Due dates are calendar dates; they become instants at midnight UTC.
pub fn due_instant(due: NaiveDate) -> DateTime<Utc> {
    due.and_time(NaiveTime::MIN).and_utc()
}

pub fn is_overdue(due: NaiveDate, now: DateTime<Utc>) -> bool {
    due_instant(due) < now
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDateTime, TimeZone};
    use proptest::prelude::*;
    use proptest_arbitrary_interop::arb;

    use super::*;

    fn midnight(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn due_date_in_the_past_is_overdue() {
        let now = midnight(2025, 3, 10);
        let window = AlertWindow::default();

        assert!(is_overdue(date(2025, 3, 9), now));
        assert_eq!(window.classify(date(2024, 1, 1), now), DueStatus::Overdue);
    }

    #[test]
    fn due_date_equal_to_now_is_actionable_through_the_window_branch() {
        let now = midnight(2025, 3, 10);
        let due = date(2025, 3, 10);
        let window = AlertWindow::default();

        assert!(!is_overdue(due, now), "a date is not strictly before itself");
        assert!(window.is_within_window(due, now));
        assert!(window.is_actionable(due, now));
        assert_eq!(window.classify(due, now), DueStatus::Upcoming);
    }

    #[test]
    fn cutoff_is_excluded() {
        let now = midnight(2025, 3, 1);
        let window = AlertWindow::default();

        assert!(window.is_actionable(date(2025, 3, 30), now));
        assert!(!window.is_actionable(date(2025, 3, 31), now));
        assert_eq!(window.classify(date(2025, 3, 31), now), DueStatus::Ignorable);
    }

    #[test]
    fn afternoon_now_makes_same_day_due_date_overdue() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 15, 30, 0).unwrap();

        assert_eq!(
            AlertWindow::default().classify(date(2025, 3, 10), now),
            DueStatus::Overdue
        );
    }

    #[test]
    fn window_is_unbounded_when_cutoff_overflows() {
        let now = DateTime::<Utc>::MAX_UTC;
        let window = AlertWindow::default();

        assert!(now.checked_add_signed(window.lookahead()).is_none());
        assert!(window.is_within_window(NaiveDate::MAX, now));
        assert!(window.is_actionable(NaiveDate::MAX, now));
        assert_eq!(window.classify(NaiveDate::MAX, now), DueStatus::Overdue);
    }

    #[test]
    fn custom_window_is_respected() {
        let now = midnight(2025, 3, 1);
        let window = AlertWindow::days(7);

        assert_eq!(window.lookahead(), TimeDelta::days(7));
        assert!(window.is_actionable(date(2025, 3, 7), now));
        assert!(!window.is_actionable(date(2025, 3, 8), now));
    }

    #[test]
    fn zero_day_window_only_flags_overdue() {
        let now = midnight(2025, 3, 1);
        let window = AlertWindow::days(0);

        assert!(!window.is_actionable(date(2025, 3, 1), now));
        assert!(window.is_actionable(date(2025, 2, 28), now));
    }

    proptest! {
        #[test]
        fn past_due_dates_are_always_actionable(
            now in arb::<NaiveDateTime>(),
            days_ago in 1i64..5000
        ) {
            let now = now.and_utc();
            let due = now.date_naive().checked_sub_signed(TimeDelta::days(days_ago));
            prop_assume!(due.is_some());
            let due = due.unwrap();

            prop_assert!(is_overdue(due, now));
            prop_assert!(AlertWindow::default().is_actionable(due, now));
        }

        #[test]
        fn classification_matches_window_bounds(
            now in arb::<NaiveDateTime>(),
            due in arb::<NaiveDate>()
        ) {
            let now = now.and_utc();
            let window = AlertWindow::default();
            let status = window.classify(due, now);
            let instant = due_instant(due);

            prop_assert_eq!(status == DueStatus::Overdue, instant < now);
            if let Some(limit) = now.checked_add_signed(window.lookahead()) {
                prop_assert_eq!(status.is_actionable(), instant < limit);
                if instant >= now && instant < limit {
                    prop_assert_eq!(status, DueStatus::Upcoming);
                }
                if instant >= limit {
                    prop_assert_eq!(status, DueStatus::Ignorable);
                }
            }
            prop_assert_eq!(status.is_actionable(), window.is_actionable(due, now));
        }
    }
}
