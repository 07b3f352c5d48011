use chrono::{Duration, NaiveDate};
use model::ScheduledTransaction;
use std::fmt;

/// Where a scheduled transaction's next due date sits relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    Overdue(i64),
    DueToday,
    DueIn(i64),
}

impl DueStatus {
    pub fn of(next_due_date: NaiveDate, today: NaiveDate) -> Self {
        let days = (next_due_date - today).num_days();
        match days {
            0 => DueStatus::DueToday,
            d if d < 0 => DueStatus::Overdue(-d),
            d => DueStatus::DueIn(d),
        }
    }

    pub fn is_overdue(&self) -> bool {
        matches!(self, DueStatus::Overdue(_))
    }
}

impl fmt::Display for DueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DueStatus::Overdue(1) => f.write_str("Overdue by 1 day"),
            DueStatus::Overdue(days) => write!(f, "Overdue by {days} days"),
            DueStatus::DueToday => f.write_str("Due today"),
            DueStatus::DueIn(1) => f.write_str("Due tomorrow"),
            DueStatus::DueIn(days) => write!(f, "Due in {days} days"),
        }
    }
}

/// Active schedules due within `days` of `today` (overdue ones included),
/// soonest first.
pub fn upcoming(
    scheduled: &[ScheduledTransaction],
    today: NaiveDate,
    days: i64,
) -> Vec<&ScheduledTransaction> {
    let horizon = today + Duration::days(days);
    let mut due: Vec<_> = scheduled
        .iter()
        .filter(|s| s.active && s.next_due_date <= horizon)
        .collect();
    due.sort_by_key(|s| (s.next_due_date, s.id));
    due
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{date, scheduled};

    #[test]
    fn test_due_status() {
        let today = date(2024, 3, 10);
        assert_eq!(DueStatus::of(date(2024, 3, 10), today), DueStatus::DueToday);
        assert_eq!(DueStatus::of(date(2024, 3, 7), today), DueStatus::Overdue(3));
        assert_eq!(DueStatus::of(date(2024, 3, 11), today).to_string(), "Due tomorrow");
        assert_eq!(DueStatus::of(date(2024, 3, 15), today).to_string(), "Due in 5 days");
        assert!(DueStatus::of(date(2024, 3, 9), today).is_overdue());
    }

    #[test]
    fn test_upcoming_window() {
        let today = date(2024, 3, 10);
        let items = vec![
            scheduled(1, date(2024, 3, 20), true),
            scheduled(2, date(2024, 3, 12), true),
            scheduled(3, date(2024, 3, 8), true),
            scheduled(4, date(2024, 3, 11), false),
            scheduled(5, date(2024, 3, 17), true),
        ];
        let ids: Vec<_> = upcoming(&items, today, 7).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 2, 5]);
    }
}
