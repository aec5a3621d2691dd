//! Due-date arithmetic shared by cards, bills, loans and installments.

use chrono::{Datelike, Days, NaiveDate};

/// Projects a day-of-month due day onto the current month, rolling to the
/// next month when the day has already passed. The projected date is never
/// before `today`, so the resulting distance is never negative.
///
/// Days beyond the end of a month clamp to its last day (e.g. day 31 in
/// February projects onto Feb 28/29).
pub fn project_due_day(day_of_month: u32, today: NaiveDate) -> NaiveDate {
    let this_month = date_in_month(today.year(), today.month(), day_of_month);
    if this_month >= today {
        return this_month;
    }
    let (next_year, next_month) = if today.month() == 12 {
        (today.year() + 1, 1)
    } else {
        (today.year(), today.month() + 1)
    };
    date_in_month(next_year, next_month, day_of_month)
}

/// Days until a day-of-month due day, counting from `today`. Always >= 0.
pub fn days_until_day_of_month(day_of_month: u32, today: NaiveDate) -> i64 {
    (project_due_day(day_of_month, today) - today).num_days()
}

/// Signed days until a full calendar date. Negative when overdue.
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days()
}

fn date_in_month(year: i32, month: u32, day: u32) -> NaiveDate {
    let day = day.max(1);
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| last_day_of_month(year, month))
}

fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    // The first of a month always exists; the day before it is the last
    // day of the previous month.
    first_of_next
        .and_then(|d| d.checked_sub_days(Days::new(1)))
        .expect("valid month boundary")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_due_day_later_this_month() {
        let today = date(2026, 8, 10);
        assert_eq!(project_due_day(25, today), date(2026, 8, 25));
        assert_eq!(days_until_day_of_month(25, today), 15);
    }

    #[test]
    fn test_due_day_already_passed_rolls_to_next_month() {
        // Day 5 evaluated on the 20th projects onto next month, never
        // yielding a negative distance.
        let today = date(2026, 8, 20);
        assert_eq!(project_due_day(5, today), date(2026, 9, 5));
        assert_eq!(days_until_day_of_month(5, today), 16);
    }

    #[test]
    fn test_due_day_today_is_zero_days() {
        let today = date(2026, 8, 20);
        assert_eq!(days_until_day_of_month(20, today), 0);
    }

    #[test]
    fn test_december_rolls_into_january() {
        let today = date(2026, 12, 20);
        assert_eq!(project_due_day(5, today), date(2027, 1, 5));
    }

    #[test]
    fn test_day_31_clamps_in_short_months() {
        let today = date(2026, 2, 10);
        assert_eq!(project_due_day(31, today), date(2026, 2, 28));
    }

    #[test]
    fn test_days_until_can_be_negative() {
        let today = date(2026, 8, 20);
        assert_eq!(days_until(date(2026, 8, 15), today), -5);
        assert_eq!(days_until(date(2026, 8, 27), today), 7);
    }
}
