use chrono::{Datelike, Duration, NaiveDate};

use crate::rng::RandomSource;

/// Chicken age in whole months, the way a birthday calendar counts them: a month
/// only completes once the day of month has been reached again.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let mut months = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    if months > 0 && to.day() < from.day() {
        months -= 1;
    } else if months < 0 && to.day() > from.day() {
        months += 1;
    }
    months
}

pub fn next_day(date: NaiveDate) -> NaiveDate {
    date.succ_opt().unwrap_or(NaiveDate::MAX)
}

/// Calendar month in which the initial population was born.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthWindow {
    pub year: i32,
    pub month: u32,
}

impl BirthWindow {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn days_in_month(&self) -> u32 {
        let Some(first) = self.first_day() else {
            return 0;
        };
        let next_first = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        next_first
            .map(|next| (next - first).num_days() as u32)
            .unwrap_or(0)
    }

    /// Uniformly random day of the window's month.
    pub fn draw(&self, rng: &mut impl RandomSource) -> NaiveDate {
        let offset = rng.below(self.days_in_month());
        let first = self.first_day().unwrap_or(NaiveDate::MIN);
        first + Duration::days(offset as i64)
    }
}
