use crate::dates;
use chrono::NaiveDate;

/// The day on screen and the request token of the latest day load.
#[derive(Debug)]
pub struct DayNavigator {
    current: String,
    date_input: String,
    latest: u64,
}

impl DayNavigator {
    pub fn new(today: NaiveDate) -> Self {
        let day = dates::format_day(today);
        Self {
            current: day.clone(),
            date_input: day,
            latest: 0,
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn date_input(&self) -> &str {
        &self.date_input
    }

    /// Makes `day` current and returns the token for the load of it.
    pub fn begin(&mut self, day: &str) -> u64 {
        self.current = day.to_string();
        self.date_input = day.to_string();
        self.latest += 1;
        self.latest
    }

    pub fn is_latest(&self, token: u64) -> bool {
        token == self.latest
    }

    pub fn previous(&self, today: NaiveDate) -> String {
        dates::shift_day(&self.date_input, -1, today)
    }

    pub fn next(&self, today: NaiveDate) -> String {
        dates::shift_day(&self.date_input, 1, today)
    }
}
